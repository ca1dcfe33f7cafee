//! Stat compiler.
//!
//! Folds a hull and its slot assignments into a [`CompiledShipStats`].
//!
//! # Combination rules
//!
//! | Stat | Rule |
//! |------|------|
//! | mass, cost | additive, miniaturized per unit |
//! | warp, fuel efficiency, ramscoop | best engine by top warp, first on ties |
//! | firepower, initiative, armor, shields, accuracy, cargo | additive |
//! | weapon range, mass-driver speed | maximum |
//! | scan, penetrating scan | quartic mean `(Σ n·r⁴)^¼` |
//! | bombs, mass-driver catch, mining, terraforming, colonists | additive |
//!
//! Capability stats always use the unminiaturized catalog values. Weapon
//! accuracy stays on the weapon and is not added to ship accuracy.

use super::compiled::{BombingStats, ComponentUsage, CompiledShipStats, MassDriverStats};
use crate::catalog::{Catalog, ComponentSpec, ComponentStats, Cost, HullTemplate};
use crate::config::MiniaturizationRules;
use crate::design::{ShipDesign, SlotAssignment};
use crate::miniaturization::Miniaturized;
use crate::tech::TechLevels;
use crate::validation;

/// Compiles with the standard miniaturization rules.
pub fn compile(
    catalog: &Catalog,
    hull: &HullTemplate,
    assignments: &[SlotAssignment],
    tech: &TechLevels,
) -> CompiledShipStats {
    compile_with_rules(catalog, hull, assignments, tech, &MiniaturizationRules::default())
}

/// Folds every `(slot, component, count)` in assignment order, then runs the
/// engine check and constraint rules.
///
/// Unknown component ids are skipped and reported as
/// `"Component {id} not found"`; the rest of the design still compiles.
pub fn compile_with_rules(
    catalog: &Catalog,
    hull: &HullTemplate,
    assignments: &[SlotAssignment],
    tech: &TechLevels,
    rules: &MiniaturizationRules,
) -> CompiledShipStats {
    tracing::debug!(hull = %hull.id, assignments = assignments.len(), "compiling design");

    let mut fold = Fold::new(hull);
    let mut lookup_errors = Vec::new();

    for entry in assignments.iter().flat_map(|slot| &slot.components) {
        if entry.count == 0 {
            continue;
        }
        let Some(component) = catalog.component(&entry.component_id) else {
            lookup_errors.push(format!("Component {} not found", entry.component_id));
            continue;
        };
        tracing::trace!(component = %component.id, count = entry.count, "folding component");
        fold.add(component, entry.count, &Miniaturized::of(component, tech, rules));
    }

    let mut stats = fold.finish(hull);
    stats.extend_errors(lookup_errors);
    stats.extend_errors(validation::validate(catalog, hull, assignments));

    tracing::debug!(
        hull = %hull.id,
        errors = stats.validation_errors.len(),
        mass = stats.mass,
        "design compiled"
    );
    stats
}

/// Compiles a saved design, adding the slot-level checks that need the
/// design's own layout (unknown slots, category mismatch, overfilled and
/// empty required slots).
///
/// Returns `None` when the design's hull is not in the catalog.
pub fn compile_design(
    catalog: &Catalog,
    design: &ShipDesign,
    tech: &TechLevels,
    rules: &MiniaturizationRules,
) -> Option<CompiledShipStats> {
    let hull = catalog.hull(&design.hull_id)?;
    let mut stats = compile_with_rules(catalog, hull, &design.slots, tech, rules);
    stats.extend_errors(validation::structural_errors(catalog, hull, &design.slots));
    stats.extend_errors(validation::required_slot_errors(hull, &design.slots));
    Some(stats)
}

/// Best engine seen so far.
#[derive(Clone, Copy, Default)]
struct BestEngine {
    warp: u32,
    fuel_efficiency: Option<u32>,
    ramscoop: bool,
}

/// Running totals while folding components.
struct Fold {
    mass_tenths: u64,
    cost: Cost,
    engine: BestEngine,
    has_engine: bool,
    fuel_capacity: u32,
    firepower: u32,
    max_weapon_range: u32,
    armor: u32,
    shields: u32,
    accuracy: u32,
    initiative: u32,
    cargo_capacity: u32,
    colonist_capacity: u32,
    has_colony_module: bool,
    scan_power4: f64,
    pen_power4: f64,
    has_scanner: bool,
    can_detect_cloaked: bool,
    mining_rate: u32,
    terraform_rate: u32,
    bombing: BombingStats,
    mass_driver: MassDriverStats,
    components: Vec<ComponentUsage>,
}

impl Fold {
    fn new(hull: &HullTemplate) -> Self {
        Self {
            mass_tenths: u64::from(hull.stats.mass) * 10,
            cost: hull.cost,
            engine: BestEngine::default(),
            has_engine: false,
            fuel_capacity: hull.stats.fuel,
            firepower: 0,
            max_weapon_range: 0,
            armor: hull.stats.armor,
            shields: 0,
            accuracy: 0,
            initiative: hull.stats.initiative,
            cargo_capacity: hull.stats.cargo,
            colonist_capacity: 0,
            has_colony_module: false,
            scan_power4: 0.0,
            pen_power4: 0.0,
            has_scanner: false,
            can_detect_cloaked: false,
            mining_rate: 0,
            terraform_rate: 0,
            bombing: BombingStats::default(),
            mass_driver: MassDriverStats::default(),
            components: Vec::new(),
        }
    }

    fn add(&mut self, component: &ComponentSpec, count: u32, mini: &Miniaturized) {
        self.record_usage(component, count);

        self.mass_tenths = self
            .mass_tenths
            .saturating_add(mini.mass_tenths.saturating_mul(u64::from(count)));
        self.cost.add(mini.cost.scaled(count));

        let stats = &component.stats;
        self.armor = add(self.armor, stats.armor(), count);
        self.shields = add(self.shields, stats.shield(), count);
        self.mining_rate = add(self.mining_rate, stats.mining_rate(), count);
        self.terraform_rate = add(self.terraform_rate, stats.terraform_rate(), count);

        if let Some(capacity) = component.colonist_capacity() {
            self.colonist_capacity = add(self.colonist_capacity, capacity, count);
            self.has_colony_module = true;
        }

        match *stats {
            ComponentStats::Engine {
                max_warp,
                fuel_efficiency,
                ramscoop,
                ..
            } => {
                self.has_engine = true;
                if max_warp > self.engine.warp {
                    self.engine = BestEngine {
                        warp: max_warp,
                        fuel_efficiency,
                        ramscoop,
                    };
                }
            }
            ComponentStats::Weapon {
                power,
                range,
                initiative,
                ..
            } => {
                self.firepower = add(self.firepower, power, count);
                self.initiative = add(self.initiative, initiative, count);
                self.max_weapon_range = self.max_weapon_range.max(range);
            }
            ComponentStats::Computer { accuracy } | ComponentStats::Electrical { accuracy, .. } => {
                self.accuracy = add(self.accuracy, accuracy, count);
            }
            ComponentStats::Mechanical {
                initiative,
                cargo,
                fuel,
            } => {
                self.initiative = add(self.initiative, initiative, count);
                self.cargo_capacity = add(self.cargo_capacity, cargo, count);
                self.fuel_capacity = add(self.fuel_capacity, fuel, count);
            }
            ComponentStats::Scanner {
                range,
                penetrating,
                detection,
            } => {
                self.has_scanner = true;
                self.scan_power4 += fourth_power(range, count);
                self.pen_power4 += fourth_power(penetrating, count);
                self.can_detect_cloaked |= detection > 0;
            }
            ComponentStats::Cargo { capacity } => {
                self.cargo_capacity = add(self.cargo_capacity, capacity, count);
            }
            ComponentStats::Bomb { kill, structure } => {
                self.bombing.kill = add(self.bombing.kill, kill, count);
                self.bombing.destroy = add(self.bombing.destroy, structure, count);
            }
            ComponentStats::MassDriver { speed, catch } => {
                self.mass_driver.speed = self.mass_driver.speed.max(speed);
                self.mass_driver.catch = add(self.mass_driver.catch, catch, count);
            }
            // Armor, shields, mining, and terraforming are folded above.
            ComponentStats::Shield { .. }
            | ComponentStats::Armor { .. }
            | ComponentStats::Mining { .. }
            | ComponentStats::Terraforming { .. }
            | ComponentStats::MineLayer { .. }
            | ComponentStats::Orbital { .. }
            | ComponentStats::Stargate { .. }
            | ComponentStats::Cloak { .. } => {}
        }
    }

    fn record_usage(&mut self, component: &ComponentSpec, count: u32) {
        match self.components.iter_mut().find(|u| u.id == component.id) {
            Some(usage) => usage.quantity = usage.quantity.saturating_add(count),
            None => self.components.push(ComponentUsage {
                id: component.id.clone(),
                name: component.name.clone(),
                quantity: count,
            }),
        }
    }

    fn finish(self, hull: &HullTemplate) -> CompiledShipStats {
        let pen_scan_range = quartic_root(self.pen_power4);
        CompiledShipStats {
            mass: self.mass_tenths as f64 / 10.0,
            cost: self.cost,
            warp_speed: self.engine.warp,
            ideal_warp: self.engine.warp,
            fuel_efficiency: self.engine.fuel_efficiency,
            is_ramscoop: self.engine.ramscoop,
            has_engine: self.has_engine,
            fuel_capacity: self.fuel_capacity,
            firepower: self.firepower,
            max_weapon_range: self.max_weapon_range,
            armor: self.armor,
            shields: self.shields,
            accuracy: self.accuracy,
            initiative: self.initiative,
            cargo_capacity: self.cargo_capacity,
            colonist_capacity: self.colonist_capacity,
            has_colony_module: self.has_colony_module,
            scan_range: quartic_root(self.scan_power4),
            pen_scan_range,
            planet_scan_range: self.has_scanner.then_some(pen_scan_range),
            can_detect_cloaked: self.can_detect_cloaked,
            mining_rate: self.mining_rate,
            terraform_rate: self.terraform_rate,
            bombing: self.bombing,
            mass_driver: self.mass_driver,
            is_starbase: hull.is_starbase,
            components: self.components,
            is_valid: true,
            validation_errors: Vec::new(),
        }
    }
}

fn add(total: u32, per_unit: u32, count: u32) -> u32 {
    total.saturating_add(per_unit.saturating_mul(count))
}

fn fourth_power(range: u32, count: u32) -> f64 {
    f64::from(count) * f64::from(range).powi(4)
}

/// Inverse of [`fourth_power`] summed; a single scanner reports its own range.
fn quartic_root(power4: f64) -> f64 {
    if power4 > 0.0 { power4.sqrt().sqrt() } else { 0.0 }
}
