//! Tech-driven mass and cost reduction.
//!
//! Every level a player holds above a component's requirement in the
//! component's primary field removes 4% of its mass and cost, down to a floor
//! of 20% of the base value. Only size and price shrink; capability stats are
//! never miniaturized.
//!
//! Mass is rounded to one decimal place. Each cost currency is rounded up, so
//! rounding never favours the player. Arithmetic runs on whole percentages
//! and tenths of a unit, which keeps results exact and platform independent.

use crate::catalog::{ComponentSpec, Cost};
use crate::config::MiniaturizationRules;
use crate::tech::TechLevels;

/// Scaling factor for a player at `player_level` building something that
/// needs `required_level`, under the standard 4%-per-level rule.
pub fn miniaturization_factor(player_level: u32, required_level: u32) -> f64 {
    MiniaturizationRules::default().factor(player_level, required_level)
}

/// Per-unit miniaturized values for one component and one player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Miniaturized {
    /// Mass in tenths of a unit.
    pub mass_tenths: u64,
    pub cost: Cost,
    /// Player levels above the requirement in the primary field.
    pub levels_above: u32,
    /// Whole-percent reduction applied to mass and cost.
    pub reduction_percent: u32,
}

impl Miniaturized {
    pub fn of(component: &ComponentSpec, tech: &TechLevels, rules: &MiniaturizationRules) -> Self {
        let player = tech.level(component.tech.primary_field());
        let required = component.tech.required_level();
        let retained = rules.retained_percent(player, required);

        Self {
            mass_tenths: scale_tenths(component.mass, retained),
            cost: component.cost.map(|amount| scale_ceil(amount, retained)),
            levels_above: player.saturating_sub(required),
            reduction_percent: 100 - retained,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass_tenths as f64 / 10.0
    }

    /// Short label for picker views.
    pub fn description(&self) -> String {
        if self.reduction_percent == 0 {
            "No miniaturization".to_owned()
        } else {
            format!("{}% smaller", self.reduction_percent)
        }
    }
}

/// Miniaturized mass of one unit, rounded to one decimal place.
pub fn miniaturized_mass(component: &ComponentSpec, tech: &TechLevels) -> f64 {
    Miniaturized::of(component, tech, &MiniaturizationRules::default()).mass()
}

/// Miniaturized cost of one unit, each currency rounded up.
pub fn miniaturized_cost(component: &ComponentSpec, tech: &TechLevels) -> Cost {
    Miniaturized::of(component, tech, &MiniaturizationRules::default()).cost
}

/// `round(base * percent / 100, 1 decimal)` expressed in tenths, half rounding up.
fn scale_tenths(base: u32, percent: u32) -> u64 {
    (u64::from(base) * u64::from(percent) + 5) / 10
}

/// `ceil(base * percent / 100)`.
fn scale_ceil(base: u32, percent: u32) -> u32 {
    let scaled = (u64::from(base) * u64::from(percent)).div_ceil(100);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
