use crate::catalog::Cost;

/// Combined bombing power of a design.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BombingStats {
    /// Population kill rating.
    pub kill: u32,
    /// Installation destroy rating.
    pub destroy: u32,
}

/// Packet launch and catch ratings of installed mass drivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MassDriverStats {
    pub speed: u32,
    pub catch: u32,
}

/// One line of the component summary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentUsage {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

/// Aggregated performance, cost, and validity of one design.
///
/// Produced fresh by every compilation; `is_valid` is true exactly when
/// `validation_errors` is empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompiledShipStats {
    /// Total mass, rounded to one decimal place.
    pub mass: f64,
    pub cost: Cost,

    // Movement
    pub warp_speed: u32,
    pub ideal_warp: u32,
    pub fuel_efficiency: Option<u32>,
    pub is_ramscoop: bool,
    pub has_engine: bool,
    pub fuel_capacity: u32,

    // Combat
    pub firepower: u32,
    pub max_weapon_range: u32,
    pub armor: u32,
    pub shields: u32,
    /// Battle-computer accuracy bonus, whole percent.
    pub accuracy: u32,
    pub initiative: u32,

    // Capacity
    pub cargo_capacity: u32,
    pub colonist_capacity: u32,
    pub has_colony_module: bool,

    // Sensors
    pub scan_range: f64,
    pub pen_scan_range: f64,
    /// `None` without any scanner; `Some(0.0)` for orbit-only scanning.
    pub planet_scan_range: Option<f64>,
    pub can_detect_cloaked: bool,

    // Utility
    pub mining_rate: u32,
    pub terraform_rate: u32,
    pub bombing: BombingStats,
    pub mass_driver: MassDriverStats,

    pub is_starbase: bool,
    pub components: Vec<ComponentUsage>,
    pub is_valid: bool,
    pub validation_errors: Vec<String>,
}

impl CompiledShipStats {
    /// Appends errors and keeps `is_valid` in step.
    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = String>) {
        self.validation_errors.extend(errors);
        self.is_valid = self.validation_errors.is_empty();
    }

    pub fn has_planet_scanner(&self) -> bool {
        self.planet_scan_range.is_some()
    }

    /// Installed units of one component id.
    pub fn quantity_of(&self, component_id: &str) -> u32 {
        self.components
            .iter()
            .find(|usage| usage.id == component_id)
            .map_or(0, |usage| usage.quantity)
    }
}
