//! Deterministic ship-design rules shared by game servers and tools.
//!
//! `shipyard-core` answers four questions about a player's ship designs: which
//! hulls and components are available at given tech levels, what a design's
//! aggregate stats are, whether it is legal, and what it costs. Every function
//! is pure over an immutable [`Catalog`], a [`TechLevels`] snapshot, and an
//! optional [`TraitProfile`]. [`engine::DesignEngine`] bundles those inputs
//! with a [`DesignConfig`] for hosts that prefer a single handle.
pub mod catalog;
pub mod config;
pub mod design;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod miniaturization;
pub mod stats;
pub mod tech;
pub mod traits;
pub mod validation;

#[cfg(test)]
mod fixtures;

pub use catalog::{
    Capability, CapabilityKind, Catalog, CatalogBuilder, CatalogError, ComponentCategory,
    ComponentSpec, ComponentStats, ConstraintRule, Cost, HullRole, HullStats, HullTemplate,
    RuleKind, SlotDefinition,
};
pub use config::{DesignConfig, MiniaturizationRules};
pub use design::{
    ComponentAssignment, DesignEditError, ShipDesign, SlotAssignment, add_component, change_hull,
    clear_slot, design_cost, remove_component, set_slot_component,
};
pub use eligibility::{
    EligibleComponent, available_components_for_slot, available_hulls, is_component_usable,
    is_hull_usable,
};
pub use engine::DesignEngine;
pub use error::{ErrorSeverity, ShipyardError};
pub use miniaturization::{
    Miniaturized, miniaturization_factor, miniaturized_cost, miniaturized_mass,
};
pub use stats::{
    BombingStats, CompiledShipStats, ComponentUsage, MassDriverStats, compile, compile_design,
    compile_with_rules,
};
pub use tech::{TechField, TechLevels, TechRequirement};
pub use traits::{LesserTrait, PrimaryTrait, TraitGate, TraitProfile};
pub use validation::{MISSING_ENGINE, validate, validate_design};
