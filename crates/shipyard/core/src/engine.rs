//! Convenience facade over the catalog and design rules.

use crate::catalog::{Catalog, Cost, HullTemplate};
use crate::config::DesignConfig;
use crate::design::{self, DesignEditError, ShipDesign, SlotAssignment};
use crate::eligibility::{self, EligibleComponent};
use crate::stats::{self, CompiledShipStats};
use crate::tech::TechLevels;
use crate::traits::TraitProfile;
use crate::validation;

/// Borrowed catalog plus the active [`DesignConfig`].
///
/// Holds no mutable state: every method is a pure function of its inputs, so
/// one engine can be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct DesignEngine<'a> {
    catalog: &'a Catalog,
    config: &'a DesignConfig,
}

impl<'a> DesignEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a DesignConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &'a DesignConfig {
        self.config
    }

    pub fn available_hulls(
        &self,
        tech: &TechLevels,
        traits: Option<&TraitProfile>,
    ) -> Vec<&'a HullTemplate> {
        eligibility::available_hulls(self.catalog, tech, traits)
    }

    /// Components for one slot of a hull given by id; unknown hulls yield nothing.
    pub fn available_components_for_slot(
        &self,
        hull_id: &str,
        slot_code: &str,
        tech: &TechLevels,
        traits: Option<&TraitProfile>,
    ) -> Vec<EligibleComponent<'a>> {
        match self.catalog.hull(hull_id) {
            Some(hull) => eligibility::available_components_for_slot(
                self.catalog,
                hull,
                slot_code,
                tech,
                traits,
                &self.config.miniaturization,
            ),
            None => Vec::new(),
        }
    }

    pub fn compile(
        &self,
        hull: &HullTemplate,
        assignments: &[SlotAssignment],
        tech: &TechLevels,
    ) -> CompiledShipStats {
        let rules = &self.config.miniaturization;
        stats::compile_with_rules(self.catalog, hull, assignments, tech, rules)
    }

    pub fn compile_design(
        &self,
        design: &ShipDesign,
        tech: &TechLevels,
    ) -> Option<CompiledShipStats> {
        stats::compile_design(self.catalog, design, tech, &self.config.miniaturization)
    }

    pub fn validate(&self, hull: &HullTemplate, assignments: &[SlotAssignment]) -> Vec<String> {
        validation::validate(self.catalog, hull, assignments)
    }

    pub fn validate_design(&self, design: &ShipDesign, tech: &TechLevels) -> Vec<String> {
        validation::validate_design(self.catalog, design, tech, &self.config.miniaturization)
    }

    /// Empty design on the given hull.
    pub fn new_design(
        &self,
        hull_id: &str,
        id: impl Into<String>,
        player_id: impl Into<String>,
        turn: u32,
    ) -> Result<ShipDesign, DesignEditError> {
        let hull = self
            .catalog
            .hull(hull_id)
            .ok_or_else(|| DesignEditError::HullNotFound(hull_id.to_owned()))?;
        Ok(ShipDesign::empty(hull, id, player_id, turn))
    }

    pub fn set_slot_component(
        &self,
        design: &ShipDesign,
        slot_id: &str,
        component_id: &str,
        count: u32,
    ) -> Result<ShipDesign, DesignEditError> {
        design::set_slot_component(self.catalog, design, slot_id, component_id, count)
    }

    pub fn add_component(
        &self,
        design: &ShipDesign,
        slot_id: &str,
        component_id: &str,
        count: u32,
    ) -> Result<ShipDesign, DesignEditError> {
        design::add_component(self.catalog, design, slot_id, component_id, count)
    }

    pub fn remove_component(
        &self,
        design: &ShipDesign,
        slot_id: &str,
        component_id: &str,
    ) -> Result<ShipDesign, DesignEditError> {
        design::remove_component(self.catalog, design, slot_id, component_id)
    }

    pub fn clear_slot(
        &self,
        design: &ShipDesign,
        slot_id: &str,
    ) -> Result<ShipDesign, DesignEditError> {
        design::clear_slot(self.catalog, design, slot_id)
    }

    pub fn change_hull(
        &self,
        design: &ShipDesign,
        new_hull_id: &str,
    ) -> Result<ShipDesign, DesignEditError> {
        design::change_hull(self.catalog, design, new_hull_id)
    }

    pub fn design_cost(&self, design: &ShipDesign) -> Cost {
        design::design_cost(self.catalog, design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MiniaturizationRules;
    use crate::fixtures;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_shareable() {
        assert_send_sync::<DesignEngine<'static>>();
    }

    #[test]
    fn edit_then_compile() {
        let catalog = fixtures::catalog();
        let config = DesignConfig::default();
        let engine = DesignEngine::new(&catalog, &config);
        let tech = TechLevels::uniform(5);

        let design = engine.new_design("hull_scout", "d1", "p1", 1).unwrap();
        let design = engine.set_slot_component(&design, "E1", "eng_long_hump_6", 1).unwrap();
        let design = engine.set_slot_component(&design, "S1", "scan_rhino", 1).unwrap();

        let stats = engine.compile_design(&design, &tech).unwrap();
        assert!(stats.is_valid, "{:?}", stats.validation_errors);
        assert_eq!(stats.warp_speed, 6);
        assert_eq!(stats.scan_range, 50.0);
        assert!(engine.validate_design(&design, &tech).is_empty());
        assert_eq!(
            engine.new_design("hull_x", "d", "p", 0).unwrap_err(),
            DesignEditError::HullNotFound("hull_x".into())
        );
    }

    #[test]
    fn configured_rules_drive_miniaturization() {
        let catalog = fixtures::catalog();
        let config = DesignConfig::with_miniaturization(MiniaturizationRules {
            reduction_per_level_percent: 10,
            max_reduction_percent: 50,
        });
        let engine = DesignEngine::new(&catalog, &config);
        let tech = TechLevels::uniform(26);

        let offered = engine.available_components_for_slot("hull_scout", "E1", &tech, None);
        let hump = offered
            .iter()
            .find(|e| e.component.id == "eng_long_hump_6")
            .unwrap();
        assert_eq!(hump.miniaturized.reduction_percent, 50);
        assert_eq!(hump.miniaturized.mass(), 4.5);

        assert!(engine.available_components_for_slot("hull_x", "E1", &tech, None).is_empty());
        assert!(!engine.available_hulls(&tech, None).is_empty());
    }
}
