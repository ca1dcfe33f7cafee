//! Slot-level editing operations.
//!
//! Each operation resolves the design's hull and the target slot in the
//! catalog, checks the request, and returns an edited copy. Failures leave the
//! caller's design as it was.

use super::{ComponentAssignment, ShipDesign, SlotAssignment, empty_slots};
use crate::catalog::{Catalog, ComponentCategory, ComponentSpec, Cost, HullTemplate, SlotDefinition};
use crate::error::{ErrorSeverity, ShipyardError};

/// Reasons a design mutation is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DesignEditError {
    #[error("Hull {0} not found")]
    HullNotFound(String),

    #[error("Component {0} not found")]
    ComponentNotFound(String),

    #[error("Slot {slot} not found on hull {hull}")]
    SlotNotFound { hull: String, slot: String },

    #[error("Slot {0} is fixed and cannot be edited")]
    SlotNotEditable(String),

    #[error("Component {component} ({category}) cannot be installed in slot {slot}")]
    CategoryNotAccepted {
        component: String,
        category: ComponentCategory,
        slot: String,
    },

    #[error("component count must be at least 1")]
    InvalidCount,

    #[error("Slot {slot} allows at most {max} components")]
    SlotFull { slot: String, max: u32 },

    #[error("Slot {slot} already holds {existing}")]
    SlotOccupied { slot: String, existing: String },

    #[error("Component {component} is not installed in slot {slot}")]
    ComponentNotPresent { slot: String, component: String },
}

impl ShipyardError for DesignEditError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SlotFull { .. } | Self::SlotOccupied { .. } => ErrorSeverity::Recoverable,
            Self::HullNotFound(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HullNotFound(_) => "DESIGN_HULL_NOT_FOUND",
            Self::ComponentNotFound(_) => "DESIGN_COMPONENT_NOT_FOUND",
            Self::SlotNotFound { .. } => "DESIGN_SLOT_NOT_FOUND",
            Self::SlotNotEditable(_) => "DESIGN_SLOT_NOT_EDITABLE",
            Self::CategoryNotAccepted { .. } => "DESIGN_CATEGORY_NOT_ACCEPTED",
            Self::InvalidCount => "DESIGN_INVALID_COUNT",
            Self::SlotFull { .. } => "DESIGN_SLOT_FULL",
            Self::SlotOccupied { .. } => "DESIGN_SLOT_OCCUPIED",
            Self::ComponentNotPresent { .. } => "DESIGN_COMPONENT_NOT_PRESENT",
        }
    }
}

/// Replaces the slot's contents with `count` units of one component.
///
/// The count is clamped to the slot maximum.
pub fn set_slot_component(
    catalog: &Catalog,
    design: &ShipDesign,
    slot_id: &str,
    component_id: &str,
    count: u32,
) -> Result<ShipDesign, DesignEditError> {
    logged("set_slot_component", design, slot_id, || {
        if count == 0 {
            return Err(DesignEditError::InvalidCount);
        }
        let (_, slot) = editable_slot(catalog, design, slot_id)?;
        let component = installable(catalog, slot, component_id)?;
        let count = count.min(slot.max);

        Ok(with_slot(design, slot_id, |assignment| {
            assignment.components = vec![ComponentAssignment::new(component.id.clone(), count)];
        }))
    })
}

/// Adds `count` units to the slot, merging with units already there.
pub fn add_component(
    catalog: &Catalog,
    design: &ShipDesign,
    slot_id: &str,
    component_id: &str,
    count: u32,
) -> Result<ShipDesign, DesignEditError> {
    logged("add_component", design, slot_id, || {
        if count == 0 {
            return Err(DesignEditError::InvalidCount);
        }
        let (_, slot) = editable_slot(catalog, design, slot_id)?;
        let component = installable(catalog, slot, component_id)?;

        let current = design.slot(slot_id);
        if let Some(other) = current
            .into_iter()
            .flat_map(|s| &s.components)
            .find(|c| c.component_id != component.id && c.count > 0)
        {
            return Err(DesignEditError::SlotOccupied {
                slot: slot_id.to_owned(),
                existing: other.component_id.clone(),
            });
        }
        let installed = current.map_or(0, SlotAssignment::total_count);
        if installed.saturating_add(count) > slot.max {
            return Err(DesignEditError::SlotFull {
                slot: slot_id.to_owned(),
                max: slot.max,
            });
        }

        Ok(with_slot(design, slot_id, |assignment| {
            match assignment
                .components
                .iter_mut()
                .find(|c| c.component_id == component.id)
            {
                Some(existing) => existing.count += count,
                None => assignment
                    .components
                    .push(ComponentAssignment::new(component.id.clone(), count)),
            }
        }))
    })
}

/// Removes a single unit of `component_id`, dropping the entry at zero.
pub fn remove_component(
    catalog: &Catalog,
    design: &ShipDesign,
    slot_id: &str,
    component_id: &str,
) -> Result<ShipDesign, DesignEditError> {
    logged("remove_component", design, slot_id, || {
        editable_slot(catalog, design, slot_id)?;
        let present = design
            .slot(slot_id)
            .into_iter()
            .flat_map(|s| &s.components)
            .any(|c| c.component_id == component_id && c.count > 0);
        if !present {
            return Err(DesignEditError::ComponentNotPresent {
                slot: slot_id.to_owned(),
                component: component_id.to_owned(),
            });
        }

        Ok(with_slot(design, slot_id, |assignment| {
            for entry in &mut assignment.components {
                if entry.component_id == component_id {
                    entry.count = entry.count.saturating_sub(1);
                }
            }
            assignment.components.retain(|c| c.count > 0);
        }))
    })
}

pub fn clear_slot(
    catalog: &Catalog,
    design: &ShipDesign,
    slot_id: &str,
) -> Result<ShipDesign, DesignEditError> {
    logged("clear_slot", design, slot_id, || {
        editable_slot(catalog, design, slot_id)?;
        Ok(with_slot(design, slot_id, |assignment| assignment.components.clear()))
    })
}

/// Moves the design onto another hull with every slot empty.
///
/// Id, name, owner, and creation turn carry over.
pub fn change_hull(
    catalog: &Catalog,
    design: &ShipDesign,
    new_hull_id: &str,
) -> Result<ShipDesign, DesignEditError> {
    let Some(hull) = catalog.hull(new_hull_id) else {
        tracing::debug!(design = %design.id, hull = new_hull_id, "hull change rejected");
        return Err(DesignEditError::HullNotFound(new_hull_id.to_owned()));
    };
    tracing::debug!(design = %design.id, from = %design.hull_id, to = %hull.id, "hull changed");
    Ok(ShipDesign {
        hull_id: hull.id.clone(),
        slots: empty_slots(hull),
        ..design.clone()
    })
}

/// List price of hull plus installed components, without miniaturization.
///
/// Unknown ids contribute nothing.
pub fn design_cost(catalog: &Catalog, design: &ShipDesign) -> Cost {
    let mut total = catalog.hull(&design.hull_id).map(|h| h.cost).unwrap_or_default();
    for entry in design.slots.iter().flat_map(|s| &s.components) {
        if let Some(component) = catalog.component(&entry.component_id) {
            total.add(component.cost.scaled(entry.count));
        }
    }
    total
}

fn logged(
    operation: &'static str,
    design: &ShipDesign,
    slot_id: &str,
    edit: impl FnOnce() -> Result<ShipDesign, DesignEditError>,
) -> Result<ShipDesign, DesignEditError> {
    let result = edit();
    if let Err(err) = &result {
        tracing::debug!(
            operation,
            design = %design.id,
            slot = slot_id,
            code = err.error_code(),
            error = %err,
            "design edit rejected"
        );
    }
    result
}

fn editable_slot<'c>(
    catalog: &'c Catalog,
    design: &ShipDesign,
    slot_id: &str,
) -> Result<(&'c HullTemplate, &'c SlotDefinition), DesignEditError> {
    let hull = catalog
        .hull(&design.hull_id)
        .ok_or_else(|| DesignEditError::HullNotFound(design.hull_id.clone()))?;
    let slot = hull.slot(slot_id).ok_or_else(|| DesignEditError::SlotNotFound {
        hull: hull.name.clone(),
        slot: slot_id.to_owned(),
    })?;
    if !slot.editable {
        return Err(DesignEditError::SlotNotEditable(slot_id.to_owned()));
    }
    Ok((hull, slot))
}

fn installable<'c>(
    catalog: &'c Catalog,
    slot: &SlotDefinition,
    component_id: &str,
) -> Result<&'c ComponentSpec, DesignEditError> {
    let component = catalog
        .component(component_id)
        .ok_or_else(|| DesignEditError::ComponentNotFound(component_id.to_owned()))?;
    if !slot.accepts(component.category()) {
        return Err(DesignEditError::CategoryNotAccepted {
            component: component.name.clone(),
            category: component.category(),
            slot: slot.code.clone(),
        });
    }
    Ok(component)
}

fn with_slot(
    design: &ShipDesign,
    slot_id: &str,
    edit: impl FnOnce(&mut SlotAssignment),
) -> ShipDesign {
    let mut next = design.clone();
    let idx = match next.slots.iter().position(|s| s.slot_id == slot_id) {
        Some(idx) => idx,
        None => {
            next.slots.push(SlotAssignment::empty(slot_id));
            next.slots.len() - 1
        }
    };
    edit(&mut next.slots[idx]);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentStats;
    use crate::fixtures;

    fn design(catalog: &Catalog) -> ShipDesign {
        let hull = catalog.hull("hull_destroyer").unwrap();
        ShipDesign::empty(hull, "design_1", "player_1", 3)
    }

    #[test]
    fn set_replaces_and_clamps_to_slot_max() {
        let catalog = fixtures::catalog();
        let design = design(&catalog);

        let next = set_slot_component(&catalog, &design, "W1", "wpn_laser", 9).unwrap();
        assert_eq!(next.slot("W1").unwrap().components, [ComponentAssignment::new("wpn_laser", 2)]);

        let next = set_slot_component(&catalog, &next, "W1", "wpn_x_ray", 1).unwrap();
        assert_eq!(next.slot("W1").unwrap().components, [ComponentAssignment::new("wpn_x_ray", 1)]);
        // Input design untouched
        assert!(design.slot("W1").unwrap().is_empty());
    }

    #[test]
    fn set_rejects_wrong_category_and_unknown_ids() {
        let catalog = fixtures::catalog();
        let design = design(&catalog);

        let err = set_slot_component(&catalog, &design, "W1", "scan_rhino", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Component Rhino Scanner (Scanner) cannot be installed in slot W1"
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        assert_eq!(
            set_slot_component(&catalog, &design, "W1", "wpn_phaser", 1).unwrap_err(),
            DesignEditError::ComponentNotFound("wpn_phaser".into())
        );
        assert_eq!(
            set_slot_component(&catalog, &design, "Z9", "wpn_laser", 1).unwrap_err(),
            DesignEditError::SlotNotFound {
                hull: "Destroyer".into(),
                slot: "Z9".into()
            }
        );
        assert_eq!(
            set_slot_component(&catalog, &design, "W1", "wpn_laser", 0).unwrap_err(),
            DesignEditError::InvalidCount
        );
    }

    #[test]
    fn add_merges_counts_until_full() {
        let catalog = fixtures::catalog();
        let design = design(&catalog);

        let next = add_component(&catalog, &design, "W1", "wpn_laser", 1).unwrap();
        let next = add_component(&catalog, &next, "W1", "wpn_laser", 1).unwrap();
        assert_eq!(next.slot("W1").unwrap().total_count(), 2);

        let err = add_component(&catalog, &next, "W1", "wpn_laser", 1).unwrap_err();
        assert_eq!(err, DesignEditError::SlotFull { slot: "W1".into(), max: 2 });
        assert!(err.severity().is_recoverable());

        let err = add_component(&catalog, &next, "W1", "wpn_x_ray", 1).unwrap_err();
        assert!(matches!(
            err,
            DesignEditError::SlotOccupied { ref existing, .. } if existing == "wpn_laser"
        ));
    }

    #[test]
    fn add_refuses_when_existing_counts_are_oversized() {
        let catalog = fixtures::catalog();
        let mut design = design(&catalog);
        design.slots[1].components = vec![
            ComponentAssignment::new("wpn_laser", u32::MAX),
            ComponentAssignment::new("wpn_laser", 2),
        ];

        assert_eq!(
            add_component(&catalog, &design, "W1", "wpn_laser", 1).unwrap_err(),
            DesignEditError::SlotFull { slot: "W1".into(), max: 2 }
        );
    }

    #[test]
    fn remove_takes_one_unit_at_a_time() {
        let catalog = fixtures::catalog();
        let design = set_slot_component(&catalog, &design(&catalog), "W1", "wpn_laser", 2).unwrap();

        let next = remove_component(&catalog, &design, "W1", "wpn_laser").unwrap();
        assert_eq!(next.slot("W1").unwrap().total_count(), 1);
        let next = remove_component(&catalog, &next, "W1", "wpn_laser").unwrap();
        assert!(next.slot("W1").unwrap().components.is_empty());

        assert!(matches!(
            remove_component(&catalog, &next, "W1", "wpn_laser"),
            Err(DesignEditError::ComponentNotPresent { .. })
        ));
    }

    #[test]
    fn fixed_slots_reject_every_edit() {
        let catalog = fixtures::catalog();
        let design = design(&catalog);

        assert_eq!(
            clear_slot(&catalog, &design, "FX").unwrap_err(),
            DesignEditError::SlotNotEditable("FX".into())
        );
        assert!(set_slot_component(&catalog, &design, "FX", "cargo_pod", 1).is_err());
        assert!(add_component(&catalog, &design, "FX", "cargo_pod", 1).is_err());
    }

    #[test]
    fn clear_and_change_hull() {
        let catalog = fixtures::catalog();
        let design =
            set_slot_component(&catalog, &design(&catalog), "E1", "eng_long_hump_6", 1).unwrap();

        let cleared = clear_slot(&catalog, &design, "E1").unwrap();
        assert!(cleared.slot("E1").unwrap().is_empty());

        let moved = change_hull(&catalog, &design, "hull_scout").unwrap();
        assert_eq!(moved.hull_id, "hull_scout");
        assert_eq!(moved.name, design.name);
        assert_eq!(moved.id, design.id);
        assert_eq!(moved.created_turn, 3);
        assert!(moved.slots.iter().all(SlotAssignment::is_empty));
        assert_eq!(moved.slots.len(), catalog.hull("hull_scout").unwrap().slots.len());

        assert_eq!(
            change_hull(&catalog, &design, "hull_nova").unwrap_err(),
            DesignEditError::HullNotFound("hull_nova".into())
        );
    }

    #[test]
    fn design_cost_uses_list_prices() {
        let catalog = fixtures::catalog();
        let design = set_slot_component(&catalog, &design(&catalog), "W1", "wpn_laser", 2).unwrap();
        let hull_cost = catalog.hull("hull_destroyer").unwrap().cost;
        let laser = catalog.component("wpn_laser").unwrap();
        assert!(matches!(laser.stats, ComponentStats::Weapon { .. }));

        let mut expected = hull_cost;
        expected.add(laser.cost.scaled(2));
        assert_eq!(design_cost(&catalog, &design), expected);
    }
}
