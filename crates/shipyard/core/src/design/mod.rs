//! Player ship designs and the pure operations that edit them.
//!
//! A [`ShipDesign`] references its hull by id and lists one
//! [`SlotAssignment`] per hull slot. The engine never mutates a design in
//! place: every edit in [`edit`] returns a new design or an error, leaving the
//! input untouched.

pub mod edit;

pub use edit::{
    DesignEditError, add_component, change_hull, clear_slot, design_cost, remove_component,
    set_slot_component,
};

use crate::catalog::HullTemplate;

/// A quantity of one component placed in a slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentAssignment {
    pub component_id: String,
    pub count: u32,
}

impl ComponentAssignment {
    pub fn new(component_id: impl Into<String>, count: u32) -> Self {
        Self {
            component_id: component_id.into(),
            count,
        }
    }
}

/// Contents of one hull slot.
///
/// Current rules allow a single distinct component id per slot; the list
/// shape leaves room for mixed slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAssignment {
    pub slot_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub components: Vec<ComponentAssignment>,
}

impl SlotAssignment {
    pub fn empty(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            components: Vec::new(),
        }
    }

    pub fn with(slot_id: impl Into<String>, component_id: impl Into<String>, count: u32) -> Self {
        Self {
            slot_id: slot_id.into(),
            components: vec![ComponentAssignment::new(component_id, count)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.iter().all(|c| c.count == 0)
    }

    /// Sum of counts across every component in the slot, saturating at `u32::MAX`.
    pub fn total_count(&self) -> u32 {
        self.components
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.count))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipDesign {
    pub id: String,
    pub name: String,
    pub hull_id: String,
    pub slots: Vec<SlotAssignment>,
    pub player_id: String,
    pub created_turn: u32,
}

impl ShipDesign {
    /// A fresh design with one empty assignment per hull slot.
    pub fn empty(
        hull: &HullTemplate,
        id: impl Into<String>,
        player_id: impl Into<String>,
        turn: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: format!("New {}", hull.name),
            hull_id: hull.id.clone(),
            slots: empty_slots(hull),
            player_id: player_id.into(),
            created_turn: turn,
        }
    }

    pub fn slot(&self, slot_id: &str) -> Option<&SlotAssignment> {
        self.slots.iter().find(|s| s.slot_id == slot_id)
    }

    /// Total installed units of `component_id` across all slots.
    pub fn installed_count(&self, component_id: &str) -> u32 {
        self.slots
            .iter()
            .flat_map(|s| &s.components)
            .filter(|c| c.component_id == component_id)
            .fold(0u32, |total, c| total.saturating_add(c.count))
    }
}

pub(crate) fn empty_slots(hull: &HullTemplate) -> Vec<SlotAssignment> {
    hull.slots
        .iter()
        .map(|slot| SlotAssignment::empty(slot.code.clone()))
        .collect()
}
