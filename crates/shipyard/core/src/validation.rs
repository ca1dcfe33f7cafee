//! Validation engine.
//!
//! [`validate`] runs the engine check and every constraint rule declared by
//! the installed components. The slot-level checks ([`structural_errors`],
//! [`required_slot_errors`]) and the hull tech check belong to the caller
//! that owns the design layout, and are combined in [`validate_design`].
//!
//! All checks return human-readable messages; an empty list means valid.

use crate::catalog::{
    CapabilityKind, Catalog, ComponentSpec, ConstraintRule, HullTemplate, RuleKind, SlotDefinition,
};
use crate::config::MiniaturizationRules;
use crate::design::{ShipDesign, SlotAssignment};
use crate::stats::compile_design;
use crate::tech::TechLevels;

pub const MISSING_ENGINE: &str = "Ship requires at least one engine";

/// One installed component with its count summed across slots.
struct Installed<'a> {
    component: &'a ComponentSpec,
    count: u32,
}

/// Groups assignments by component id in first-seen order, skipping unknown ids.
fn installed<'a>(catalog: &'a Catalog, assignments: &[SlotAssignment]) -> Vec<Installed<'a>> {
    let mut grouped: Vec<Installed<'a>> = Vec::new();
    for entry in assignments.iter().flat_map(|slot| &slot.components) {
        let Some(component) = catalog.component(&entry.component_id) else {
            continue;
        };
        match grouped.iter_mut().find(|i| i.component.id == component.id) {
            Some(existing) => existing.count = existing.count.saturating_add(entry.count),
            None => grouped.push(Installed {
                component,
                count: entry.count,
            }),
        }
    }
    grouped.retain(|i| i.count > 0);
    grouped
}

/// Engine check followed by every declared constraint rule.
pub fn validate(
    catalog: &Catalog,
    hull: &HullTemplate,
    assignments: &[SlotAssignment],
) -> Vec<String> {
    let installed = installed(catalog, assignments);
    let mut errors = Vec::new();

    if !hull.is_starbase && !carries(&installed, CapabilityKind::Propulsion) {
        errors.push(MISSING_ENGINE.to_owned());
    }

    for subject in &installed {
        for rule in &subject.component.constraints {
            if violates(rule, subject, &installed, hull) {
                errors.push(rule.message.clone());
            }
        }
    }
    errors
}

fn carries(installed: &[Installed<'_>], capability: CapabilityKind) -> bool {
    installed.iter().any(|i| i.component.has_capability(capability))
}

fn violates(
    rule: &ConstraintRule,
    subject: &Installed<'_>,
    installed: &[Installed<'_>],
    hull: &HullTemplate,
) -> bool {
    match &rule.kind {
        RuleKind::MaxPerHull { max } => subject.count > *max,
        RuleKind::ExclusiveToHullType { hull_types } => {
            !hull_types.is_empty() && !hull_types.iter().any(|t| hull.matches_type(t))
        }
        RuleKind::RequiresTrait { capability } => !carries(installed, *capability),
        RuleKind::MutuallyExclusive {
            component_ids,
            capabilities,
        } => installed.iter().any(|i| {
            component_ids.iter().any(|id| *id == i.component.id)
                || capabilities.iter().any(|c| i.component.has_capability(*c))
        }),
        RuleKind::Unknown { .. } => false,
    }
}

/// Slot checks: unknown slots, category mismatch, overfill.
///
/// Capacity is judged per slot code, so a slot listed twice is summed.
pub fn structural_errors(
    catalog: &Catalog,
    hull: &HullTemplate,
    assignments: &[SlotAssignment],
) -> Vec<String> {
    let mut errors = Vec::new();
    let mut filled: Vec<(&SlotDefinition, u32)> = Vec::new();
    for assignment in assignments {
        if assignment.is_empty() {
            continue;
        }
        let Some(slot) = hull.slot(&assignment.slot_id) else {
            errors.push(format!("Slot {} not found on hull {}", assignment.slot_id, hull.name));
            continue;
        };
        for entry in &assignment.components {
            if let Some(component) = catalog.component(&entry.component_id) {
                if entry.count > 0 && !slot.accepts(component.category()) {
                    errors.push(format!(
                        "Component {} ({}) cannot be installed in slot {}",
                        component.name,
                        component.category(),
                        slot.code
                    ));
                }
            }
        }
        let count = assignment.total_count();
        match filled.iter_mut().find(|(s, _)| s.code == slot.code) {
            Some((_, total)) => *total = total.saturating_add(count),
            None => filled.push((slot, count)),
        }
    }
    for (slot, total) in filled {
        if total > slot.max {
            errors.push(format!(
                "Slot {} holds {} components but allows at most {}",
                slot.code, total, slot.max
            ));
        }
    }
    errors
}

/// `"Required slot {id} is empty"` for every required slot with nothing in it.
pub fn required_slot_errors(hull: &HullTemplate, assignments: &[SlotAssignment]) -> Vec<String> {
    hull.slots
        .iter()
        .filter(|slot| slot.required)
        .filter(|slot| {
            assignments
                .iter()
                .filter(|a| a.slot_id == slot.code)
                .all(SlotAssignment::is_empty)
        })
        .map(|slot| format!("Required slot {} is empty", slot.code))
        .collect()
}

/// Every shortfall against the hull's tech requirement, field by field.
pub fn hull_tech_errors(hull: &HullTemplate, tech: &TechLevels) -> Vec<String> {
    hull.tech
        .shortfalls(tech)
        .into_iter()
        .map(|(field, have, need)| {
            format!("Insufficient {field} tech level: {have}/{need} required")
        })
        .collect()
}

/// Full validation of a saved design.
///
/// Order: hull lookup, hull tech, compiled errors (lookups, engine, rules),
/// slot structure, required slots.
pub fn validate_design(
    catalog: &Catalog,
    design: &ShipDesign,
    tech: &TechLevels,
    rules: &MiniaturizationRules,
) -> Vec<String> {
    let Some(hull) = catalog.hull(&design.hull_id) else {
        tracing::debug!(
            design = %design.id,
            hull = %design.hull_id,
            "design references unknown hull"
        );
        return vec![format!("Hull {} not found", design.hull_id)];
    };

    let mut errors = hull_tech_errors(hull, tech);
    if let Some(stats) = compile_design(catalog, design, tech, rules) {
        errors.extend(stats.validation_errors);
    }
    tracing::debug!(design = %design.id, errors = errors.len(), "design validated");
    errors
}
