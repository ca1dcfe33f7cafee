//! Immutable hull and component tables.
//!
//! A [`Catalog`] is built once through [`CatalogBuilder`], which is the
//! validation boundary for catalog data: duplicate ids, hulls without slots,
//! and stat-less placeholder components are rejected there so they can never
//! reach a compiled design. After construction the catalog is read-only and
//! is passed by reference into every engine call.

mod component;
mod constraint;
mod hull;

pub use component::{
    Capability, CapabilityKind, ComponentCategory, ComponentSpec, ComponentStats, Cost,
};
pub use constraint::{ConstraintRule, RuleKind};
pub use hull::{HullRole, HullStats, HullTemplate, SlotDefinition};

use std::collections::{HashMap, HashSet};

use crate::error::{ErrorSeverity, ShipyardError};

/// Errors raised while assembling a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate hull id `{0}`")]
    DuplicateHull(String),

    #[error("duplicate component id `{0}`")]
    DuplicateComponent(String),

    #[error("hull `{hull}` declares slot `{slot}` more than once")]
    DuplicateSlot { hull: String, slot: String },

    #[error("hull `{0}` has no slots")]
    HullWithoutSlots(String),

    #[error("component `{0}` has no stats or capabilities")]
    PlaceholderComponent(String),
}

impl ShipyardError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateHull(_) => "CATALOG_DUPLICATE_HULL",
            Self::DuplicateComponent(_) => "CATALOG_DUPLICATE_COMPONENT",
            Self::DuplicateSlot { .. } => "CATALOG_DUPLICATE_SLOT",
            Self::HullWithoutSlots(_) => "CATALOG_HULL_WITHOUT_SLOTS",
            Self::PlaceholderComponent(_) => "CATALOG_PLACEHOLDER_COMPONENT",
        }
    }
}

/// Read-only index of hulls and components.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    hulls: Vec<HullTemplate>,
    components: Vec<ComponentSpec>,
    hull_index: HashMap<String, usize>,
    component_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Hull by id, exact match first, then ASCII case-insensitive.
    pub fn hull(&self, id: &str) -> Option<&HullTemplate> {
        match self.hull_index.get(id) {
            Some(&idx) => self.hulls.get(idx),
            None => self.hulls.iter().find(|h| h.id.eq_ignore_ascii_case(id)),
        }
    }

    /// Component by id, exact match first, then ASCII case-insensitive.
    pub fn component(&self, id: &str) -> Option<&ComponentSpec> {
        match self.component_index.get(id) {
            Some(&idx) => self.components.get(idx),
            None => self
                .components
                .iter()
                .find(|c| c.id.eq_ignore_ascii_case(id)),
        }
    }

    /// Hulls in catalog order.
    pub fn hulls(&self) -> &[HullTemplate] {
        &self.hulls
    }

    /// Components in catalog order.
    pub fn components(&self) -> &[ComponentSpec] {
        &self.components
    }

    /// `(hulls, components)`
    pub fn counts(&self) -> (usize, usize) {
        (self.hulls.len(), self.components.len())
    }

    pub fn is_empty(&self) -> bool {
        self.hulls.is_empty() && self.components.is_empty()
    }
}

/// Collects entries and checks them when [`CatalogBuilder::build`] runs.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    hulls: Vec<HullTemplate>,
    components: Vec<ComponentSpec>,
    allow_placeholders: bool,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hull(mut self, hull: HullTemplate) -> Self {
        self.hulls.push(hull);
        self
    }

    #[must_use]
    pub fn component(mut self, component: ComponentSpec) -> Self {
        self.components.push(component);
        self
    }

    #[must_use]
    pub fn hulls(mut self, hulls: impl IntoIterator<Item = HullTemplate>) -> Self {
        self.hulls.extend(hulls);
        self
    }

    #[must_use]
    pub fn components(mut self, components: impl IntoIterator<Item = ComponentSpec>) -> Self {
        self.components.extend(components);
        self
    }

    /// Skip placeholder components with a warning instead of failing.
    #[must_use]
    pub fn allow_placeholders(mut self, allow: bool) -> Self {
        self.allow_placeholders = allow;
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();

        for hull in self.hulls {
            if hull.slots.is_empty() {
                return Err(CatalogError::HullWithoutSlots(hull.id));
            }
            let mut codes = HashSet::new();
            for slot in &hull.slots {
                if !codes.insert(slot.code.as_str()) {
                    return Err(CatalogError::DuplicateSlot {
                        hull: hull.id.clone(),
                        slot: slot.code.clone(),
                    });
                }
            }
            if catalog.hull_index.contains_key(&hull.id) {
                return Err(CatalogError::DuplicateHull(hull.id));
            }
            catalog.hull_index.insert(hull.id.clone(), catalog.hulls.len());
            catalog.hulls.push(hull);
        }

        for component in self.components {
            if component.is_placeholder() {
                if self.allow_placeholders {
                    tracing::warn!(id = %component.id, "skipping placeholder component");
                    continue;
                }
                return Err(CatalogError::PlaceholderComponent(component.id));
            }
            if catalog.component_index.contains_key(&component.id) {
                return Err(CatalogError::DuplicateComponent(component.id));
            }
            catalog
                .component_index
                .insert(component.id.clone(), catalog.components.len());
            catalog.components.push(component);
        }

        tracing::debug!(
            hulls = catalog.hulls.len(),
            components = catalog.components.len(),
            "catalog built"
        );
        Ok(catalog)
    }
}
