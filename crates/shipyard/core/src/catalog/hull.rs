use super::component::{ComponentCategory, Cost};
use crate::tech::TechRequirement;
use crate::traits::TraitGate;

/// Broad role tag of a hull, matched by `ExclusiveToHullType` rules.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum HullRole {
    Warship,
    Freighter,
    Scout,
    Colonizer,
    Miner,
    Starbase,
    Utility,
    Bomber,
    MineLayer,
}

/// Base stats every design starts from before components are folded in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HullStats {
    pub mass: u32,
    pub armor: u32,
    pub initiative: u32,
    pub cargo: u32,
    pub fuel: u32,
}

/// One installation point on a hull.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotDefinition {
    pub code: String,
    pub allowed: Vec<ComponentCategory>,
    #[cfg_attr(feature = "serde", serde(default = "SlotDefinition::default_max"))]
    pub max: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
    /// Fixed slots are pre-populated by the hull and cannot be changed.
    #[cfg_attr(feature = "serde", serde(default = "SlotDefinition::default_editable"))]
    pub editable: bool,
    /// Fixed capacity shown for built-in cargo or dock bays.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: Option<u32>,
}

impl SlotDefinition {
    pub const DEFAULT_MAX: u32 = 1;

    #[allow(dead_code)]
    const fn default_max() -> u32 {
        Self::DEFAULT_MAX
    }

    #[allow(dead_code)]
    const fn default_editable() -> bool {
        true
    }

    pub fn new(
        code: impl Into<String>,
        allowed: impl IntoIterator<Item = ComponentCategory>,
    ) -> Self {
        Self {
            code: code.into(),
            allowed: allowed.into_iter().collect(),
            max: Self::DEFAULT_MAX,
            required: false,
            editable: true,
            size: None,
        }
    }

    #[must_use]
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn accepts(&self, category: ComponentCategory) -> bool {
        self.allowed.contains(&category)
    }
}

/// Static catalog entry for a hull.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullTemplate {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Option<HullRole>,
    pub slots: Vec<SlotDefinition>,
    /// Grid layout for the designer view; not read by the engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub structure: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: HullStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Cost,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech: TechRequirement,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: TraitGate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_starbase: bool,
}

impl HullTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slots: Vec<SlotDefinition>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: None,
            slots,
            structure: Vec::new(),
            stats: HullStats::default(),
            cost: Cost::default(),
            tech: TechRequirement::none(),
            traits: TraitGate::default(),
            is_starbase: false,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: HullRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: HullStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_tech(mut self, tech: TechRequirement) -> Self {
        self.tech = tech;
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: TraitGate) -> Self {
        self.traits = traits;
        self
    }

    #[must_use]
    pub fn starbase(mut self) -> Self {
        self.is_starbase = true;
        self
    }

    pub fn slot(&self, code: &str) -> Option<&SlotDefinition> {
        self.slots.iter().find(|slot| slot.code == code)
    }

    /// True when `name_or_role` names this hull or its role tag.
    pub fn matches_type(&self, name_or_role: &str) -> bool {
        self.name == name_or_role || self.role.is_some_and(|role| role.as_ref() == name_or_role)
    }
}
