//! Racial traits and the trait-gating rules for hulls and components.
//!
//! A species has at most one primary racial trait and any number of lesser
//! racial traits. Catalog entries gate availability on both classes with a
//! [`TraitGate`]: every `required` trait must be held (AND) and none of the
//! `forbidden` traits may be held (OR over the forbidden list).

use std::collections::BTreeSet;

/// Primary racial trait (single-select per species).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PrimaryTrait {
    #[strum(serialize = "Hyper Expansion")]
    HyperExpansion,
    #[strum(serialize = "Super Stealth")]
    SuperStealth,
    #[strum(serialize = "War Monger")]
    WarMonger,
    #[strum(serialize = "Claim Adjuster")]
    ClaimAdjuster,
    #[strum(serialize = "Inner Strength")]
    InnerStrength,
    #[strum(serialize = "Space Demolition")]
    SpaceDemolition,
    #[strum(serialize = "Packet Physics")]
    PacketPhysics,
    #[strum(serialize = "Interstellar Traveler")]
    InterstellarTraveler,
    #[strum(serialize = "Alternate Reality")]
    AlternateReality,
    #[strum(serialize = "Jack of All Trades")]
    JackOfAllTrades,
}

/// Lesser racial trait (multi-select per species).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum LesserTrait {
    #[strum(serialize = "Improved Fuel Efficiency")]
    ImprovedFuelEfficiency,
    #[strum(serialize = "Total Terraforming")]
    TotalTerraforming,
    #[strum(serialize = "Advanced Remote Mining")]
    AdvancedRemoteMining,
    #[strum(serialize = "Improved Starbases")]
    ImprovedStarbases,
    #[strum(serialize = "Generalized Research")]
    GeneralizedResearch,
    #[strum(serialize = "Ultimate Recycling")]
    UltimateRecycling,
    #[strum(serialize = "Mineral Alchemy")]
    MineralAlchemy,
    #[strum(serialize = "No Ram Scoop Engines")]
    NoRamScoopEngines,
    #[strum(serialize = "Cheap Engines")]
    CheapEngines,
    #[strum(serialize = "Only Basic Remote Mining")]
    OnlyBasicRemoteMining,
    #[strum(serialize = "No Advanced Scanners")]
    NoAdvancedScanners,
    #[strum(serialize = "Low Starting Population")]
    LowStartingPopulation,
    #[strum(serialize = "Bleeding Edge Technology")]
    BleedingEdgeTechnology,
    #[strum(serialize = "Regenerating Shields")]
    RegeneratingShields,
}

/// The traits held by one player's species.
///
/// Callers with no species information pass `None` to the eligibility
/// functions, which is treated exactly like an empty profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitProfile {
    pub primary: Option<PrimaryTrait>,
    pub lesser: BTreeSet<LesserTrait>,
}

impl TraitProfile {
    pub fn new(
        primary: Option<PrimaryTrait>,
        lesser: impl IntoIterator<Item = LesserTrait>,
    ) -> Self {
        Self {
            primary,
            lesser: lesser.into_iter().collect(),
        }
    }

    /// Profile with only a primary trait.
    pub fn with_primary(primary: PrimaryTrait) -> Self {
        Self::new(Some(primary), [])
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.lesser.is_empty()
    }

    pub fn primary_traits(&self) -> &[PrimaryTrait] {
        self.primary.as_slice()
    }

    pub fn lesser_traits(&self) -> Vec<LesserTrait> {
        self.lesser.iter().copied().collect()
    }
}

/// Trait requirements and exclusions declared by a hull or component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitGate {
    pub primary_required: Vec<PrimaryTrait>,
    pub primary_forbidden: Vec<PrimaryTrait>,
    pub lesser_required: Vec<LesserTrait>,
    pub lesser_forbidden: Vec<LesserTrait>,
}

impl TraitGate {
    pub fn is_open(&self) -> bool {
        self.primary_required.is_empty()
            && self.primary_forbidden.is_empty()
            && self.lesser_required.is_empty()
            && self.lesser_forbidden.is_empty()
    }

    /// All four checks must pass; an absent profile behaves as an empty one.
    pub fn admits(&self, profile: Option<&TraitProfile>) -> bool {
        let primary = profile.map_or(&[][..], TraitProfile::primary_traits);
        let lesser = profile.map(TraitProfile::lesser_traits).unwrap_or_default();

        has_all(primary, &self.primary_required)
            && lacks_any(primary, &self.primary_forbidden)
            && has_all(&lesser, &self.lesser_required)
            && lacks_any(&lesser, &self.lesser_forbidden)
    }
}

/// True iff every `required` value is present in `source` (vacuously true when
/// nothing is required).
pub fn has_all<T: PartialEq>(source: &[T], required: &[T]) -> bool {
    if required.is_empty() {
        return true;
    }
    if source.is_empty() {
        return false;
    }
    required.iter().all(|value| source.contains(value))
}

/// True iff no `forbidden` value is present in `source`.
pub fn lacks_any<T: PartialEq>(source: &[T], forbidden: &[T]) -> bool {
    if forbidden.is_empty() || source.is_empty() {
        return true;
    }
    !forbidden.iter().any(|value| source.contains(value))
}
