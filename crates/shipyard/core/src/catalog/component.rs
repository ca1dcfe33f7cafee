//! Component specifications.
//!
//! # Design: Category-as-Variant
//!
//! A component's category is the variant of its [`ComponentStats`], and each
//! variant carries only the fields that category uses. A weapon cannot be
//! given a warp rating, and the stat compiler matches exhaustively, so a new
//! category cannot be silently dropped from aggregation.

use std::fmt;

use super::constraint::ConstraintRule;
use crate::tech::TechRequirement;
use crate::traits::TraitGate;

/// Mineral and resource cost of a hull or component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cost {
    pub ironium: u32,
    pub boranium: u32,
    pub germanium: u32,
    pub resources: u32,
}

impl Cost {
    pub const fn new(ironium: u32, boranium: u32, germanium: u32, resources: u32) -> Self {
        Self {
            ironium,
            boranium,
            germanium,
            resources,
        }
    }

    /// Applies `f` to every currency.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(u32) -> u32) -> Self {
        Self {
            ironium: f(self.ironium),
            boranium: f(self.boranium),
            germanium: f(self.germanium),
            resources: f(self.resources),
        }
    }

    #[must_use]
    pub fn scaled(self, count: u32) -> Self {
        self.map(|amount| amount.saturating_mul(count))
    }

    pub fn add(&mut self, other: Cost) {
        self.ironium = self.ironium.saturating_add(other.ironium);
        self.boranium = self.boranium.saturating_add(other.boranium);
        self.germanium = self.germanium.saturating_add(other.germanium);
        self.resources = self.resources.saturating_add(other.resources);
    }

    pub const fn is_zero(&self) -> bool {
        self.ironium == 0 && self.boranium == 0 && self.germanium == 0 && self.resources == 0
    }
}

/// Category tag used by hull slots to decide what may be installed.
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
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ComponentCategory {
    Engine,
    Weapon,
    Shield,
    Armor,
    Scanner,
    Cargo,
    Computer,
    #[cfg_attr(feature = "serde", serde(alias = "Elect"))]
    #[strum(to_string = "Electrical", serialize = "Elect")]
    Electrical,
    #[cfg_attr(feature = "serde", serde(alias = "Mech"))]
    #[strum(to_string = "Mechanical", serialize = "Mech")]
    Mechanical,
    Bomb,
    #[cfg_attr(feature = "serde", serde(alias = "Mine"))]
    #[strum(to_string = "MineLayer", serialize = "Mine")]
    MineLayer,
    Mining,
    Terraforming,
    Orbital,
    Stargate,
    MassDriver,
    Cloak,
}

/// Capability tags a component can carry.
///
/// Validation rules (`RequiresTrait`, `MutuallyExclusive`) and the engine
/// check are phrased in terms of these tags.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CapabilityKind {
    DamageDealer,
    Propulsion,
    Storage,
    Sensor,
    Cloak,
    Mining,
    Terraform,
    Repair,
    Bomb,
    Minesweeping,
    Settler,
}

/// An explicitly declared capability, with the data some capabilities carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Carries colonists; the capacity adds to the ship's colonist total.
    Settler { colonist_capacity: u32 },
    Repair { rate: u32 },
    Minesweeping,
    /// Any other tag without extra data.
    Tag(CapabilityKind),
}

impl Capability {
    pub const fn kind(&self) -> CapabilityKind {
        match self {
            Self::Settler { .. } => CapabilityKind::Settler,
            Self::Repair { .. } => CapabilityKind::Repair,
            Self::Minesweeping => CapabilityKind::Minesweeping,
            Self::Tag(kind) => *kind,
        }
    }
}

/// Category-specific stats. The variant is the component's category.
///
/// Percentages (accuracy, jamming, cloaking, detection) are whole percent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentStats {
    Engine {
        max_warp: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        fuel_efficiency: Option<u32>,
        #[cfg_attr(feature = "serde", serde(default))]
        ramscoop: bool,
        /// Fuel produced per year while travelling (ramscoops).
        #[cfg_attr(feature = "serde", serde(default))]
        fuel_generation: u32,
    },
    Weapon {
        power: u32,
        range: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        initiative: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        accuracy: u32,
    },
    Shield {
        strength: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        armor: u32,
    },
    Armor {
        armor: u32,
    },
    Scanner {
        range: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        penetrating: u32,
        /// Cloak detection strength; any positive value detects cloaked fleets.
        #[cfg_attr(feature = "serde", serde(default))]
        detection: u32,
    },
    Cargo {
        capacity: u32,
    },
    Computer {
        accuracy: u32,
    },
    Electrical {
        #[cfg_attr(feature = "serde", serde(default))]
        accuracy: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        jamming: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        energy_bonus: u32,
    },
    Mechanical {
        #[cfg_attr(feature = "serde", serde(default))]
        initiative: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        cargo: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        fuel: u32,
    },
    Bomb {
        kill: u32,
        structure: u32,
    },
    MineLayer {
        mines_per_year: u32,
    },
    Mining {
        rate: u32,
    },
    Terraforming {
        rate: u32,
    },
    Orbital {
        dock_capacity: u32,
    },
    Stargate {
        range: u32,
        mass: u32,
    },
    MassDriver {
        speed: u32,
        catch: u32,
    },
    Cloak {
        percent: u32,
    },
}

impl ComponentStats {
    pub const fn category(&self) -> ComponentCategory {
        match self {
            Self::Engine { .. } => ComponentCategory::Engine,
            Self::Weapon { .. } => ComponentCategory::Weapon,
            Self::Shield { .. } => ComponentCategory::Shield,
            Self::Armor { .. } => ComponentCategory::Armor,
            Self::Scanner { .. } => ComponentCategory::Scanner,
            Self::Cargo { .. } => ComponentCategory::Cargo,
            Self::Computer { .. } => ComponentCategory::Computer,
            Self::Electrical { .. } => ComponentCategory::Electrical,
            Self::Mechanical { .. } => ComponentCategory::Mechanical,
            Self::Bomb { .. } => ComponentCategory::Bomb,
            Self::MineLayer { .. } => ComponentCategory::MineLayer,
            Self::Mining { .. } => ComponentCategory::Mining,
            Self::Terraforming { .. } => ComponentCategory::Terraforming,
            Self::Orbital { .. } => ComponentCategory::Orbital,
            Self::Stargate { .. } => ComponentCategory::Stargate,
            Self::MassDriver { .. } => ComponentCategory::MassDriver,
            Self::Cloak { .. } => ComponentCategory::Cloak,
        }
    }

    /// Capability implied by the category alone.
    pub const fn implied_capability(&self) -> Option<CapabilityKind> {
        match self {
            Self::Engine { .. } => Some(CapabilityKind::Propulsion),
            Self::Weapon { .. } => Some(CapabilityKind::DamageDealer),
            Self::Bomb { .. } => Some(CapabilityKind::Bomb),
            Self::Cargo { .. } => Some(CapabilityKind::Storage),
            Self::Scanner { .. } => Some(CapabilityKind::Sensor),
            Self::Cloak { .. } => Some(CapabilityKind::Cloak),
            Self::Mining { .. } => Some(CapabilityKind::Mining),
            Self::Terraforming { .. } => Some(CapabilityKind::Terraform),
            _ => None,
        }
    }

    /// Armor contributed by any category that carries it.
    pub const fn armor(&self) -> u32 {
        match self {
            Self::Armor { armor, .. } | Self::Shield { armor, .. } => *armor,
            _ => 0,
        }
    }

    pub const fn shield(&self) -> u32 {
        match self {
            Self::Shield { strength, .. } => *strength,
            _ => 0,
        }
    }

    pub const fn mining_rate(&self) -> u32 {
        match self {
            Self::Mining { rate } => *rate,
            _ => 0,
        }
    }

    pub const fn terraform_rate(&self) -> u32 {
        match self {
            Self::Terraforming { rate } => *rate,
            _ => 0,
        }
    }

    /// True when every numeric stat is zero.
    ///
    /// Such an entry has no effect on a compiled design; the catalog treats
    /// it as a placeholder unless the component declares capabilities.
    pub fn is_inert(&self) -> bool {
        match *self {
            Self::Engine {
                max_warp,
                fuel_efficiency,
                fuel_generation,
                ..
            } => max_warp == 0 && fuel_efficiency.unwrap_or(0) == 0 && fuel_generation == 0,
            Self::Weapon { power, range, .. } => power == 0 && range == 0,
            Self::Shield { strength, armor } => strength == 0 && armor == 0,
            Self::Armor { armor } => armor == 0,
            // A zero-range scanner still scans planets it orbits.
            Self::Scanner { .. } => false,
            Self::Cargo { capacity } => capacity == 0,
            Self::Computer { accuracy } => accuracy == 0,
            Self::Electrical {
                accuracy,
                jamming,
                energy_bonus,
            } => accuracy == 0 && jamming == 0 && energy_bonus == 0,
            Self::Mechanical {
                initiative,
                cargo,
                fuel,
            } => initiative == 0 && cargo == 0 && fuel == 0,
            Self::Bomb { kill, structure } => kill == 0 && structure == 0,
            Self::MineLayer { mines_per_year } => mines_per_year == 0,
            Self::Mining { rate } | Self::Terraforming { rate } => rate == 0,
            Self::Orbital { dock_capacity } => dock_capacity == 0,
            Self::Stargate { range, mass } => range == 0 && mass == 0,
            Self::MassDriver { speed, catch } => speed == 0 && catch == 0,
            Self::Cloak { percent } => percent == 0,
        }
    }
}

/// Static catalog entry for an installable component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSpec {
    pub id: String,
    pub name: String,
    pub mass: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Cost,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech: TechRequirement,
    pub stats: ComponentStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capabilities: Vec<Capability>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: TraitGate,
    /// Hull names this component may be fitted to; empty means any hull.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hull_restrictions: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Vec<ConstraintRule>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ComponentSpec {
    /// Creates a component with no requirements, capabilities, or rules.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mass: u32,
        stats: ComponentStats,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mass,
            cost: Cost::default(),
            tech: TechRequirement::none(),
            stats,
            capabilities: Vec::new(),
            traits: TraitGate::default(),
            hull_restrictions: Vec::new(),
            constraints: Vec::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_tech(mut self, tech: TechRequirement) -> Self {
        self.tech = tech;
        self
    }

    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: TraitGate) -> Self {
        self.traits = traits;
        self
    }

    #[must_use]
    pub fn with_hull_restrictions(
        mut self,
        hulls: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.hull_restrictions = hulls.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_constraint(mut self, rule: ConstraintRule) -> Self {
        self.constraints.push(rule);
        self
    }

    pub const fn category(&self) -> ComponentCategory {
        self.stats.category()
    }

    /// True when the component carries `kind`, declared or implied by its category.
    pub fn has_capability(&self, kind: CapabilityKind) -> bool {
        self.stats.implied_capability() == Some(kind)
            || self.capabilities.iter().any(|c| c.kind() == kind)
    }

    /// Colonist capacity from a settler capability, if any.
    pub fn colonist_capacity(&self) -> Option<u32> {
        self.capabilities.iter().find_map(|c| match c {
            Capability::Settler { colonist_capacity } => Some(*colonist_capacity),
            _ => None,
        })
    }

    /// True when the component may be fitted to the named hull.
    pub fn fits_hull(&self, hull_name: &str) -> bool {
        self.hull_restrictions.is_empty() || self.hull_restrictions.iter().any(|h| h == hull_name)
    }

    /// A stat-less entry that declares no capabilities either.
    pub fn is_placeholder(&self) -> bool {
        self.stats.is_inert() && self.capabilities.is_empty()
    }
}

impl fmt::Display for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category())
    }
}
