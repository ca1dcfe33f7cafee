//! Declarative per-component validation rules.
//!
//! Rules are data: they are attached to a [`super::ComponentSpec`] in the
//! catalog and evaluated by [`crate::validation`] against the full set of
//! installed components. A rule the engine does not understand is kept as
//! [`RuleKind::Unknown`] and never produces a violation.

use super::component::CapabilityKind;

/// A rule plus the message reported when it is violated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRule", into = "RawRule"))]
pub struct ConstraintRule {
    pub kind: RuleKind,
    pub message: String,
}

impl ConstraintRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn max_per_hull(max: u32, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MaxPerHull { max }, message)
    }

    pub fn exclusive_to_hull_type(
        hull_types: impl IntoIterator<Item = impl Into<String>>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            RuleKind::ExclusiveToHullType {
                hull_types: hull_types.into_iter().map(Into::into).collect(),
            },
            message,
        )
    }

    pub fn requires_trait(capability: CapabilityKind, message: impl Into<String>) -> Self {
        Self::new(RuleKind::RequiresTrait { capability }, message)
    }

    pub fn mutually_exclusive(
        component_ids: impl IntoIterator<Item = impl Into<String>>,
        capabilities: impl IntoIterator<Item = CapabilityKind>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            RuleKind::MutuallyExclusive {
                component_ids: component_ids.into_iter().map(Into::into).collect(),
                capabilities: capabilities.into_iter().collect(),
            },
            message,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Total installed count of the owning component may not exceed `max`.
    MaxPerHull { max: u32 },
    /// The hull's role tag or name must be listed.
    ExclusiveToHullType { hull_types: Vec<String> },
    /// Some installed component (the owner included) must carry `capability`.
    RequiresTrait { capability: CapabilityKind },
    /// None of the ids may be installed and no installed component may carry
    /// any of the capabilities.
    MutuallyExclusive {
        component_ids: Vec<String>,
        capabilities: Vec<CapabilityKind>,
    },
    /// Unrecognised or incomplete rule; ignored during validation.
    Unknown { tag: String },
}

impl RuleKind {
    pub const MAX_PER_HULL: &'static str = "max_per_hull";
    pub const EXCLUSIVE_TO_HULL_TYPE: &'static str = "exclusive_to_hull_type";
    pub const REQUIRES_TRAIT: &'static str = "requires_trait";
    pub const MUTUALLY_EXCLUSIVE: &'static str = "mutually_exclusive";

    pub fn tag(&self) -> &str {
        match self {
            Self::MaxPerHull { .. } => Self::MAX_PER_HULL,
            Self::ExclusiveToHullType { .. } => Self::EXCLUSIVE_TO_HULL_TYPE,
            Self::RequiresTrait { .. } => Self::REQUIRES_TRAIT,
            Self::MutuallyExclusive { .. } => Self::MUTUALLY_EXCLUSIVE,
            Self::Unknown { tag } => tag,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Flat wire form used by catalog files.
///
/// ```ron
/// (rule: "max_per_hull", max: Some(1), message: "Only one cloak per hull")
/// (rule: "mutually_exclusive", component_ids: ["elec_jammer_20"], message: "...")
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct RawRule {
    rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hull_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capability: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    component_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capabilities: Vec<String>,
    message: String,
}

#[cfg(feature = "serde")]
fn parse_capability(tag: &str, raw: &str) -> Option<CapabilityKind> {
    let parsed = raw.parse::<CapabilityKind>().ok();
    if parsed.is_none() {
        tracing::warn!(rule = tag, capability = raw, "unknown capability in constraint rule");
    }
    parsed
}

#[cfg(feature = "serde")]
impl From<RawRule> for ConstraintRule {
    fn from(raw: RawRule) -> Self {
        let RawRule {
            rule,
            max,
            hull_types,
            capability,
            component_ids,
            capabilities,
            message,
        } = raw;

        let kind = match rule.as_str() {
            RuleKind::MAX_PER_HULL => max.map(|max| RuleKind::MaxPerHull { max }),
            RuleKind::EXCLUSIVE_TO_HULL_TYPE if !hull_types.is_empty() => {
                Some(RuleKind::ExclusiveToHullType { hull_types })
            }
            RuleKind::REQUIRES_TRAIT => capability
                .as_deref()
                .and_then(|raw| parse_capability(&rule, raw))
                .map(|capability| RuleKind::RequiresTrait { capability }),
            RuleKind::MUTUALLY_EXCLUSIVE => {
                let capabilities: Vec<_> = capabilities
                    .iter()
                    .filter_map(|raw| parse_capability(&rule, raw))
                    .collect();
                (!component_ids.is_empty() || !capabilities.is_empty()).then_some(
                    RuleKind::MutuallyExclusive {
                        component_ids,
                        capabilities,
                    },
                )
            }
            _ => None,
        };

        let kind = kind.unwrap_or_else(|| {
            tracing::warn!(rule = %rule, "ignoring unknown or incomplete constraint rule");
            RuleKind::Unknown { tag: rule }
        });

        Self { kind, message }
    }
}

#[cfg(feature = "serde")]
impl From<ConstraintRule> for RawRule {
    fn from(rule: ConstraintRule) -> Self {
        let mut raw = RawRule {
            rule: rule.kind.tag().to_owned(),
            message: rule.message,
            ..Default::default()
        };
        match rule.kind {
            RuleKind::MaxPerHull { max } => raw.max = Some(max),
            RuleKind::ExclusiveToHullType { hull_types } => raw.hull_types = hull_types,
            RuleKind::RequiresTrait { capability } => {
                raw.capability = Some(capability.as_ref().to_owned());
            }
            RuleKind::MutuallyExclusive {
                component_ids,
                capabilities,
            } => {
                raw.component_ids = component_ids;
                raw.capabilities = capabilities.iter().map(|c| c.as_ref().to_owned()).collect();
            }
            RuleKind::Unknown { .. } => {}
        }
        raw
    }
}
