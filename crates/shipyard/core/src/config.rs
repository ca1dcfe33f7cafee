/// Tunable design rules shared by every engine call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DesignConfig {
    pub miniaturization: MiniaturizationRules,
    /// Skip stat-less catalog entries with a warning instead of rejecting the catalog.
    pub allow_placeholder_components: bool,
}

impl DesignConfig {
    pub fn new() -> Self {
        Self {
            miniaturization: MiniaturizationRules::default(),
            allow_placeholder_components: false,
        }
    }

    pub fn with_miniaturization(miniaturization: MiniaturizationRules) -> Self {
        Self {
            miniaturization,
            ..Self::new()
        }
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Mass/cost reduction earned for every tech level above a requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MiniaturizationRules {
    pub reduction_per_level_percent: u32,
    pub max_reduction_percent: u32,
}

impl MiniaturizationRules {
    pub const DEFAULT_REDUCTION_PER_LEVEL_PERCENT: u32 = 4;
    pub const DEFAULT_MAX_REDUCTION_PERCENT: u32 = 80;

    pub const fn new() -> Self {
        Self {
            reduction_per_level_percent: Self::DEFAULT_REDUCTION_PER_LEVEL_PERCENT,
            max_reduction_percent: Self::DEFAULT_MAX_REDUCTION_PERCENT,
        }
    }

    /// Reduction in whole percent for a player `levels_above` the requirement.
    pub fn reduction_percent(&self, levels_above: u32) -> u32 {
        let cap = self.max_reduction_percent.min(100);
        levels_above
            .saturating_mul(self.reduction_per_level_percent)
            .min(cap)
    }

    /// Share of the base value kept, in whole percent.
    pub fn retained_percent(&self, player_level: u32, required_level: u32) -> u32 {
        100 - self.reduction_percent(player_level.saturating_sub(required_level))
    }

    /// Scaling factor in `[1 - max_reduction, 1.0]`.
    ///
    /// Returns exactly `1.0` whenever the player is at or below the requirement.
    pub fn factor(&self, player_level: u32, required_level: u32) -> f64 {
        f64::from(self.retained_percent(player_level, required_level)) / 100.0
    }
}

impl Default for MiniaturizationRules {
    fn default() -> Self {
        Self::new()
    }
}
