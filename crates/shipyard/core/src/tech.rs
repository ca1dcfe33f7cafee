//! Technology fields, player tech snapshots, and catalog tech requirements.

/// A research field that gates hulls and components.
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
pub enum TechField {
    Energy,
    Kinetics,
    Propulsion,
    Construction,
}

/// Immutable snapshot of a player's tech levels, supplied per engine call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TechLevels {
    pub energy: u32,
    pub kinetics: u32,
    pub propulsion: u32,
    pub construction: u32,
}

impl TechLevels {
    pub const fn new(energy: u32, kinetics: u32, propulsion: u32, construction: u32) -> Self {
        Self {
            energy,
            kinetics,
            propulsion,
            construction,
        }
    }

    /// Every field at the same level.
    pub const fn uniform(level: u32) -> Self {
        Self::new(level, level, level, level)
    }

    pub const fn level(&self, field: TechField) -> u32 {
        match field {
            TechField::Energy => self.energy,
            TechField::Kinetics => self.kinetics,
            TechField::Propulsion => self.propulsion,
            TechField::Construction => self.construction,
        }
    }

    /// Returns a copy with one field replaced (builder pattern).
    #[must_use]
    pub const fn with(mut self, field: TechField, level: u32) -> Self {
        match field {
            TechField::Energy => self.energy = level,
            TechField::Kinetics => self.kinetics = level,
            TechField::Propulsion => self.propulsion = level,
            TechField::Construction => self.construction = level,
        }
        self
    }
}

/// Minimum tech levels needed to build a hull or component.
///
/// Entries keep their declaration order: when two fields share the highest
/// level, the first declared one is the primary field.
///
/// Catalog files write requirements as ordered pairs:
/// ```ron
/// tech: [(Propulsion, 3), (Construction, 1)]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TechRequirement(Vec<(TechField, u32)>);

impl TechRequirement {
    /// A requirement with no entries; primary field defaults to Construction at level 0.
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    pub fn new(entries: impl IntoIterator<Item = (TechField, u32)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Single-field requirement.
    pub fn single(field: TechField, level: u32) -> Self {
        Self(vec![(field, level)])
    }

    pub fn entries(&self) -> &[(TechField, u32)] {
        &self.0
    }

    /// Declared level for one field (0 when the field is not listed).
    pub fn level(&self, field: TechField) -> u32 {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(0, |(_, level)| *level)
    }

    /// The field with the highest required level, first declared on ties.
    ///
    /// Requirements without entries report [`TechField::Construction`].
    pub fn primary_field(&self) -> TechField {
        let mut best: Option<(TechField, u32)> = None;
        for &(field, level) in &self.0 {
            match best {
                Some((_, best_level)) if level <= best_level => {}
                _ => best = Some((field, level)),
            }
        }
        best.map_or(TechField::Construction, |(field, _)| field)
    }

    /// Level required in the primary field.
    pub fn required_level(&self) -> u32 {
        self.0.iter().map(|(_, level)| *level).max().unwrap_or(0)
    }

    /// True when the player meets the requirement in its primary field.
    pub fn is_met_by(&self, tech: &TechLevels) -> bool {
        tech.level(self.primary_field()) >= self.required_level()
    }

    /// Fields where the player falls short, as `(field, have, need)`.
    pub fn shortfalls(&self, tech: &TechLevels) -> Vec<(TechField, u32, u32)> {
        self.0
            .iter()
            .filter_map(|&(field, need)| {
                let have = tech.level(field);
                (have < need).then_some((field, have, need))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_field_picks_highest_level() {
        let req = TechRequirement::new([(TechField::Propulsion, 3), (TechField::Construction, 5)]);
        assert_eq!(req.primary_field(), TechField::Construction);
        assert_eq!(req.required_level(), 5);
    }

    #[test]
    fn primary_field_ties_keep_first_declared() {
        let req = TechRequirement::new([(TechField::Kinetics, 4), (TechField::Energy, 4)]);
        assert_eq!(req.primary_field(), TechField::Kinetics);

        let zeros = TechRequirement::new([
            (TechField::Energy, 0),
            (TechField::Kinetics, 0),
            (TechField::Propulsion, 0),
        ]);
        assert_eq!(zeros.primary_field(), TechField::Energy);
    }

    #[test]
    fn empty_requirement_defaults_to_construction() {
        let req = TechRequirement::none();
        assert_eq!(req.primary_field(), TechField::Construction);
        assert_eq!(req.required_level(), 0);
        assert!(req.is_met_by(&TechLevels::default()));
    }

    #[test]
    fn requirement_checks_primary_field_only() {
        let req = TechRequirement::new([(TechField::Propulsion, 16), (TechField::Energy, 2)]);
        let tech = TechLevels::default().with(TechField::Propulsion, 16);
        assert!(req.is_met_by(&tech));
        // Energy is short, but only the primary field gates usability
        assert_eq!(req.shortfalls(&tech), vec![(TechField::Energy, 0, 2)]);
    }

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("propulsion".parse::<TechField>(), Ok(TechField::Propulsion));
        assert_eq!(TechField::Energy.to_string(), "Energy");
    }
}
