//! Filters the catalog down to what one player may build.

use crate::catalog::{Catalog, ComponentSpec, HullTemplate, SlotDefinition};
use crate::config::MiniaturizationRules;
use crate::miniaturization::Miniaturized;
use crate::tech::{TechField, TechLevels};
use crate::traits::TraitProfile;

/// A component offered for a slot, with its miniaturized size and price.
#[derive(Clone, Debug)]
pub struct EligibleComponent<'a> {
    pub component: &'a ComponentSpec,
    pub miniaturized: Miniaturized,
}

/// Hulls whose Construction requirement and trait gate the player meets.
pub fn available_hulls<'a>(
    catalog: &'a Catalog,
    tech: &TechLevels,
    traits: Option<&TraitProfile>,
) -> Vec<&'a HullTemplate> {
    let hulls: Vec<_> = catalog
        .hulls()
        .iter()
        .filter(|hull| is_hull_usable(hull, tech, traits))
        .collect();
    tracing::debug!(
        available = hulls.len(),
        total = catalog.hulls().len(),
        "resolved available hulls"
    );
    hulls
}

/// Hull gating looks at Construction only, whatever else the hull lists.
pub fn is_hull_usable(
    hull: &HullTemplate,
    tech: &TechLevels,
    traits: Option<&TraitProfile>,
) -> bool {
    hull.tech.level(TechField::Construction) <= tech.construction && hull.traits.admits(traits)
}

/// True when the player may fit `component` into `slot` on `hull`.
pub fn is_component_usable(
    component: &ComponentSpec,
    hull: &HullTemplate,
    slot: &SlotDefinition,
    tech: &TechLevels,
    traits: Option<&TraitProfile>,
) -> bool {
    slot.accepts(component.category())
        && component.tech.is_met_by(tech)
        && component.traits.admits(traits)
        && component.fits_hull(&hull.name)
}

/// Components the player may place into `slot_code` on `hull`, in catalog order.
///
/// An unknown slot code yields an empty list.
pub fn available_components_for_slot<'a>(
    catalog: &'a Catalog,
    hull: &HullTemplate,
    slot_code: &str,
    tech: &TechLevels,
    traits: Option<&TraitProfile>,
    rules: &MiniaturizationRules,
) -> Vec<EligibleComponent<'a>> {
    let Some(slot) = hull.slot(slot_code) else {
        tracing::debug!(hull = %hull.id, slot = slot_code, "slot not found on hull");
        return Vec::new();
    };

    let eligible: Vec<_> = catalog
        .components()
        .iter()
        .filter(|component| is_component_usable(component, hull, slot, tech, traits))
        .map(|component| EligibleComponent {
            component,
            miniaturized: Miniaturized::of(component, tech, rules),
        })
        .collect();
    tracing::debug!(
        hull = %hull.id,
        slot = slot_code,
        available = eligible.len(),
        "resolved available components"
    );
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ComponentCategory, ComponentStats, Cost};
    use crate::tech::TechRequirement;
    use crate::traits::{LesserTrait, PrimaryTrait, TraitGate};
    use proptest::prelude::*;

    fn hull(id: &str, construction: u32) -> HullTemplate {
        HullTemplate::new(
            id,
            id,
            vec![SlotDefinition::new("S1", [ComponentCategory::Scanner])],
        )
        .with_tech(TechRequirement::single(TechField::Construction, construction))
    }

    fn scanner(id: &str, tech: TechRequirement) -> ComponentSpec {
        ComponentSpec::new(
            id,
            id,
            2,
            ComponentStats::Scanner {
                range: 50,
                penetrating: 0,
                detection: 0,
            },
        )
        .with_cost(Cost::new(1, 0, 1, 10))
        .with_tech(tech)
    }

    fn fixture() -> Catalog {
        let meta_morph = hull("Meta Morph", 10).with_traits(TraitGate {
            primary_required: vec![PrimaryTrait::HyperExpansion],
            ..Default::default()
        });
        Catalog::builder()
            .hull(hull("Scout", 0))
            .hull(hull("Frigate", 6))
            .hull(meta_morph)
            .component(scanner("scan_bat", TechRequirement::none()))
            .component(scanner("scan_rhino", TechRequirement::single(TechField::Energy, 1)))
            .component(
                scanner("scan_eagle", TechRequirement::single(TechField::Energy, 6))
                    .with_traits(TraitGate {
                        lesser_forbidden: vec![LesserTrait::NoAdvancedScanners],
                        ..Default::default()
                    }),
            )
            .component(
                scanner("scan_chameleon", TechRequirement::none())
                    .with_hull_restrictions(["Frigate"]),
            )
            .component(ComponentSpec::new(
                "armor_tritanium",
                "Tritanium",
                60,
                ComponentStats::Armor { armor: 50 },
            ))
            .build()
            .unwrap()
    }

    fn ids(list: &[EligibleComponent<'_>]) -> Vec<String> {
        list.iter().map(|e| e.component.id.clone()).collect()
    }

    #[test]
    fn hulls_filter_by_construction_and_traits() {
        let catalog = fixture();
        let names = |tech: TechLevels, traits: Option<&TraitProfile>| {
            available_hulls(&catalog, &tech, traits)
                .into_iter()
                .map(|h| h.name.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(TechLevels::default(), None), ["Scout"]);
        assert_eq!(names(TechLevels::uniform(10), None), ["Scout", "Frigate"]);
        let he = TraitProfile::with_primary(PrimaryTrait::HyperExpansion);
        assert_eq!(
            names(TechLevels::uniform(10), Some(&he)),
            ["Scout", "Frigate", "Meta Morph"]
        );
    }

    #[test]
    fn components_filter_by_slot_tech_traits_and_hull() {
        let catalog = fixture();
        let scout = catalog.hull("Scout").unwrap();
        let rules = MiniaturizationRules::default();

        let tech = TechLevels::default();
        let list = available_components_for_slot(&catalog, scout, "S1", &tech, None, &rules);
        assert_eq!(ids(&list), ["scan_bat"]);

        let tech = TechLevels::uniform(6);
        let list = available_components_for_slot(&catalog, scout, "S1", &tech, None, &rules);
        assert_eq!(ids(&list), ["scan_bat", "scan_rhino", "scan_eagle"]);

        let restricted = TraitProfile::new(None, [LesserTrait::NoAdvancedScanners]);
        let list =
            available_components_for_slot(&catalog, scout, "S1", &tech, Some(&restricted), &rules);
        assert_eq!(ids(&list), ["scan_bat", "scan_rhino"]);

        let frigate = catalog.hull("Frigate").unwrap();
        let list = available_components_for_slot(&catalog, frigate, "S1", &tech, None, &rules);
        assert!(ids(&list).contains(&"scan_chameleon".to_owned()));
    }

    #[test]
    fn offered_components_carry_miniaturized_view() {
        let catalog = fixture();
        let scout = catalog.hull("Scout").unwrap();
        let list = available_components_for_slot(
            &catalog,
            scout,
            "S1",
            &TechLevels::uniform(5),
            None,
            &MiniaturizationRules::default(),
        );
        let bat = &list[0];
        assert_eq!(bat.component.id, "scan_bat");
        assert_eq!(bat.miniaturized.levels_above, 5);
        assert_eq!(bat.miniaturized.mass(), 1.6);
    }

    #[test]
    fn unknown_slot_yields_nothing() {
        let catalog = fixture();
        let scout = catalog.hull("Scout").unwrap();
        let list = available_components_for_slot(
            &catalog,
            scout,
            "S9",
            &TechLevels::uniform(26),
            None,
            &MiniaturizationRules::default(),
        );
        assert!(list.is_empty());
    }

    proptest! {
        #[test]
        fn hull_filter_respects_construction(required in 0u32..27, level in 0u32..27) {
            let catalog = Catalog::builder().hull(hull("Probe", required)).build().unwrap();
            let tech = TechLevels::default().with(TechField::Construction, level);
            let available = available_hulls(&catalog, &tech, None);
            prop_assert_eq!(available.len() == 1, required <= level);
        }
    }
}
