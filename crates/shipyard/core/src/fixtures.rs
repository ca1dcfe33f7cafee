//! Small shared catalog for unit tests.

use crate::catalog::{
    Catalog, ComponentCategory as Cat, ComponentSpec, ComponentStats, Cost, HullRole, HullStats,
    HullTemplate, SlotDefinition,
};
use crate::tech::{TechField, TechRequirement};

fn scanner(id: &str, name: &str, mass: u32, range: u32, penetrating: u32) -> ComponentSpec {
    ComponentSpec::new(
        id,
        name,
        mass,
        ComponentStats::Scanner {
            range,
            penetrating,
            detection: 0,
        },
    )
}

fn hulls() -> Vec<HullTemplate> {
    let scout = HullTemplate::new(
        "hull_scout",
        "Scout",
        vec![
            SlotDefinition::new("E1", [Cat::Engine]).required(),
            SlotDefinition::new("S1", [Cat::Scanner]),
        ],
    )
    .with_role(HullRole::Scout)
    .with_stats(HullStats {
        mass: 8,
        armor: 20,
        initiative: 1,
        cargo: 0,
        fuel: 50,
    });

    let destroyer = HullTemplate::new(
        "hull_destroyer",
        "Destroyer",
        vec![
            SlotDefinition::new("E1", [Cat::Engine]).required(),
            SlotDefinition::new("W1", [Cat::Weapon]).with_max(2),
            SlotDefinition::new("A1", [Cat::Armor, Cat::Shield]).with_max(2),
            SlotDefinition::new("M1", [Cat::Mechanical, Cat::Electrical, Cat::Computer]),
            SlotDefinition::new("S1", [Cat::Scanner, Cat::Electrical, Cat::Shield]),
            SlotDefinition::new("FX", [Cat::Cargo]).fixed(),
        ],
    )
    .with_role(HullRole::Warship)
    .with_stats(HullStats {
        mass: 30,
        armor: 200,
        initiative: 3,
        cargo: 0,
        fuel: 280,
    })
    .with_tech(TechRequirement::single(TechField::Construction, 3));
    let destroyer = HullTemplate {
        cost: Cost::new(15, 3, 5, 35),
        ..destroyer
    };

    let station = HullTemplate::new(
        "hull_space_station",
        "Space Station",
        vec![
            SlotDefinition::new("W1", [Cat::Weapon]).with_max(16),
            SlotDefinition::new("A1", [Cat::Shield, Cat::Armor]).with_max(16),
            SlotDefinition::new("O1", [Cat::Orbital]),
        ],
    )
    .with_role(HullRole::Starbase)
    .with_tech(TechRequirement::single(TechField::Construction, 8))
    .starbase();

    vec![scout, destroyer, station]
}

fn components() -> Vec<ComponentSpec> {
    vec![
        ComponentSpec::new(
            "eng_long_hump_6",
            "Long Hump 6",
            9,
            ComponentStats::Engine {
                max_warp: 6,
                fuel_efficiency: Some(100),
                ramscoop: false,
                fuel_generation: 0,
            },
        )
        .with_cost(Cost::new(5, 0, 1, 6))
        .with_tech(TechRequirement::single(TechField::Propulsion, 3)),
        ComponentSpec::new(
            "wpn_laser",
            "Laser",
            1,
            ComponentStats::Weapon {
                power: 10,
                range: 1,
                initiative: 9,
                accuracy: 100,
            },
        )
        .with_cost(Cost::new(0, 6, 0, 5)),
        ComponentSpec::new(
            "wpn_x_ray",
            "X-Ray Laser",
            1,
            ComponentStats::Weapon {
                power: 16,
                range: 1,
                initiative: 9,
                accuracy: 100,
            },
        )
        .with_cost(Cost::new(0, 6, 0, 6))
        .with_tech(TechRequirement::new([(TechField::Energy, 3), (TechField::Kinetics, 3)])),
        scanner("scan_bat", "Bat Scanner", 2, 0, 0).with_cost(Cost::new(1, 0, 1, 1)),
        scanner("scan_rhino", "Rhino Scanner", 5, 50, 0)
            .with_cost(Cost::new(3, 0, 2, 3))
            .with_tech(TechRequirement::single(TechField::Energy, 1)),
        scanner("scan_ferret", "Ferret Scanner", 2, 185, 50)
            .with_cost(Cost::new(2, 0, 8, 36))
            .with_tech(TechRequirement::new([(TechField::Energy, 3), (TechField::Propulsion, 7)])),
        ComponentSpec::new(
            "armor_tritanium",
            "Tritanium",
            60,
            ComponentStats::Armor { armor: 50 },
        )
        .with_cost(Cost::new(5, 0, 0, 9)),
        ComponentSpec::new(
            "shield_mole_skin",
            "Mole-skin Shield",
            1,
            ComponentStats::Shield { strength: 25, armor: 0 },
        )
        .with_cost(Cost::new(1, 0, 1, 4)),
        ComponentSpec::new(
            "comp_battle_computer",
            "Battle Computer",
            1,
            ComponentStats::Computer { accuracy: 20 },
        )
        .with_cost(Cost::new(0, 0, 13, 6)),
        ComponentSpec::new("cargo_pod", "Cargo Pod", 5, ComponentStats::Cargo { capacity: 50 })
            .with_cost(Cost::new(5, 0, 2, 10))
            .with_tech(TechRequirement::single(TechField::Construction, 3)),
    ]
}

pub(crate) fn catalog() -> Catalog {
    Catalog::builder()
        .hulls(hulls())
        .components(components())
        .build()
        .expect("fixture catalog is consistent")
}
