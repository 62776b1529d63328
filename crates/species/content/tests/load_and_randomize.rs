use species_content::ContentFactory;
use species_core::{Pcg32, PermutationTable, SeedableRng, SpeciesId, TotalSource, compute_seed};
use tempfile::TempDir;

const CATALOG: &str = r#"(
    species: [
        (id: 290, name: "Nincada", stats: (hp: 31, attack: 45, defense: 90, sp_atk: 30, sp_def: 30, speed: 40)),
        (id: 291, name: "Ninjask", stats: (hp: 61, attack: 90, defense: 45, sp_atk: 50, sp_def: 50, speed: 160)),
        (id: 292, name: "Shedinja", stats: (hp: 1, attack: 90, defense: 45, sp_atk: 30, sp_def: 30, speed: 40)),
    ],
    evolutions: [
        (from: 290, to: 291),
        (from: 290, to: 292),
    ],
)"#;

fn write_data(config: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("species.ron"), CATALOG).unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), config).unwrap();
    temp_dir
}

#[test]
fn loaded_family_randomizes_evolutions_before_their_base() {
    let temp_dir = write_data("follow_evolutions = true\n");
    let factory = ContentFactory::new(temp_dir.path());
    let config = factory.load_config().unwrap();
    let mut dex = factory.load_catalog().unwrap();

    assert_eq!(
        dex.total_source(SpeciesId(290), &config).unwrap(),
        TotalSource::MidChain {
            next_stage_min: 236,
            depth: 1,
        }
    );

    // terminal forms first so the base can stay below them
    for id in [291, 292, 290].map(SpeciesId) {
        let mut rng = Pcg32::seed_from_u64(compute_seed(77, id, 0));
        dex.generate_following_evolution_stats(id, &mut rng, &config)
            .unwrap();
    }
    assert_eq!(dex.get(SpeciesId::SHEDINJA).unwrap().stats.hp, 1);

    let mut table = PermutationTable::new();
    let mut rng = Pcg32::seed_from_u64(5);
    let permutation = dex.shuffle_stats(SpeciesId(290), &mut rng, &mut table).unwrap();
    dex.propagate_shuffle_to_evolution(SpeciesId(291), SpeciesId(290), &mut table)
        .unwrap();
    assert_eq!(table.get(SpeciesId(291)), permutation);
}

#[test]
fn boss_range_comes_from_config() {
    let temp_dir = write_data("boss_min_total = 700\nboss_max_total = 700\n");
    let factory = ContentFactory::new(temp_dir.path());
    let config = factory.load_config().unwrap();
    let mut dex = factory.load_catalog().unwrap();

    let mut rng = Pcg32::seed_from_u64(1);
    let stats = dex
        .generate_boss_stats(SpeciesId(291), &mut rng, &config)
        .unwrap();
    assert!((690..=720).contains(&stats.total()), "{}", stats.total());
}

#[test]
fn missing_catalog_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(temp_dir.path());
    let err = factory.load_catalog().unwrap_err();
    assert!(err.to_string().contains("species.ron"));
}
