mod common;

use std::collections::HashSet;

use common::{country, sample_directory};
use flagquiz::quiz::{generate, QuizError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn round_has_distinct_options_containing_the_correct_country() {
    let mut directory = sample_directory();
    directory.extend([
        country(5, "PT", "Portugal", "Lisbon"),
        country(6, "NL", "Netherlands", "Amsterdam"),
        country(7, "BE", "Belgium", "Brussels"),
        country(8, "AT", "Austria", "Vienna"),
    ]);

    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = generate(&directory, 4, &mut rng).unwrap();

        assert_eq!(round.options().len(), 4);
        let ids: HashSet<i64> = round.options().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 4, "options must have distinct ids");
        assert!(ids.contains(&round.correct().id));
    }
}

#[test]
fn flag_key_is_the_lowercased_code_of_the_correct_country() {
    let directory = sample_directory();
    let mut rng = StdRng::seed_from_u64(3);
    let round = generate(&directory, 4, &mut rng).unwrap();
    assert_eq!(round.flag_key(), round.correct().code.to_lowercase());
}

#[test]
fn empty_directory_fails() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        generate(&[], 4, &mut rng),
        Err(QuizError::EmptyDirectory)
    ));
}

#[test]
fn duplicate_directory_entries_are_tolerated() {
    // Every country appears twice; a round must still hold four distinct ids.
    let mut directory = sample_directory();
    directory.extend(sample_directory());

    let mut rng = StdRng::seed_from_u64(11);
    let round = generate(&directory, 4, &mut rng).unwrap();
    let ids: HashSet<i64> = round.options().iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 4);
}

#[test]
fn too_few_distinct_countries_fails_within_bounded_draws() {
    // Eight entries but only three distinct ids.
    let mut directory = sample_directory();
    directory.truncate(3);
    directory.extend(directory.clone());
    directory.extend(directory.clone());

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        match generate(&directory, 4, &mut rng) {
            Err(QuizError::InsufficientDistinctCountries { required, attempts }) => {
                assert_eq!(required, 4);
                assert!(attempts <= 32 * 4);
            }
            other => panic!("expected InsufficientDistinctCountries, got {other:?}"),
        }
    }
}

#[test]
fn directory_of_exactly_four_yields_all_four_as_options() {
    let directory = sample_directory();

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = generate(&directory, 4, &mut rng).unwrap();
        let ids: HashSet<i64> = round.options().iter().map(|c| c.id).collect();
        assert_eq!(ids, HashSet::from([1, 2, 3, 4]));
    }
}

#[test]
fn same_seed_produces_the_same_round() {
    let directory = sample_directory();
    let first = generate(&directory, 4, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = generate(&directory, 4, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}
