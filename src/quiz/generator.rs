use rand::Rng;

use crate::directory::Country;
use crate::quiz::error::QuizError;
use crate::quiz::round::Round;

/// Draws are capped at this multiple of the requested option count before
/// the generator gives up on finding enough distinct countries.
const MAX_DRAWS_PER_OPTION: usize = 32;

/// Assemble a round of `option_count` distinct countries from `directory`.
///
/// Candidates are drawn uniformly with rejection: a draw whose id already
/// appears among the accumulated options is discarded, which makes
/// duplicate directory entries harmless. The option landing in a slot
/// drawn up front becomes the correct answer. Options keep draw order.
///
/// The draw cap turns a directory with fewer than `option_count` distinct
/// ids into an error instead of an endless loop.
pub fn generate<R: Rng + ?Sized>(
    directory: &[Country],
    option_count: usize,
    rng: &mut R,
) -> Result<Round, QuizError> {
    if directory.is_empty() {
        return Err(QuizError::EmptyDirectory);
    }
    // A round must contain its correct answer, so zero options can never work.
    if option_count == 0 {
        return Err(QuizError::InsufficientDistinctCountries {
            required: 0,
            attempts: 0,
        });
    }

    let correct_slot = rng.gen_range(0..option_count);
    let max_draws = MAX_DRAWS_PER_OPTION * option_count;

    let mut options: Vec<Country> = Vec::with_capacity(option_count);
    let mut draws = 0;
    while options.len() < option_count {
        if draws == max_draws {
            return Err(QuizError::InsufficientDistinctCountries {
                required: option_count,
                attempts: draws,
            });
        }
        draws += 1;

        let candidate = &directory[rng.gen_range(0..directory.len())];
        if options.iter().any(|option| option.id == candidate.id) {
            continue;
        }
        options.push(candidate.clone());
    }

    Ok(Round::new(options, correct_slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn country(id: i64, code: &str) -> Country {
        Country {
            id,
            code: code.to_string(),
            name: code.to_string(),
            capital: String::new(),
        }
    }

    #[test]
    fn zero_option_count_is_rejected() {
        let directory = vec![country(1, "FR")];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(&directory, 0, &mut rng),
            Err(QuizError::InsufficientDistinctCountries { required: 0, .. })
        ));
    }

    #[test]
    fn draw_cap_is_proportional_to_option_count() {
        // Two distinct ids can never fill four slots; the generator must
        // stop after exactly 32 draws per requested option.
        let directory = vec![country(1, "FR"), country(2, "DE")];
        let mut rng = StdRng::seed_from_u64(7);
        match generate(&directory, 4, &mut rng) {
            Err(QuizError::InsufficientDistinctCountries { required, attempts }) => {
                assert_eq!(required, 4);
                assert_eq!(attempts, 128);
            }
            other => panic!("expected InsufficientDistinctCountries, got {other:?}"),
        }
    }
}
