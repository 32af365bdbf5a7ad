use thiserror::Error;

/// Errors produced by round generation and answer evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The country directory contained no entries at all.
    #[error("country directory is empty")]
    EmptyDirectory,

    /// The directory does not hold enough distinct countries for a round.
    #[error("could not collect {required} distinct countries after {attempts} draws")]
    InsufficientDistinctCountries { required: usize, attempts: usize },

    /// An answer was evaluated while nothing was selected.
    #[error("no country selected")]
    NoSelection,
}
