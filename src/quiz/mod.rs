mod error;
mod flags;
mod generator;
mod round;
mod scorer;

pub use error::QuizError;
pub use flags::{flag_key, flag_url, FLAG_IMAGE_BASE_URL};
pub use generator::generate;
pub use round::Round;
pub use scorer::{evaluate, Outcome, ScoreDelta};
