use crate::directory::Country;
use crate::quiz::error::QuizError;
use crate::quiz::round::Round;

/// Whether the confirmed answer matched the round's correct country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Result of judging one answer: the score adjustment and the feedback line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDelta {
    pub outcome: Outcome,
    pub delta: i64,
    pub message: String,
}

/// Judge a confirmed selection against the round.
///
/// A correct answer is worth `points_on_correct`; a wrong one costs half of
/// that, truncated toward zero. The feedback names the capital only on a
/// correct answer. Callers apply `delta` themselves; nothing is mutated.
pub fn evaluate(
    round: &Round,
    selected: Option<&Country>,
    points_on_correct: i64,
) -> Result<ScoreDelta, QuizError> {
    let selected = selected.ok_or(QuizError::NoSelection)?;
    let correct = round.correct();

    if selected.id == correct.id {
        Ok(ScoreDelta {
            outcome: Outcome::Correct,
            delta: points_on_correct,
            message: format!("Correct! The capital is {}.", correct.capital),
        })
    } else {
        Ok(ScoreDelta {
            outcome: Outcome::Incorrect,
            delta: -(points_on_correct / 2),
            message: "Wrong! =(".to_string(),
        })
    }
}
