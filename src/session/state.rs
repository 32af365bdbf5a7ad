use crate::directory::Country;
use crate::quiz::Round;

/// Where the session currently is in the question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing loaded yet, or the last load failed.
    #[default]
    Idle,
    /// Directory fetch, pacing delay and round generation in flight.
    Loading,
    /// A round is on screen and a selection can be made.
    AwaitingAnswer,
    /// An answer was just scored; the next round starts immediately.
    Evaluating,
}

/// Complete session state.
///
/// States are immutable: the reducer consumes one and returns the next.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    /// The question currently on screen, if any.
    pub round: Option<Round>,
    /// The option the user has picked but not yet confirmed.
    pub selected: Option<Country>,
    /// Cumulative score. Unbounded; repeated wrong answers push it negative.
    pub score: i64,
    /// Points a correct answer is worth; half is deducted on a wrong one.
    pub points_on_correct: i64,
    /// Feedback for the previous answer, cleared when the next round lands.
    pub feedback: Option<String>,
    /// User-visible message from a failed load.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            round: None,
            selected: None,
            score: 0,
            points_on_correct: 10,
            feedback: None,
            error: None,
        }
    }
}

impl SessionState {
    /// Initial state carrying a previously persisted score.
    pub fn with_score(score: i64, points_on_correct: i64) -> Self {
        Self {
            score,
            points_on_correct,
            ..Self::default()
        }
    }

    /// A load or an evaluation is in flight; selections are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Evaluating)
    }

    /// Options of the current round; empty when no round is loaded.
    pub fn options(&self) -> &[Country] {
        self.round.as_ref().map(Round::options).unwrap_or(&[])
    }
}
