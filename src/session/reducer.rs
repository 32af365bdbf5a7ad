use crate::quiz::evaluate;
use crate::session::intent::QuizIntent;
use crate::session::state::{Phase, SessionState};

/// Pure state transition function for the quiz session.
///
/// Every state/intent pair not listed below is a no-op that returns the
/// state unchanged, in particular anything arriving while the session is
/// busy. That guard is what serializes the Loading/Evaluating cycle.
pub struct SessionReducer;

impl SessionReducer {
    pub fn reduce(state: SessionState, intent: QuizIntent) -> SessionState {
        match intent {
            QuizIntent::LoadStarted => match state.phase {
                Phase::Idle | Phase::Evaluating => SessionState {
                    phase: Phase::Loading,
                    error: None,
                    ..state
                },
                _ => state,
            },

            QuizIntent::RoundReady { round } => match state.phase {
                Phase::Loading => SessionState {
                    phase: Phase::AwaitingAnswer,
                    round: Some(round),
                    selected: None,
                    feedback: None,
                    ..state
                },
                _ => state,
            },

            QuizIntent::LoadFailed { message } => match state.phase {
                Phase::Loading => SessionState {
                    phase: Phase::Idle,
                    round: None,
                    selected: None,
                    error: Some(message),
                    ..state
                },
                _ => state,
            },

            QuizIntent::OptionSelected { country } => match state.phase {
                Phase::AwaitingAnswer => SessionState {
                    selected: Some(country),
                    ..state
                },
                _ => state,
            },

            QuizIntent::SelectionConfirmed => match state.phase {
                Phase::AwaitingAnswer => {
                    let Some(round) = state.round.as_ref() else {
                        return state;
                    };
                    match evaluate(round, state.selected.as_ref(), state.points_on_correct) {
                        Ok(verdict) => SessionState {
                            phase: Phase::Evaluating,
                            score: state.score + verdict.delta,
                            feedback: Some(verdict.message),
                            ..state
                        },
                        // Nothing selected yet: confirming is meaningless.
                        Err(_) => state,
                    }
                }
                _ => state,
            },
        }
    }
}
