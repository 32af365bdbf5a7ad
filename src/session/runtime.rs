use std::time::Duration;

use rand::Rng;

use crate::config::QuizSettings;
use crate::directory::{Country, CountryProvider};
use crate::quiz::generate;
use crate::score::ScoreStore;
use crate::session::intent::QuizIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::{Phase, SessionState};

/// Shown when the directory fetch fails or comes back unusable.
const LOAD_FAILED_MESSAGE: &str = "Could not load countries, try again.";
/// Shown when a fetched directory cannot fill a round.
const ROUND_FAILED_MESSAGE: &str = "Could not build a question, try again.";

/// Drives one quiz session: fetches the directory, paces and generates
/// rounds, scores confirmed answers and persists the score.
///
/// All effects happen here; every transition goes through the reducer.
/// The only suspension points are the directory fetch and the pacing
/// delay, and the busy guard keeps the cycle serialized.
pub struct QuizSession<P, R> {
    state: SessionState,
    provider: P,
    store: ScoreStore,
    rng: R,
    settings: QuizSettings,
    directory: Vec<Country>,
}

impl<P: CountryProvider, R: Rng> QuizSession<P, R> {
    pub fn new(provider: P, store: ScoreStore, rng: R, settings: QuizSettings) -> Self {
        let state = SessionState::with_score(store.get(), settings.points_on_correct);
        Self {
            state,
            provider,
            store,
            rng,
            settings,
            directory: Vec::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Begin the first question cycle: fetch the directory, then generate.
    ///
    /// The directory is fetched once; later rounds reuse it. A no-op while
    /// a load or an evaluation is already in flight.
    pub async fn start(&mut self) -> &SessionState {
        self.dispatch(QuizIntent::LoadStarted);
        if self.state.phase != Phase::Loading {
            return &self.state;
        }

        match self.provider.fetch_countries().await {
            Ok(directory) => {
                tracing::info!(count = directory.len(), "country directory loaded");
                self.directory = directory;
                self.next_round().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "country directory fetch failed");
                self.dispatch(QuizIntent::LoadFailed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                });
            }
        }
        &self.state
    }

    /// Record the user's pick. Ignored unless a round is awaiting an answer.
    pub fn select(&mut self, country: Country) {
        self.dispatch(QuizIntent::OptionSelected { country });
    }

    /// Confirm the current selection, persist the score and advance to the
    /// next round. A no-op while busy or when nothing is selected.
    ///
    /// Returns the state right after scoring, while the feedback message
    /// is still present; the auto-advance that follows installs the next
    /// round and clears it.
    pub async fn confirm(&mut self) -> SessionState {
        self.dispatch(QuizIntent::SelectionConfirmed);
        if self.state.phase != Phase::Evaluating {
            return self.state.clone();
        }

        tracing::info!(score = self.state.score, "answer scored");
        if let Err(err) = self.store.set(self.state.score) {
            tracing::warn!(error = %err, "failed to persist score");
        }

        let evaluated = self.state.clone();
        self.dispatch(QuizIntent::LoadStarted);
        self.next_round().await;
        evaluated
    }

    /// Pace, then generate a round from the cached directory.
    async fn next_round(&mut self) {
        if !self.directory.is_empty() {
            tokio::time::sleep(Duration::from_millis(self.settings.pacing_delay_ms)).await;
        }

        match generate(&self.directory, self.settings.option_count, &mut self.rng) {
            Ok(round) => {
                tracing::debug!(flag_key = round.flag_key(), "round ready");
                self.dispatch(QuizIntent::RoundReady { round });
            }
            Err(err) => {
                tracing::warn!(error = %err, "round generation failed");
                self.dispatch(QuizIntent::LoadFailed {
                    message: ROUND_FAILED_MESSAGE.to_string(),
                });
            }
        }
    }

    fn dispatch(&mut self, intent: QuizIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SessionReducer::reduce(state, intent);
    }
}
