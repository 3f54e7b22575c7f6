//! Current-session state machine.

use chrono::{DateTime, Utc};

use crate::app::generation::GenerationClient;
use crate::app::history::HistoryStore;
use crate::domain::{AppError, CampaignInput, GenerationError, GenerationResult, HistoryEntry};
use crate::ports::{GenerationService, KeyValueStore};

/// Lifecycle of the current generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Generating,
    Ready,
    Failed { message: String },
}

/// Form values, current results and history for one user session.
///
/// At most one generation may be pending: `begin_generation` refuses to start
/// while the state is `Generating`.
#[derive(Debug)]
pub struct Session<K: KeyValueStore> {
    form: CampaignInput,
    result: Option<GenerationResult>,
    generated_at: Option<DateTime<Utc>>,
    saved_entry_id: Option<String>,
    state: SessionState,
    history: HistoryStore<K>,
}

impl<K: KeyValueStore> Session<K> {
    pub fn new(history: HistoryStore<K>) -> Self {
        Self {
            form: CampaignInput::default(),
            result: None,
            generated_at: None,
            saved_entry_id: None,
            state: SessionState::Idle,
            history,
        }
    }

    pub fn form(&self) -> &CampaignInput {
        &self.form
    }

    /// Replace the form values. Rejected while a generation is pending.
    pub fn set_form(&mut self, input: CampaignInput) -> Result<(), AppError> {
        self.ensure_not_generating()?;
        self.form = input;
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// When the current result was produced.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// User-facing message of the last failure, if the session is `Failed`.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Id of the history entry recorded for the current result.
    pub fn saved_entry_id(&self) -> Option<&str> {
        self.saved_entry_id.as_deref()
    }

    pub fn history(&self) -> &HistoryStore<K> {
        &self.history
    }

    /// Move to `Generating` and hand out a snapshot of the form.
    pub fn begin_generation(&mut self) -> Result<CampaignInput, AppError> {
        self.ensure_not_generating()?;

        self.clear_current();
        if let Err(err) = self.form.validate() {
            self.state = SessionState::Failed { message: err.user_message() };
            return Err(err.into());
        }

        self.state = SessionState::Generating;
        Ok(self.form.clone())
    }

    /// Apply the outcome of a generation started with `begin_generation`.
    ///
    /// On success the result is recorded in history. A history write failure is
    /// logged and does not fail the generation. Outside `Generating` (for
    /// example after `reset`) the outcome is discarded with `NotGenerating`.
    pub fn finish_generation(
        &mut self,
        input: CampaignInput,
        outcome: Result<GenerationResult, GenerationError>,
    ) -> Result<&GenerationResult, AppError> {
        if self.state != SessionState::Generating {
            tracing::debug!(state = ?self.state, "discarding generation outcome");
            return Err(AppError::NotGenerating);
        }

        match outcome {
            Ok(result) => {
                let created_at = Utc::now();
                match self.history.record(input, result.clone(), created_at) {
                    Ok(entry) => self.saved_entry_id = Some(entry.id.clone()),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to persist generation history");
                    }
                }
                self.generated_at = Some(created_at);
                self.state = SessionState::Ready;
                Ok(self.result.insert(result))
            }
            Err(err) => {
                tracing::warn!(error = %err, "ad copy generation failed");
                self.clear_current();
                self.state = SessionState::Failed { message: err.user_message() };
                Err(err.into())
            }
        }
    }

    /// Submit the current form: begin, call the service once, finish.
    pub fn submit<S: GenerationService>(
        &mut self,
        client: &GenerationClient<S>,
    ) -> Result<&GenerationResult, AppError> {
        let input = self.begin_generation()?;
        let outcome = client.generate(&input);
        self.finish_generation(input, outcome)
    }

    /// Reset form and results to defaults. History is untouched.
    pub fn reset(&mut self) {
        self.form = CampaignInput::default();
        self.clear_current();
        self.state = SessionState::Idle;
    }

    /// Load a past generation back into the form and current results.
    pub fn restore(&mut self, id: &str) -> Result<&HistoryEntry, AppError> {
        self.ensure_not_generating()?;
        let entry =
            self.history.get(id).ok_or_else(|| AppError::HistoryEntryNotFound(id.into()))?;

        self.form = entry.input.clone();
        self.result = Some(entry.result.clone());
        self.generated_at = Some(entry.created_at);
        self.saved_entry_id = Some(entry.id.clone());
        self.state = SessionState::Ready;
        Ok(entry)
    }

    pub fn delete_history_entry(&mut self, id: &str) -> Result<bool, AppError> {
        self.history.delete(id)
    }

    pub fn clear_history(&mut self) -> Result<usize, AppError> {
        self.history.clear()
    }

    fn ensure_not_generating(&self) -> Result<(), AppError> {
        if self.state == SessionState::Generating {
            return Err(AppError::GenerationInProgress);
        }
        Ok(())
    }

    fn clear_current(&mut self) {
        self.result = None;
        self.generated_at = None;
        self.saved_entry_id = None;
    }
}
