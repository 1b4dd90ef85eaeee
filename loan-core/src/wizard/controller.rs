use std::sync::Arc;

use tracing::{error, info, warn};

use crate::documents::UploadError;
use crate::models::{ApplicationState, DocumentId, DocumentMeta, FieldKey, FieldValue, StepId};
use crate::store::SnapshotStore;
use crate::validation::{self, ValidationReport};
use crate::wizard::view::{MessageKind, WizardView};

/// Invoked after every successful `advance`/`retreat`/`jump_to`.
///
/// This replaces ad-hoc wrapping of the display routine: anything that
/// wants to react to a transition (assistant suggestions, analytics,
/// derived displays) registers a hook instead.
pub type StepHook = Box<dyn FnMut(StepId, &ApplicationState) + Send>;

/// What a transition request did.
#[derive(Debug, PartialEq)]
pub enum StepOutcome {
    /// The wizard is now on this step.
    Moved(StepId),
    /// Validation failed; the step is unchanged and the report was shown.
    Rejected(ValidationReport),
    /// Nothing happened (retreat at the first step, advance at the
    /// terminal step, or a debounced duplicate submission).
    Stayed,
}

/// The step controller.
///
/// Owns the application state and coordinates validation, persistence and
/// the view. Storage failures during a transition are logged and swallowed:
/// losing a snapshot write must never strand the user mid-wizard.
pub struct Wizard {
    state: ApplicationState,
    store: Arc<dyn SnapshotStore>,
    view: Box<dyn WizardView>,
    hooks: Vec<StepHook>,
    submitting: bool,
}

impl Wizard {
    pub fn new(store: Arc<dyn SnapshotStore>, view: Box<dyn WizardView>) -> Self {
        Self {
            state: ApplicationState::default(),
            store,
            view,
            hooks: Vec::new(),
            submitting: false,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn add_hook(&mut self, hook: StepHook) {
        self.hooks.push(hook);
    }

    /// Replaces in-memory state with the stored snapshot, if one exists and
    /// parses. Anything else leaves the defaults in place; never an error.
    pub async fn restore(&mut self) {
        match self.store.restore().await {
            Ok(Some(saved)) => {
                info!(step = %saved.step, "restored saved application");
                self.state = saved;
            }
            Ok(None) => {}
            Err(e) => warn!("could not restore saved application: {e}"),
        }
    }

    /// Renders the current step without transitioning. Used on startup.
    pub fn render_current(&mut self) {
        let step = self.state.step;
        self.view.render_step(step, &self.state);
        self.view.render_progress(step);
    }

    /// Records a field capture and persists the snapshot.
    pub async fn capture_field(&mut self, key: FieldKey, value: impl Into<FieldValue>) {
        self.state.set_field(key, value);
        self.persist_quietly().await;
    }

    /// Saves a selection-group choice and persists the snapshot.
    pub async fn save_selection(&mut self, group: &str, choice: &str) {
        self.state.set_selection(group, choice);
        self.persist_quietly().await;
    }

    /// Validates the current step and, on success, moves forward.
    ///
    /// Advancing from FinalReview goes straight to ThankYou — FinalApproval
    /// is never visited on the forward walk. Reaching ThankYou fires the
    /// submission notification and arms the duplicate-submission debounce.
    pub async fn advance(&mut self) -> StepOutcome {
        let current = self.state.step;

        let Some(next) = current.successor() else {
            return StepOutcome::Stayed;
        };

        if let Err(report) = validation::validate_step(&self.state, current) {
            self.view.clear_field_errors();
            for field_error in &report.field_errors {
                self.view
                    .show_field_error(field_error.key, &field_error.message);
            }
            if let Some(banner) = &report.banner {
                self.view.show_transient(banner, MessageKind::Error);
            }
            return StepOutcome::Rejected(report);
        }

        if current == StepId::FinalReview && self.submitting {
            self.view
                .show_transient("Submission already in progress", MessageKind::Error);
            return StepOutcome::Stayed;
        }

        self.persist_quietly().await;
        self.state.step = next;
        self.view.clear_field_errors();
        self.refresh(next);

        if next.is_terminal() {
            self.submitting = true;
            info!("loan application submitted");
            self.view.show_transient(
                "Application submitted successfully! You will receive a confirmation shortly.",
                MessageKind::Success,
            );
        }

        StepOutcome::Moved(next)
    }

    /// Steps backward. Always legal except at LoanSelection; never
    /// validates anything.
    pub fn retreat(&mut self) -> StepOutcome {
        match self.state.step.predecessor() {
            Some(prev) => {
                self.state.step = prev;
                self.refresh(prev);
                StepOutcome::Moved(prev)
            }
            None => StepOutcome::Stayed,
        }
    }

    /// Unconditional jump used by "edit this section" affordances and the
    /// direct-entry pages. Display refresh only, no validation.
    pub fn jump_to(&mut self, step: StepId) -> StepOutcome {
        self.state.step = step;
        self.refresh(step);
        StepOutcome::Moved(step)
    }

    /// Records a simulated upload. Oversized files are reported and leave
    /// the ledger untouched; accepted ones are persisted immediately.
    pub async fn record_upload(&mut self, id: &str, meta: DocumentMeta) -> Result<(), UploadError> {
        match self.state.uploaded_documents.record(id, meta) {
            Ok(()) => {
                self.persist_quietly().await;
                let label = DocumentId::parse(id).map(|d| d.label()).unwrap_or(id);
                let remaining = self.state.uploaded_documents.remaining_count();
                let text = if remaining == 0 {
                    format!("{label} uploaded successfully! All documents uploaded.")
                } else {
                    format!("{label} uploaded successfully! {remaining} remaining.")
                };
                self.view.show_transient(&text, MessageKind::Success);
                Ok(())
            }
            Err(e) => {
                self.view.show_transient(&e.to_string(), MessageKind::Error);
                Err(e)
            }
        }
    }

    /// Clears durable storage and returns to construction-time defaults.
    pub async fn reset(&mut self) {
        if let Err(e) = self.store.clear().await {
            error!("failed to clear saved application: {e}");
        }
        self.state.reset();
        self.submitting = false;
        self.view.clear_field_errors();
        self.refresh(StepId::LoanSelection);
    }

    fn refresh(&mut self, step: StepId) {
        self.view.render_step(step, &self.state);
        self.view.render_progress(step);
        for hook in &mut self.hooks {
            hook(step, &self.state);
        }
    }

    async fn persist_quietly(&self) {
        if let Err(e) = self.store.persist(&self.state).await {
            error!("failed to persist application state: {e}");
        }
    }
}
