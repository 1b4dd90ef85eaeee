use crate::models::{ApplicationState, FieldKey, StepId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// What the step controller asks of the presentation layer.
///
/// The controller drives these calls and knows nothing about how they
/// render; the console shell implements them over stdout, tests record
/// them. None of the methods can fail from the controller's point of view.
pub trait WizardView: Send {
    /// Show the content for `step`. Called after every successful
    /// transition and on the initial render.
    fn render_step(&mut self, step: StepId, state: &ApplicationState);

    /// Refresh the numbered progress indicator.
    /// ([`StepId::shows_progress`] says whether it is visible at all.)
    fn render_progress(&mut self, step: StepId);

    /// Attach an inline error message to a field.
    fn show_field_error(&mut self, key: FieldKey, message: &str);

    /// Drop all inline field errors.
    fn clear_field_errors(&mut self);

    /// Transient banner, the toast equivalent.
    fn show_transient(&mut self, text: &str, kind: MessageKind);
}
