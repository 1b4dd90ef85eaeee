//! The step controller: a finite-state machine over the wizard's steps,
//! gated by per-step validation and wired to a view and a snapshot store.

mod controller;
mod view;

pub use controller::{StepHook, StepOutcome, Wizard};
pub use view::{MessageKind, WizardView};
