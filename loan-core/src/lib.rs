pub mod calculations;
pub mod documents;
pub mod models;
pub mod store;
pub mod validation;
pub mod validators;
pub mod wizard;

pub use documents::{DocumentSet, MAX_UPLOAD_BYTES, UploadError};
pub use models::*;
pub use store::{SnapshotStore, StoreError};
pub use validation::{FieldError, ValidationReport};
pub use wizard::{MessageKind, StepHook, StepOutcome, Wizard, WizardView};
