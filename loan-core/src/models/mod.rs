mod application_state;
mod document;
mod field;
mod step;

pub use application_state::{ApplicationState, SCHEMA_VERSION};
pub use document::{DocumentId, DocumentMeta};
pub use field::{FieldKey, FieldValue};
pub use step::{StepId, StepIdError};
