mod error;
mod session;
mod snapshot;
mod validate;

pub use error::ValidationError;
pub use session::{EditorMode, EditorSession, FormContext, OpenOutcome};
pub use snapshot::{FormSnapshot, RowSnapshot};
pub use validate::validate;
