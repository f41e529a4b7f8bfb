mod editor;
mod pager;
mod status;

pub use editor::{RecipeEditor, SubmitOutcome, UploadHandler};
pub use pager::Pager;
pub use status::{MessageLine, Notice, UPLOAD_SUCCESS};
