#![deny(rust_2018_idioms)]

mod app;
pub mod config;
mod domain;
mod form;
mod markup;
mod pagination;
mod presentation;
mod surface;


pub use app::{MessageLine, Notice, Pager, RecipeEditor, SubmitOutcome, UPLOAD_SUCCESS, UploadHandler};
pub use domain::{Ingredient, RecipeDraft, RecipeField, RowField, SavedRecipe};
pub use form::{
    EditorMode, EditorSession, FormContext, FormSnapshot, OpenOutcome, RowSnapshot,
    ValidationError, validate,
};
pub use markup::{ICON_NEXT, ICON_PREV, ICON_UPLOAD, Markup, MarkupOptions};
pub use pagination::{
    CONTROL_CLASS, PAGE_ATTR, PageControls, PageIndicator, PageLink, PageState, resolve_click,
};
pub use presentation::{ADD_ROW_CLASS, FormView, PaginationView, View, ingredient_row_markup};
pub use surface::{ClickTarget, Control, InsertPosition, Region, RenderSurface};

pub mod prelude {
    pub use super::{
        EditorSession, FormSnapshot, Markup, PageState, Pager, RecipeEditor, RenderSurface,
        SubmitOutcome,
    };
}
