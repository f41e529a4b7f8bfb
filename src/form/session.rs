use log::debug;

use crate::config::DEFAULT_BLANK_ROWS;
use crate::domain::{RecipeDraft, SavedRecipe};

/// Whether an open session edits a stored recipe or drafts a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(SavedRecipe),
}

impl EditorMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditorMode::Edit(_))
    }

    pub fn source(&self) -> Option<&SavedRecipe> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(saved) => Some(saved),
        }
    }
}

/// What the host must do after an `open` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Fresh form markup was produced; the add-row control is new and its
    /// click handler must be rebound.
    Rendered,
    /// The form was already open, so the window was hidden instead.
    /// Re-rendering here would stack duplicate handlers on live controls.
    Hidden,
}

/// One editing session of the recipe form.
///
/// A session is a value. Every transition consumes the old state and
/// returns its replacement, so rendering and validation stay pure
/// functions of their inputs and there is no hidden mutation to chase.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    mode: EditorMode,
    row_count: usize,
    visible: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// A closed session with create-mode defaults.
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Create,
            row_count: DEFAULT_BLANK_ROWS,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    /// Ingredient rows currently in the form, counting added blanks.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn source(&self) -> Option<&SavedRecipe> {
        self.mode.source()
    }

    /// Open the editor around `source`, or toggle it away.
    ///
    /// A closed session resets to the new mode and reports that fresh
    /// markup must be rendered. An open session only hides itself; its
    /// state survives until the next open.
    pub fn open(self, source: Option<SavedRecipe>) -> (Self, OpenOutcome) {
        if self.visible {
            debug!("editor already open, toggling hidden");
            return (
                Self {
                    visible: false,
                    ..self
                },
                OpenOutcome::Hidden,
            );
        }

        let row_count = match &source {
            Some(saved) => saved.recipe.ingredients.len(),
            None => DEFAULT_BLANK_ROWS,
        };
        let mode = match source {
            Some(saved) => EditorMode::Edit(saved),
            None => EditorMode::Create,
        };
        debug!(
            "opening editor ({} mode, {row_count} row(s))",
            if mode.is_editing() { "edit" } else { "create" }
        );

        (
            Self {
                mode,
                row_count,
                visible: true,
            },
            OpenOutcome::Rendered,
        )
    }

    /// Hide the window. Session data survives until the next open.
    pub fn close(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    /// Grow the form by one blank row, returning the new row's 1-based
    /// index. Existing rows keep their indices; nothing is re-rendered.
    /// Ignored while the editor is hidden.
    pub fn add_row(self) -> (Self, Option<usize>) {
        if !self.visible {
            debug!("ignoring add-row on hidden editor");
            return (self, None);
        }
        let index = self.row_count + 1;
        (
            Self {
                row_count: index,
                ..self
            },
            Some(index),
        )
    }

    /// Inputs the render layer needs for a full form document.
    pub fn form_context(&self) -> FormContext {
        FormContext {
            editing: self.is_editing(),
            source: self.source().map(|saved| saved.recipe.clone()),
        }
    }
}

/// Render input for one full form document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormContext {
    pub editing: bool,
    pub source: Option<RecipeDraft>,
}
