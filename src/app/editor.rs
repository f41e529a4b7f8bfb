use anyhow::Result;
use log::debug;

use crate::domain::{RecipeDraft, SavedRecipe};
use crate::form::{EditorSession, FormSnapshot, OpenOutcome, ValidationError, validate};
use crate::markup::{Markup, MarkupOptions};
use crate::presentation::{FormView, View, ingredient_row_markup};
use crate::surface::{InsertPosition, Region, RenderSurface};

use super::status::MessageLine;

/// Callback invoked with an accepted draft: the draft itself, whether the
/// session was editing, and the stored id when it was.
pub type UploadHandler = Box<dyn FnMut(RecipeDraft, bool, Option<&str>)>;

/// Result of driving one submission through validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft accepted and handed to the upload handler. The form is left
    /// open; call [`RecipeEditor::upload_succeeded`] once the upload lands.
    Accepted(RecipeDraft),
    /// Submission rejected; the message region now shows why.
    Rejected(ValidationError),
}

/// The recipe form, wired to a host surface.
///
/// Owns the current [`EditorSession`] and replaces it on every transition;
/// all drawing goes through the host's [`RenderSurface`].
pub struct RecipeEditor<S> {
    session: EditorSession,
    view: FormView,
    messages: MessageLine,
    surface: S,
    on_upload: Option<UploadHandler>,
}

impl<S: RenderSurface> RecipeEditor<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, MarkupOptions::new())
    }

    pub fn with_options(surface: S, options: MarkupOptions) -> Self {
        Self {
            session: EditorSession::new(),
            view: FormView::with_options(options),
            messages: MessageLine::new(),
            surface,
            on_upload: None,
        }
    }

    /// Register the callback that receives accepted drafts. Uploading is
    /// the host's business; the editor only hands the draft over.
    pub fn on_upload<F>(&mut self, handler: F)
    where
        F: FnMut(RecipeDraft, bool, Option<&str>) + 'static,
    {
        self.on_upload = Some(Box::new(handler));
    }

    pub fn is_open(&self) -> bool {
        self.session.is_visible()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn row_count(&self) -> usize {
        self.session.row_count()
    }

    pub fn messages(&self) -> &MessageLine {
        &self.messages
    }

    /// Open the editor, rendering a fresh form document into the form
    /// region and revealing the window and overlay.
    ///
    /// On [`OpenOutcome::Rendered`] the add-ingredient control in the new
    /// markup is unbound; the host must re-attach its click handler. When
    /// the editor was already open this just hides it again.
    pub fn open(&mut self, source: Option<SavedRecipe>) -> Result<OpenOutcome> {
        let (session, outcome) = std::mem::take(&mut self.session).open(source);
        self.session = session;

        match outcome {
            OpenOutcome::Rendered => {
                let markup = self.view.render(&self.session.form_context());
                self.surface.clear(Region::Form)?;
                self.surface.insert(Region::Form, InsertPosition::AfterBegin, &markup)?;
                self.set_window_hidden(false)?;
            }
            OpenOutcome::Hidden => self.set_window_hidden(true)?,
        }
        Ok(outcome)
    }

    /// Hide the window and overlay. Session data survives until the next
    /// open.
    pub fn close(&mut self) -> Result<()> {
        self.session = std::mem::take(&mut self.session).close();
        self.set_window_hidden(true)
    }

    /// Append one blank ingredient row to the rows region.
    ///
    /// Only the new row is rendered; existing rows and whatever the user
    /// typed in them are untouched. Returns the inserted fragment, or
    /// `None` while hidden.
    pub fn add_ingredient(&mut self) -> Result<Option<Markup>> {
        let (session, index) = std::mem::take(&mut self.session).add_row();
        self.session = session;

        let Some(index) = index else {
            return Ok(None);
        };
        let markup = ingredient_row_markup(index, None);
        self.surface.insert(Region::Rows, InsertPosition::BeforeEnd, &markup)?;
        Ok(Some(markup))
    }

    /// Validate a submitted snapshot.
    ///
    /// An accepted draft goes to the upload handler together with the
    /// editing flag and stored id. A rejected one renders its message into
    /// the message region and leaves the form open, inputs intact.
    pub fn submit(&mut self, snapshot: &FormSnapshot) -> Result<SubmitOutcome> {
        match validate(snapshot) {
            Ok(draft) => {
                let editing = self.session.is_editing();
                let source_id = self.session.source().map(|saved| saved.id.clone());
                debug!("submission accepted (editing: {editing})");
                if let Some(handler) = self.on_upload.as_mut() {
                    handler(draft.clone(), editing, source_id.as_deref());
                }
                Ok(SubmitOutcome::Accepted(draft))
            }
            Err(error) => {
                debug!("submission rejected: {error}");
                self.messages.error(error.user_message());
                self.render_messages()?;
                Ok(SubmitOutcome::Rejected(error))
            }
        }
    }

    /// Show the canonical success notice. Hosts call this once their
    /// upload lands, then close the editor after the grace period
    /// ([`crate::config::MODAL_CLOSE_SECS`]).
    pub fn upload_succeeded(&mut self) -> Result<()> {
        self.messages.upload_succeeded();
        self.render_messages()
    }

    fn render_messages(&mut self) -> Result<()> {
        let markup = self.messages.markup();
        self.surface.clear(Region::Messages)?;
        self.surface.insert(Region::Messages, InsertPosition::AfterBegin, &markup)?;
        Ok(())
    }

    fn set_window_hidden(&mut self, hidden: bool) -> Result<()> {
        self.surface.set_hidden(Region::Window, hidden)?;
        self.surface.set_hidden(Region::Overlay, hidden)?;
        Ok(())
    }
}
