use anyhow::Result;
use log::debug;

use crate::markup::MarkupOptions;
use crate::pagination::{PageState, resolve_click};
use crate::presentation::{PaginationView, View};
use crate::surface::{ClickTarget, InsertPosition, Region, RenderSurface};

/// Pagination controls wired to a host surface.
///
/// Rendering and navigation are deliberately decoupled: a click only fires
/// the page-change callback, and it is the caller's job to come back with
/// a fresh [`PageState`] once the new page is in hand.
pub struct Pager<S> {
    view: PaginationView,
    surface: S,
    on_page_change: Option<Box<dyn FnMut(usize)>>,
}

impl<S: RenderSurface> Pager<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, MarkupOptions::new())
    }

    pub fn with_options(surface: S, options: MarkupOptions) -> Self {
        Self {
            view: PaginationView::with_options(options),
            surface,
            on_page_change: None,
        }
    }

    pub fn on_page_change<F>(&mut self, handler: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.on_page_change = Some(Box::new(handler));
    }

    /// Replace the rendered controls with the ones `state` needs. A
    /// single-page state leaves the region empty.
    pub fn render(&mut self, state: &PageState) -> Result<()> {
        let markup = self.view.render(state);
        self.surface.clear(Region::Pagination)?;
        self.surface.insert(Region::Pagination, InsertPosition::AfterBegin, &markup)?;
        Ok(())
    }

    /// Delegated click entry point for the pagination region.
    ///
    /// Clicks that miss every control are no-ops. A hit fires the
    /// page-change callback and returns the target page.
    pub fn handle_click(&mut self, target: &dyn ClickTarget) -> Option<usize> {
        let page = resolve_click(target)?;
        debug!("pagination: navigating to page {page}");
        if let Some(handler) = self.on_page_change.as_mut() {
            handler(page);
        }
        Some(page)
    }
}
