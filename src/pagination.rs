use std::num::NonZeroUsize;

use log::{debug, warn};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::surface::ClickTarget;

/// Class every clickable pagination control carries. Delegated click
/// handling resolves against it.
pub const CONTROL_CLASS: &str = "pager__control";

/// `data-*` key carrying a control's target page.
pub const PAGE_ATTR: &str = "page";

/// Input to one pagination render: the result set and the page in view.
///
/// Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub result_count: usize,
    pub page_size: NonZeroUsize,
    pub current_page: usize,
}

impl PageState {
    pub fn new(result_count: usize, current_page: usize) -> Self {
        let page_size = NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN);
        Self {
            result_count,
            page_size,
            current_page: current_page.max(1),
        }
    }

    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Number of pages needed to hold every result. Zero results take zero
    /// pages.
    pub fn page_count(&self) -> usize {
        self.result_count.div_ceil(self.page_size.get())
    }

    /// Decide which navigation controls this state needs.
    ///
    /// `None` when everything fits on a single page, in which case the pager
    /// region should be left empty. A `current_page` beyond the last page is
    /// clamped to the last page, which happens when results shrink under a
    /// live page number.
    pub fn controls(&self) -> Option<PageControls> {
        let total = self.page_count();
        if total <= 1 {
            debug!("pagination: {total} page(s) for {} result(s), no controls", self.result_count);
            return None;
        }

        let current = if self.current_page > total {
            warn!(
                "pagination: page {} is past the last page, clamping to {total}",
                self.current_page
            );
            total
        } else {
            self.current_page
        };

        Some(PageControls {
            previous: (current > 1).then(|| PageLink { target: current - 1 }),
            indicator: PageIndicator { current, total },
            next: (current < total).then(|| PageLink { target: current + 1 }),
        })
    }
}

/// One emitted navigation control. `target` doubles as the encoded
/// `data-page` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub target: usize,
}

/// The always-present `current/total` position marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub current: usize,
    pub total: usize,
}

/// The controls selected for one render, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub previous: Option<PageLink>,
    pub indicator: PageIndicator,
    pub next: Option<PageLink>,
}

/// Decode the target page from a delegated click.
///
/// `None` when the click missed every control or the control carries no
/// usable page payload; both are no-ops for the caller.
pub fn resolve_click(target: &dyn ClickTarget) -> Option<usize> {
    let control = target.closest_control(CONTROL_CLASS)?;
    control.data(PAGE_ATTR)?.parse().ok()
}
