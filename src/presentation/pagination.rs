use std::fmt::Write as _;

use crate::markup::{ICON_NEXT, ICON_PREV, Markup, MarkupOptions, attr};
use crate::pagination::{CONTROL_CLASS, PAGE_ATTR, PageControls, PageState};
use crate::surface::Region;

use super::View;

/// Renders pagination controls for one result window.
#[derive(Debug, Clone, Default)]
pub struct PaginationView {
    options: MarkupOptions,
}

impl PaginationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MarkupOptions) -> Self {
        Self { options }
    }
}

impl View for PaginationView {
    type State = PageState;

    /// Empty markup when everything fits on one page; otherwise previous
    /// control (when applicable), indicator, next control (when applicable),
    /// in that order.
    fn render(&self, state: &PageState) -> Markup {
        match state.controls() {
            Some(controls) => controls_markup(&controls, &self.options),
            None => Markup::new(),
        }
    }

    fn region(&self) -> Region {
        Region::Pagination
    }
}

fn controls_markup(controls: &PageControls, options: &MarkupOptions) -> Markup {
    let mut html = String::new();

    if let Some(link) = controls.previous {
        let _ = writeln!(
            html,
            "<button data-{PAGE_ATTR}=\"{}\" class=\"{CONTROL_CLASS} {CONTROL_CLASS}--prev\">",
            link.target,
        );
        let _ = writeln!(
            html,
            "<svg class=\"pager__icon\"><use href=\"{}\"></use></svg>",
            attr(&options.icon_href(ICON_PREV)),
        );
        let _ = writeln!(html, "<span>Page {}</span>", link.target);
        html.push_str("</button>\n");
    }

    let _ = writeln!(
        html,
        "<span class=\"pager__pages\">{}/{}</span>",
        controls.indicator.current, controls.indicator.total,
    );

    if let Some(link) = controls.next {
        let _ = writeln!(
            html,
            "<button data-{PAGE_ATTR}=\"{}\" class=\"{CONTROL_CLASS} {CONTROL_CLASS}--next\">",
            link.target,
        );
        let _ = writeln!(html, "<span>Page {}</span>", link.target);
        let _ = writeln!(
            html,
            "<svg class=\"pager__icon\"><use href=\"{}\"></use></svg>",
            attr(&options.icon_href(ICON_NEXT)),
        );
        html.push_str("</button>\n");
    }

    Markup::from_raw(html)
}
