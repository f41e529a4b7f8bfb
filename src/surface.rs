use anyhow::Result;

use crate::markup::Markup;

/// Mount points the host document exposes to the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The form element the editor document renders into.
    Form,
    /// The ingredient rows container inside the form.
    Rows,
    /// The floating editor window wrapping the form.
    Window,
    /// The page-dimming overlay behind the window.
    Overlay,
    /// The container pagination controls render into.
    Pagination,
    /// The shared area for error and success notices.
    Messages,
}

/// Where an insertion lands relative to a region's existing children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the region's first child.
    AfterBegin,
    /// After the region's last child.
    BeforeEnd,
}

/// Host-implemented rendering boundary.
///
/// The library never holds a display tree. Every visible change funnels
/// through these three calls, so a host can be a browser bridge, a server
/// template, or a test recorder.
pub trait RenderSurface {
    fn insert(&mut self, region: Region, position: InsertPosition, markup: &Markup) -> Result<()>;

    /// Drop all children of the region.
    fn clear(&mut self, region: Region) -> Result<()>;

    fn set_hidden(&mut self, region: Region, hidden: bool) -> Result<()>;
}

/// A control resolved from a click, exposing its `data-*` attributes.
pub trait Control {
    fn data(&self, key: &str) -> Option<&str>;
}

/// Host view of one click inside a delegated container.
pub trait ClickTarget {
    /// Nearest ancestor-or-self of the clicked node carrying the given
    /// class, if any.
    fn closest_control(&self, class: &str) -> Option<&dyn Control>;
}
