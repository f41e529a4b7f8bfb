/// Results shown per page when the host does not override the page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Blank ingredient rows seeded into a freshly opened create form.
pub const DEFAULT_BLANK_ROWS: usize = 3;

/// Seconds the host should leave the editor window visible after a
/// successful upload before closing it.
pub const MODAL_CLOSE_SECS: f64 = 2.5;
