use std::borrow::Cow;
use std::fmt;

/// Icon drawn on the submit button.
pub const ICON_UPLOAD: &str = "upload-cloud";
/// Icon drawn on the previous-page control.
pub const ICON_PREV: &str = "arrow-left";
/// Icon drawn on the next-page control.
pub const ICON_NEXT: &str = "arrow-right";

/// An owned HTML fragment produced by a view.
///
/// Everything user-controlled is escaped on the way in; holding the result
/// in a dedicated type keeps raw strings from leaking past the render layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Wrap an already assembled fragment. The caller vouches for escaping.
    pub fn from_raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape a value for interpolation into a double-quoted attribute.
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Escape a value for interpolation as a text node.
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Knobs shared by the markup builders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    icon_sheet: String,
}

impl MarkupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point icon references at an external sprite sheet. With the default
    /// empty sheet, references stay fragment-only (`#icon-arrow-left`).
    pub fn with_icon_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.icon_sheet = sheet.into();
        self
    }

    pub fn icon_sheet(&self) -> &str {
        &self.icon_sheet
    }

    /// `href` value resolving the named icon against the sprite sheet.
    pub(crate) fn icon_href(&self, name: &str) -> String {
        format!("{}#icon-{name}", self.icon_sheet)
    }
}
