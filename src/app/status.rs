use std::fmt::Write as _;

use crate::markup::{Markup, text};

pub const UPLOAD_SUCCESS: &str = "Recipe was successfully uploaded!";

/// One user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Error(text) | Notice::Success(text) => text,
        }
    }
}

/// The shared message channel.
///
/// There is exactly one slot: every write replaces whatever notice was
/// showing, error or success alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLine {
    current: Option<Notice>,
}

impl MessageLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Notice::Error(message.into()));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some(Notice::Success(message.into()));
    }

    pub fn upload_succeeded(&mut self) {
        self.success(UPLOAD_SUCCESS);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Markup for the message region; empty when nothing is showing.
    pub fn markup(&self) -> Markup {
        let Some(notice) = &self.current else {
            return Markup::new();
        };
        let (class, body) = match notice {
            Notice::Error(message) => ("notice notice--error", message),
            Notice::Success(message) => ("notice notice--success", message),
        };
        let mut html = String::new();
        let _ = writeln!(html, "<div class=\"{class}\">");
        let _ = writeln!(html, "<p>{}</p>", text(body));
        html.push_str("</div>\n");
        Markup::from_raw(html)
    }
}
