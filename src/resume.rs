//! Resume preview overlay
//!
//! The overlay is a `div.modal.modal-open` holding a close button and an
//! iframe of the document. It closes from the button or from a click that
//! lands on the overlay itself rather than its content.

/// Class list of the overlay element
pub const MODAL_CLASS: &str = "modal modal-open";

/// Where a click on an open overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    CloseButton,
    /// The overlay backdrop (event target is the overlay element)
    Backdrop,
    /// Anything inside the viewer content
    Content,
}

impl ModalClick {
    pub fn closes(&self) -> bool {
        matches!(self, ModalClick::CloseButton | ModalClick::Backdrop)
    }
}

/// Pick the document path: the button's `data-src`, else the configured default
pub fn resolve_source<'a>(data_src: Option<&'a str>, default_path: &'a str) -> &'a str {
    data_src
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default_path)
}

/// Inner markup of the overlay
pub fn modal_markup(src: &str) -> String {
    format!(
        r#"<div class="modal-inner"><button class="modal-close" aria-label="Close">×</button><iframe src="{}" frameborder="0"></iframe></div>"#,
        escape_attr(src)
    )
}

/// Escape a string for a double-quoted HTML attribute
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
