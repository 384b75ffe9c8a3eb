//! Scroll-driven page state: active nav section, reveals, skill bars, back-to-top

use crate::consts::*;

/// Layout of a page section as read from the DOM
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Id of the section the nav should highlight at `scroll_y`.
///
/// Later sections win when ranges overlap.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.offset_top - SECTION_LEAD;
            let bottom = top + s.height;
            scroll_y >= top && scroll_y <= bottom
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at section `id`. Only a leading `#` is
/// stripped.
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#').unwrap_or(href) == id
}

/// Whether a nav link should be highlighted. No link is while no section is current.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    current.is_some_and(|id| link_targets(href, id))
}

/// Element top (relative to viewport) is far enough up to reveal
#[inline]
pub fn should_reveal(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height - REVEAL_MARGIN
}

/// Skills section has scrolled into the trigger zone
#[inline]
pub fn skills_triggered(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height * SKILL_TRIGGER_FRACTION
}

/// CSS width for a skill bar from its `data-progress` / `data-value` attributes
pub fn skill_width(progress: Option<&str>, value: Option<&str>) -> String {
    let v = progress
        .filter(|s| !s.is_empty())
        .or(value.filter(|s| !s.is_empty()))
        .unwrap_or(SKILL_DEFAULT_PERCENT);
    format!("{}%", v)
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}
