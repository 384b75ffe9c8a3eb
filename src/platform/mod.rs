//! Platform abstraction layer
//!
//! Browser glue for:
//! - Canvas mounting and animation frames
//! - Pointer, resize and scroll events
//! - Page widgets (nav, typing, reveal, resume, contact, theme)
//! - Storage (LocalStorage on web)

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub mod widgets;
