//! Canvas 2D rendering module
//!
//! Sim state is turned into a display list of `DrawCmd`s (pure, testable),
//! which the browser painter replays onto a 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod paint;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use paint::{DrawCmd, Fill, Rgba, Stop};
