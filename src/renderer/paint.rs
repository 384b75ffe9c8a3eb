//! Display list types for Canvas 2D drawing

use glam::DVec2;

/// Straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// CSS color string, e.g. `rgba(0,238,255,0.9)`
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// A gradient color stop (offset in 0..=1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub offset: f32,
    pub color: Rgba,
}

impl Stop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Fill source for shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Linear {
        from: DVec2,
        to: DVec2,
        stops: Vec<Stop>,
    },
    /// Two-circle radial gradient, as in `createRadialGradient`
    Radial {
        inner: DVec2,
        inner_radius: f64,
        outer: DVec2,
        outer_radius: f64,
        stops: Vec<Stop>,
    },
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
    },
    FillRect {
        width: f64,
        height: f64,
        fill: Fill,
    },
    /// Filled disc, drawn at `alpha` global opacity
    Disc {
        center: DVec2,
        radius: f64,
        fill: Fill,
        alpha: f64,
    },
    /// Stroked circle outline
    Ring {
        center: DVec2,
        radius: f64,
        color: Rgba,
        width: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Rgba,
        alpha: f64,
    },
}

/// Palette shared by the effects
pub mod colors {
    use super::Rgba;

    /// Cyan accent
    pub const ACCENT: Rgba = Rgba::opaque(0, 238, 255);
    /// Violet secondary accent
    pub const SECONDARY: Rgba = Rgba::opaque(157, 78, 221);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const ICE: Rgba = Rgba::opaque(191, 255, 255);
    pub const DEEP: Rgba = Rgba::opaque(0, 119, 170);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
}
