//! Replays display lists onto a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::paint::{DrawCmd, Fill, Stop};
use crate::error::{FxError, Result};

/// Owns a canvas and its 2D context
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FxError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Set the backing store size in pixels
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Draw a frame
    pub fn paint(&self, cmds: &[DrawCmd]) -> Result<()> {
        for cmd in cmds {
            self.draw(cmd)?;
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw(&self, cmd: &DrawCmd) -> Result<()> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCmd::FillRect {
                width,
                height,
                fill,
            } => {
                ctx.set_global_alpha(1.0);
                self.set_fill(fill)?;
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            DrawCmd::Disc {
                center,
                radius,
                fill,
                alpha,
            } => {
                ctx.set_global_alpha(*alpha);
                self.set_fill(fill)?;
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                ctx.fill();
            }
            DrawCmd::Ring {
                center,
                radius,
                color,
                width,
            } => {
                ctx.set_global_alpha(1.0);
                ctx.begin_path();
                ctx.set_line_width(*width);
                ctx.set_stroke_style_str(&color.css());
                ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                ctx.stroke();
            }
            DrawCmd::Line {
                from,
                to,
                color,
                alpha,
            } => {
                ctx.set_global_alpha(*alpha);
                ctx.set_line_width(1.0);
                ctx.set_stroke_style_str(&color.css());
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
        }
        Ok(())
    }

    fn set_fill(&self, fill: &Fill) -> Result<()> {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.css()),
            Fill::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                add_stops(&g, stops)?;
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
            Fill::Radial {
                inner,
                inner_radius,
                outer,
                outer_radius,
                stops,
            } => {
                let g = self.ctx.create_radial_gradient(
                    inner.x,
                    inner.y,
                    *inner_radius,
                    outer.x,
                    outer.y,
                    *outer_radius,
                )?;
                add_stops(&g, stops)?;
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
        }
        Ok(())
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[Stop]) -> Result<()> {
    for stop in stops {
        gradient.add_color_stop(stop.offset, &stop.color.css())?;
    }
    Ok(())
}
