//! Canvas2D backend: replays a `DrawList` onto a `<canvas>`.

use std::f64::consts::TAU;

use catch_engine::{Color, DrawCommand, DrawTiming, FrameData, Renderer, TextAlign};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "system-ui, -apple-system, 'Segoe UI', sans-serif";

pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Backing-store pixels per world unit.
    scale: f64,
}

impl Canvas2dRenderer {
    /// Wrap a canvas and size its backing store to `world × device_pixel_ratio`.
    pub fn new(canvas: HtmlCanvasElement, world_width: f32, world_height: f32) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
        let mut renderer = Self {
            canvas,
            ctx,
            scale: 1.0,
        };
        renderer.resize(
            (world_width as f64 * dpr).round() as u32,
            (world_height as f64 * dpr).round() as u32,
        );
        renderer.scale = dpr;
        Ok(renderer)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn font(size: f32, bold: bool) -> String {
        let weight = if bold { "700" } else { "500" };
        format!("{} {}px {}", weight, size, FONT_FAMILY)
    }

    fn rounded_rect_path(&self, x: f64, y: f64, w: f64, h: f64, r: f64) -> Result<(), JsValue> {
        let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r)?;
        ctx.arc_to(x + w, y + h, x, y + h, r)?;
        ctx.arc_to(x, y + h, x, y, r)?;
        ctx.arc_to(x, y, x + w, y, r)?;
        ctx.close_path();
        Ok(())
    }

    fn draw_command(&self, cmd: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::GradientRect { x, y, w, h, stops } => {
                let (x, y, w, h) = (*x as f64, *y as f64, *w as f64, *h as f64);
                let gradient = ctx.create_linear_gradient(x, y, x, y + h);
                for (offset, color) in stops {
                    gradient.add_color_stop(offset.clamp(0.0, 1.0), &color.to_css())?;
                }
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(x, y, w, h);
            }
            DrawCommand::Rect { x, y, w, h, color } => {
                self.set_fill(*color);
                ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
            }
            DrawCommand::RoundedRect { x, y, w, h, radius, color } => {
                self.rounded_rect_path(*x as f64, *y as f64, *w as f64, *h as f64, *radius as f64)?;
                self.set_fill(*color);
                ctx.fill();
            }
            DrawCommand::Circle { x, y, radius, color } => {
                ctx.begin_path();
                ctx.arc(*x as f64, *y as f64, radius.max(0.0) as f64, 0.0, TAU)?;
                self.set_fill(*color);
                ctx.fill();
            }
            DrawCommand::ShadedCircle { x, y, radius, highlight, base } => {
                let (x, y, r) = (*x as f64, *y as f64, radius.max(0.0) as f64);
                let gradient = ctx.create_radial_gradient(x - r * 0.35, y - r * 0.35, r * 0.1, x, y, r)?;
                gradient.add_color_stop(0.0, &highlight.to_css())?;
                gradient.add_color_stop(1.0, &base.to_css())?;
                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, TAU)?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill();
            }
            DrawCommand::Ring { x, y, radius, line_width, color } => {
                ctx.begin_path();
                ctx.arc(*x as f64, *y as f64, radius.max(0.0) as f64, 0.0, TAU)?;
                ctx.set_line_width(*line_width as f64);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.stroke();
            }
            DrawCommand::Text { text, x, y, size, bold, align, color } => {
                ctx.set_font(&Self::font(*size, *bold));
                ctx.set_text_align(align.as_css());
                ctx.set_text_baseline("middle");
                self.set_fill(*color);
                ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
        Ok(())
    }
}

impl Renderer for Canvas2dRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn draw(&mut self, frame: &FrameData) -> DrawTiming {
        let mut timing = DrawTiming::default();
        if let Err(err) = self.ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0) {
            log::debug!("canvas2d: set_transform failed: {:?}", err);
        }
        for cmd in frame.commands {
            timing.commands += 1;
            if let Err(err) = self.draw_command(cmd) {
                timing.failed += 1;
                log::debug!("canvas2d: draw failed: {:?}", err);
            }
        }
        // Reset per-frame text state so host overlays are unaffected
        self.ctx.set_text_align(TextAlign::Left.as_css());
        timing
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
