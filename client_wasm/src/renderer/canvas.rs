//! Canvas 2D backend

use game_core::Color;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextAlign};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) -> Result<(), String> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    ) -> Result<(), String> {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let drawn = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
        drawn.map_err(js_err)
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size: f32,
        align: TextAlign,
        color: Color,
    ) -> Result<(), String> {
        self.ctx.set_font(&format!("{}px monospace", size));
        self.ctx.set_text_align(align.as_css());
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_text(text, pos.x as f64, pos.y as f64)
            .map_err(js_err)
    }
}
