use flambe_view::render::{render, Glow, RenderStyle, Surface};
use flambe_view::vector::{Point, Vector};
use wasm_bindgen::JsCast;

/// [`Surface`] over a canvas' 2D context.
pub(super) struct CanvasSurface {
    ctx: web_sys::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub(super) fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "canvas: get_context threw".to_string())?
            .ok_or("canvas: missing 2d context".to_string())?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "canvas: context is not 2d".to_string())?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.fill();
    }

    fn set_glow(&mut self, glow: Option<&Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur);
                self.ctx.set_shadow_color(&g.color);
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}

pub(super) fn draw_vector(
    canvas: &web_sys::HtmlCanvasElement,
    v: Vector,
    style: &RenderStyle,
) -> Result<(), String> {
    let mut surface = CanvasSurface::from_canvas(canvas)?;
    render(&mut surface, v, style);
    Ok(())
}
