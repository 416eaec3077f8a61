//! Vector scope drawing.
//!
//! `render` is a full redraw: it clears the surface and paints the grid, the
//! origin marker, and the vector from scratch, so calling it twice with the same
//! input leaves the same picture. The drawing target is a [`Surface`]; the
//! browser crate implements it for a 2D canvas context and tests use
//! [`RecordingSurface`].

use crate::vector::{Point, Vector};

/// Shadow applied while drawing the vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: String,
}

/// Minimal 2D drawing target.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);

    /// Enable (`Some`) or disable (`None`) the glow for subsequent draws.
    fn set_glow(&mut self, glow: Option<&Glow>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Pixels per vector unit, applied to both axes.
    pub scale: f64,
    pub grid_spacing: f64,
    pub grid_color: String,
    pub accent: String,
    pub crosshair_half: f64,
    pub origin_radius: f64,
    pub endpoint_radius: f64,
    pub vector_width: f64,
    pub glow_blur: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            grid_spacing: 40.0,
            grid_color: "#363636".to_string(),
            accent: "#00ff88".to_string(),
            crosshair_half: 10.0,
            origin_radius: 5.0,
            endpoint_radius: 4.0,
            vector_width: 2.0,
            glow_blur: 10.0,
        }
    }
}

pub fn center_of(surface: &impl Surface) -> Point {
    let (w, h) = surface.size();
    Point::new(w / 2.0, h / 2.0)
}

/// Where the vector's tip lands. Not clipped: points past the edge are drawn
/// past the edge.
pub fn vector_endpoint(center: Point, v: Vector, scale: f64) -> Point {
    center.offset_by(v, scale)
}

pub fn render(surface: &mut impl Surface, v: Vector, style: &RenderStyle) {
    surface.clear();
    draw_grid(surface, style);

    let center = center_of(&*surface);
    draw_origin(surface, center, style);

    let tip = vector_endpoint(center, v, style.scale);
    let glow = Glow {
        blur: style.glow_blur,
        color: style.accent.clone(),
    };
    surface.set_glow(Some(&glow));
    surface.stroke_line(center, tip, &style.accent, style.vector_width);
    surface.fill_circle(tip, style.endpoint_radius, &style.accent);
    surface.set_glow(None);
}

fn draw_grid(surface: &mut impl Surface, style: &RenderStyle) {
    if style.grid_spacing <= 0.0 || !style.grid_spacing.is_finite() {
        return;
    }
    let (w, h) = surface.size();

    let mut x = 0.0;
    while x <= w {
        surface.stroke_line(Point::new(x, 0.0), Point::new(x, h), &style.grid_color, 1.0);
        x += style.grid_spacing;
    }
    let mut y = 0.0;
    while y <= h {
        surface.stroke_line(Point::new(0.0, y), Point::new(w, y), &style.grid_color, 1.0);
        y += style.grid_spacing;
    }
}

fn draw_origin(surface: &mut impl Surface, c: Point, style: &RenderStyle) {
    let r = style.crosshair_half;
    surface.stroke_line(
        Point::new(c.x - r, c.y),
        Point::new(c.x + r, c.y),
        &style.accent,
        1.0,
    );
    surface.stroke_line(
        Point::new(c.x, c.y - r),
        Point::new(c.x, c.y + r),
        &style.accent,
        1.0,
    );
    surface.fill_circle(c, style.origin_radius, &style.accent);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Line {
        from: Point,
        to: Point,
        color: String,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: String,
    },
    Glow(Option<Glow>),
}

/// A [`Surface`] that keeps the calls made since the last `clear`, which is
/// what a canvas would show.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Center of the last circle drawn, i.e. the vector's tip after `render`.
    pub fn last_dot(&self) -> Option<Point> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Circle { center, .. } => Some(*center),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn set_glow(&mut self, glow: Option<&Glow>) {
        self.ops.push(DrawOp::Glow(glow.cloned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> RecordingSurface {
        RecordingSurface::new(400.0, 400.0)
    }

    #[test]
    fn endpoint_is_center_plus_scaled_vector() {
        for (x, y, scale) in [
            (0.0, 0.0, 1.0),
            (12.5, 7.25, 1.0),
            (-3.0, 4.0, 10.0),
            (0.2, -0.9, 150.0),
        ] {
            let mut s = surface();
            let style = RenderStyle {
                scale,
                ..RenderStyle::default()
            };
            render(&mut s, Vector::new(x, y), &style);

            let tip = s.last_dot().unwrap();
            assert!((tip.x - (200.0 + scale * x)).abs() < 0.5);
            assert!((tip.y - (200.0 + scale * y)).abs() < 0.5);
        }
    }

    #[test]
    fn known_vector_at_unit_scale() {
        let mut s = surface();
        render(&mut s, Vector::new(100.0, -50.0), &RenderStyle::default());
        assert_eq!(s.last_dot(), Some(Point::new(300.0, 150.0)));
    }

    #[test]
    fn render_is_idempotent() {
        let style = RenderStyle::default();
        let v = Vector::new(33.0, -12.0);

        let mut once = surface();
        render(&mut once, v, &style);

        let mut twice = surface();
        render(&mut twice, v, &style);
        render(&mut twice, v, &style);

        assert_eq!(once.ops(), twice.ops());
    }

    #[test]
    fn draw_order_and_glow_scope() {
        let mut s = surface();
        render(&mut s, Vector::new(10.0, 10.0), &RenderStyle::default());
        let ops = s.ops();

        assert_eq!(ops[0], DrawOp::Clear);

        // 11 vertical + 11 horizontal grid lines on a 400px canvas at 40px.
        let grid = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { color, .. } if color == "#363636"))
            .count();
        assert_eq!(grid, 22);

        let glow_on = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Glow(Some(_))))
            .unwrap();
        // Only the vector line and its tip are drawn with the glow.
        assert!(matches!(ops[glow_on + 1], DrawOp::Line { width, .. } if width == 2.0));
        assert!(matches!(ops[glow_on + 2], DrawOp::Circle { radius, .. } if radius == 4.0));
        assert_eq!(ops[glow_on + 3], DrawOp::Glow(None));
        assert_eq!(ops.len(), glow_on + 4);

        // Origin dot precedes the glow.
        assert!(ops[..glow_on].iter().any(|op| matches!(
            op,
            DrawOp::Circle { center, radius, .. } if *center == Point::new(200.0, 200.0) && *radius == 5.0
        )));
    }

    #[test]
    fn points_outside_the_canvas_are_not_clipped() {
        let mut s = surface();
        render(&mut s, Vector::new(1000.0, -1000.0), &RenderStyle::default());
        assert_eq!(s.last_dot(), Some(Point::new(1200.0, -800.0)));
    }

    #[test]
    fn non_positive_grid_spacing_draws_no_grid() {
        let mut s = surface();
        let style = RenderStyle {
            grid_spacing: 0.0,
            ..RenderStyle::default()
        };
        render(&mut s, Vector::ZERO, &style);
        assert!(!s
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Line { color, .. } if color == "#363636")));
    }
}
