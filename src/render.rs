use crate::constants::*;
use crate::core::{Painter, SurfaceSize};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

// Style currently set on the context, so runs of the same primitive don't
// re-parse colour strings on every call.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pen {
    Particle,
    Connection,
    Ring,
}

/// [`Painter`] backed by a Canvas 2D context already scaled to logical px.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    pen: Option<Pen>,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, pen: None }
    }

    fn use_pen(&mut self, pen: Pen) {
        if self.pen == Some(pen) {
            return;
        }
        match pen {
            Pen::Particle => self.ctx.set_fill_style_str(PARTICLE_CSS),
            Pen::Connection => {
                self.ctx.set_stroke_style_str(CONNECTION_CSS);
                self.ctx.set_line_width(CONNECTION_LINE_WIDTH);
            }
            Pen::Ring => {
                self.ctx.set_stroke_style_str(PULSE_RING_CSS);
                self.ctx.set_line_width(PULSE_RING_LINE_WIDTH);
            }
        }
        self.pen = Some(pen);
    }

    fn fill_surface(&mut self, size: SurfaceSize, css: &str) {
        self.pen = None;
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(css);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: SurfaceSize) {
        self.fill_surface(size, BACKGROUND_CSS);
    }

    fn fade(&mut self, size: SurfaceSize) {
        self.fill_surface(size, FADE_CSS);
    }

    fn particle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.use_pen(Pen::Particle);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn connection(&mut self, a: Vec2, b: Vec2, alpha: f32) {
        self.use_pen(Pen::Connection);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.stroke();
    }

    fn pulse_ring(&mut self, center: Vec2, radius: f32, alpha: f32) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        self.use_pen(Pen::Ring);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.stroke();
    }
}
