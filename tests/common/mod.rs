// Shared helpers for the host-side tests.

#![allow(dead_code)]

use glam::Vec2;
use particle_field::core::{Painter, SurfaceSize};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Fade,
    Particle { center: Vec2, radius: f32, alpha: f32 },
    Connection { a: Vec2, b: Vec2, alpha: f32 },
    Ring { center: Vec2, radius: f32, alpha: f32 },
}

/// Painter that records every call for later assertions.
#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<Call>,
}

impl RecordingPainter {
    pub fn rings(&self) -> Vec<(f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Ring { radius, alpha, .. } => Some((*radius, *alpha)),
                _ => None,
            })
            .collect()
    }

    pub fn count_particles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Particle { .. }))
            .count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, _size: SurfaceSize) {
        self.calls.push(Call::Clear);
    }
    fn fade(&mut self, _size: SurfaceSize) {
        self.calls.push(Call::Fade);
    }
    fn particle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.calls.push(Call::Particle { center, radius, alpha });
    }
    fn connection(&mut self, a: Vec2, b: Vec2, alpha: f32) {
        self.calls.push(Call::Connection { a, b, alpha });
    }
    fn pulse_ring(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.calls.push(Call::Ring { center, radius, alpha });
    }
}

/// Painter that only checks painted opacities stay in range. Cheap enough
/// for long runs at full particle count.
#[derive(Default)]
pub struct AlphaCheckPainter {
    pub particles: usize,
    pub connections: usize,
}

impl Painter for AlphaCheckPainter {
    fn clear(&mut self, _size: SurfaceSize) {}
    fn fade(&mut self, _size: SurfaceSize) {}
    fn particle(&mut self, _center: Vec2, _radius: f32, alpha: f32) {
        assert!((0.05..=1.0).contains(&alpha), "painted alpha {alpha}");
        self.particles += 1;
    }
    fn connection(&mut self, _a: Vec2, _b: Vec2, alpha: f32) {
        assert!(alpha > 0.0 && alpha <= 0.12, "connection alpha {alpha}");
        self.connections += 1;
    }
    fn pulse_ring(&mut self, _center: Vec2, _radius: f32, alpha: f32) {
        assert!((0.0..=0.08).contains(&alpha), "ring alpha {alpha}");
    }
}
