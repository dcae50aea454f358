use super::particle::SurfaceSize;
use glam::Vec2;

/// Drawing operations the frame needs from its host surface.
///
/// Coordinates are logical pixels; colours are fixed per primitive kind and
/// chosen by the implementor, only opacity varies per call.
pub trait Painter {
    /// Opaque fill with the background colour.
    fn clear(&mut self, size: SurfaceSize);
    /// Translucent background overlay that leaves short motion trails.
    fn fade(&mut self, size: SurfaceSize);
    fn particle(&mut self, center: Vec2, radius: f32, alpha: f32);
    fn connection(&mut self, a: Vec2, b: Vec2, alpha: f32);
    fn pulse_ring(&mut self, center: Vec2, radius: f32, alpha: f32);
}

/// Painter that draws nothing; useful for stepping the field headless.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullPainter;

impl Painter for NullPainter {
    fn clear(&mut self, _size: SurfaceSize) {}
    fn fade(&mut self, _size: SurfaceSize) {}
    fn particle(&mut self, _center: Vec2, _radius: f32, _alpha: f32) {}
    fn connection(&mut self, _a: Vec2, _b: Vec2, _alpha: f32) {}
    fn pulse_ring(&mut self, _center: Vec2, _radius: f32, _alpha: f32) {}
}
