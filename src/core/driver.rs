use super::field::ParticleField;
use super::paint::Painter;
use super::params::FieldParams;
use super::particle::SurfaceSize;
use super::pointer::PointerState;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Host-facing lifecycle around a [`ParticleField`]: mount, resize, input,
/// per-frame ticks and cancellation.
///
/// Once cancelled the driver ignores everything, so a frame callback that
/// was already queued by the host cannot paint or move anything.
pub struct FrameDriver<R> {
    field: ParticleField<R>,
    pointer: PointerState,
    cancelled: bool,
}

impl FrameDriver<StdRng> {
    /// Driver seeded from the platform's entropy source.
    pub fn from_entropy(params: FieldParams) -> Self {
        Self::new(params, StdRng::from_entropy())
    }
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(params: FieldParams, rng: R) -> Self {
        Self {
            field: ParticleField::new(params, rng),
            pointer: PointerState::default(),
            cancelled: false,
        }
    }

    /// First sizing: seed particles and paint the opaque background once.
    pub fn mount(&mut self, size: SurfaceSize, painter: &mut impl Painter) {
        if self.cancelled {
            return;
        }
        self.field.resize(size);
        painter.clear(size);
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        if self.cancelled {
            return;
        }
        self.field.resize(size);
    }

    pub fn pointer_move(&mut self, position: Vec2) {
        if !self.cancelled {
            self.pointer.move_to(position);
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.cancelled {
            self.pointer.release();
        }
    }

    pub fn touch_move(&mut self, contacts: &[Vec2]) {
        if !self.cancelled {
            self.pointer.touch(contacts);
        }
    }

    pub fn touch_end(&mut self) {
        if !self.cancelled {
            self.pointer.release();
        }
    }

    /// Run one tick. Returns `false` (and does nothing) once cancelled.
    pub fn frame(&mut self, painter: &mut impl Painter) -> bool {
        if self.cancelled {
            return false;
        }
        let pointer = self.pointer;
        self.field.tick(&pointer, painter);
        true
    }

    /// Stop for good. Returns `true` only for the call that actually
    /// cancelled; repeated calls are no-ops.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        log::info!("[driver] cancelled after {} frames", self.field.frame());
        true
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[inline]
    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }
}
