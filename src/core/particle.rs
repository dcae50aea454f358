use super::constants::*;
use glam::Vec2;
use rand::Rng;

/// Logical (CSS pixel) size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Backing-store pixels per logical pixel for a reported device pixel
    /// ratio. Unknown (zero or negative) means 1; zoomed-out ratios below 1
    /// are kept.
    #[inline]
    pub fn backing_scale(reported: f64) -> f64 {
        if reported > 0.0 {
            reported
        } else {
            1.0
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Home position; fixed for the particle's lifetime.
    pub base: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
    pub base_alpha: f32,
    pub phase: f32,
    pub speed: f32,
}

impl Particle {
    /// A particle resting at `base` with zero velocity.
    pub fn at_rest(base: Vec2, size: f32, alpha: f32, base_alpha: f32, phase: f32) -> Self {
        Self {
            pos: base,
            base,
            vel: Vec2::ZERO,
            size,
            alpha,
            base_alpha,
            phase,
            speed: 1.0,
        }
    }

    fn random(size: SurfaceSize, rng: &mut impl Rng) -> Self {
        let base = Vec2::new(
            uniform(rng, 0.0, size.width),
            uniform(rng, 0.0, size.height),
        );
        Self {
            pos: base,
            base,
            vel: Vec2::ZERO,
            size: rng.gen_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
            alpha: rng.gen_range(BASE_ALPHA_MIN..=BASE_ALPHA_MAX),
            base_alpha: rng.gen_range(BASE_ALPHA_MIN..=BASE_ALPHA_MAX),
            phase: rng.gen_range(0.0..PHASE_RANGE),
            speed: rng.gen_range(SPEED_MIN..=SPEED_MAX),
        }
    }
}

// Half-open draw that tolerates an empty range (zero-sized surface).
#[inline]
fn uniform(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// The particle collection together with the surface it was seeded for.
///
/// Dimensions and particles are only ever replaced as a pair.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    size: SurfaceSize,
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn initialize(size: SurfaceSize, count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count).map(|_| Particle::random(size, rng)).collect();
        Self { size, particles }
    }

    /// Build a store from hand-placed particles.
    pub fn from_particles(size: SurfaceSize, particles: Vec<Particle>) -> Self {
        Self { size, particles }
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
