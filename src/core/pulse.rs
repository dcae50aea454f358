use super::constants::PULSE_SPAWN_MARGIN;
use super::params::FieldParams;
use super::particle::SurfaceSize;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// An expanding ring that pushes particles outward as it passes them.
#[derive(Clone, Debug, PartialEq)]
pub struct PulseWave {
    pub origin: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub strength: f32,
    pub speed: f32,
}

impl PulseWave {
    /// Remaining lifetime in [0, 1]; 1 at spawn, 0 at `max_radius`.
    #[inline]
    pub fn life(&self) -> f32 {
        if self.max_radius > 0.0 {
            (1.0 - self.radius / self.max_radius).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.radius > self.max_radius
    }
}

/// Live pulses. Rarely more than three coexist at the default cadence.
#[derive(Clone, Debug, Default)]
pub struct PulseSet {
    live: SmallVec<[PulseWave; 4]>,
}

impl PulseSet {
    #[inline]
    pub fn as_slice(&self) -> &[PulseWave] {
        &self.live
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn push(&mut self, pulse: PulseWave) {
        self.live.push(pulse);
    }

    /// Spawn a pulse when `frame` lands on the cadence. Returns the new pulse.
    pub fn maybe_spawn(
        &mut self,
        frame: u64,
        size: SurfaceSize,
        params: &FieldParams,
        rng: &mut impl Rng,
    ) -> Option<&PulseWave> {
        if params.pulse_interval == 0 || frame % params.pulse_interval != 0 {
            return None;
        }
        let pulse = spawn(size, params, rng);
        log::debug!(
            "[pulse] spawn frame={} at ({:.0},{:.0}) max_r={:.0} speed={:.2}",
            frame,
            pulse.origin.x,
            pulse.origin.y,
            pulse.max_radius,
            pulse.speed
        );
        self.live.push(pulse);
        self.live.last()
    }

    /// Grow every pulse and drop the ones that outgrew their cap this frame.
    pub fn advance(&mut self) {
        for p in self.live.iter_mut() {
            p.radius += p.speed;
        }
        self.live.retain(|p| !p.is_expired());
    }
}

fn spawn(size: SurfaceSize, params: &FieldParams, rng: &mut impl Rng) -> PulseWave {
    let span = 1.0 - 2.0 * PULSE_SPAWN_MARGIN;
    let origin = Vec2::new(
        size.width * (PULSE_SPAWN_MARGIN + rng.gen::<f32>() * span),
        size.height * (PULSE_SPAWN_MARGIN + rng.gen::<f32>() * span),
    );
    let (lo, hi) = params.pulse_max_radius;
    let max_radius = lo + rng.gen::<f32>() * (hi - lo).max(0.0);
    let jitter = params.pulse_speed_jitter;
    let speed = (params.pulse_speed - jitter + rng.gen::<f32>() * 2.0 * jitter).max(0.0);
    PulseWave {
        origin,
        radius: 0.0,
        max_radius,
        strength: params.pulse_strength,
        speed,
    }
}
