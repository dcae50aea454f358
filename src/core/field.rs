use super::connections::{self, ConnectionGrid};
use super::constants::{ALPHA_CEIL, MOUSE_BRIGHTEN, PULSE_RING_ALPHA};
use super::forces::{self, FrameForces};
use super::integrate::{integrate, paint_alpha, relax_alpha};
use super::paint::Painter;
use super::params::{ConnectionScan, FieldParams};
use super::particle::{Particle, ParticleStore, SurfaceSize};
use super::pointer::PointerState;
use super::pulse::{PulseSet, PulseWave};
use glam::Vec2;
use rand::Rng;

/// The whole simulation: particles, live pulses and the frame counter.
///
/// `R` is the random source used for seeding particles and placing pulses;
/// tests pass a seeded `StdRng`.
pub struct ParticleField<R> {
    params: FieldParams,
    rng: R,
    store: ParticleStore,
    pulses: PulseSet,
    grid: ConnectionGrid,
    frame: u64,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(params: FieldParams, rng: R) -> Self {
        Self {
            params,
            rng,
            store: ParticleStore::default(),
            pulses: PulseSet::default(),
            grid: ConnectionGrid::new(),
            frame: 0,
        }
    }

    /// Reseed every particle for a new surface size. In-flight motion is
    /// discarded; pulses and the frame counter carry on.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.store = ParticleStore::initialize(size, self.params.particle_count, &mut self.rng);
        log::debug!(
            "[field] resize {:.0}x{:.0} particles={}",
            size.width,
            size.height,
            self.store.len()
        );
    }

    pub fn replace_store(&mut self, store: ParticleStore) {
        self.store = store;
    }

    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.store.particles_mut()
    }

    #[inline]
    pub fn pulses(&self) -> &[PulseWave] {
        self.pulses.as_slice()
    }

    /// Frames ticked so far; the next tick runs at this `t`.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn attractor(&self) -> Vec2 {
        forces::attractor_position(self.frame, self.store.size(), &self.params)
    }

    /// Advance the simulation one frame and paint it.
    pub fn tick(&mut self, pointer: &PointerState, painter: &mut impl Painter) {
        let size = self.store.size();
        painter.fade(size);

        let t = self.frame;
        let frame_forces = FrameForces::at(t, size, &self.params);

        self.pulses.maybe_spawn(t, size, &self.params, &mut self.rng);
        self.pulses.advance();

        for p in self.store.particles_mut() {
            step_particle(
                p,
                &frame_forces,
                self.pulses.as_slice(),
                pointer,
                &self.params,
            );
            painter.particle(p.pos, p.size, paint_alpha(p, frame_forces.twinkle));
        }

        let max_dist = self.params.connection_distance;
        let particles = self.store.particles();
        let mut draw = |s: connections::Segment| painter.connection(s.a, s.b, s.alpha);
        match self.params.connection_scan {
            ConnectionScan::Pairwise => connections::for_each_pair(particles, max_dist, &mut draw),
            ConnectionScan::Grid => self.grid.for_each_pair(particles, max_dist, &mut draw),
        }

        for ring in self.pulses.as_slice() {
            painter.pulse_ring(ring.origin, ring.radius, ring.life() * PULSE_RING_ALPHA);
        }

        self.frame += 1;
    }
}

/// Sum every force on one particle, update its opacity, then integrate.
pub fn step_particle(
    p: &mut Particle,
    frame: &FrameForces,
    pulses: &[PulseWave],
    pointer: &PointerState,
    params: &FieldParams,
) {
    let mut dv = forces::wave_return(p, frame.wave, params);
    dv += forces::attractor_pull(p.pos, frame.attractor, params);

    for pulse in pulses {
        if let Some(hit) = forces::pulse_push(p.pos, pulse, params) {
            dv += hit.delta;
            p.alpha = (p.alpha + hit.brighten).min(ALPHA_CEIL);
        }
    }

    dv += forces::flow_nudge(p.pos, frame.flow, params);

    match forces::pointer_repulsion(p.pos, pointer, params) {
        Some(r) => {
            dv += r.delta;
            p.alpha = (p.base_alpha + r.proximity * MOUSE_BRIGHTEN).min(ALPHA_CEIL);
        }
        None => relax_alpha(p),
    }

    p.vel += dv;
    integrate(p, params.friction);
}
