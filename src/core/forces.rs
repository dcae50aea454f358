// Force field evaluators. Each returns a velocity delta that the caller adds
// to the particle's velocity; none of them touch velocity or position
// directly, so simultaneous effects simply sum.

use super::constants::*;
use super::params::FieldParams;
use super::particle::{Particle, SurfaceSize};
use super::pointer::PointerState;
use super::pulse::PulseWave;
use glam::Vec2;
use std::f32::consts::PI;
use std::f64::consts::TAU;

/// Angle `frame * rate` wrapped into [0, 2π). The product is formed in f64
/// so the phase keeps advancing long after `frame` outgrows f32 precision.
#[inline]
pub fn phase(frame: u64, rate: f64) -> f32 {
    (frame as f64 * rate).rem_euclid(TAU) as f32
}

/// Per-frame values shared by every particle in a tick. Every angle is
/// already wrapped by [`phase`].
#[derive(Clone, Copy, Debug)]
pub struct FrameForces {
    /// Wave angles for the x and y axes.
    pub wave: Vec2,
    pub twinkle: f32,
    pub attractor: Vec2,
    /// Flow field phase offsets for the x and y terms.
    pub flow: Vec2,
}

impl FrameForces {
    pub fn at(frame: u64, size: SurfaceSize, params: &FieldParams) -> Self {
        let wave = params.wave_speed as f64;
        let flow = params.flow_speed as f64;
        Self {
            wave: Vec2::new(phase(frame, wave), phase(frame, wave * WAVE_Y_RATE as f64)),
            twinkle: phase(frame, TWINKLE_RATE as f64),
            attractor: attractor_position(frame, size, params),
            flow: Vec2::new(phase(frame, flow), phase(frame, flow * FLOW_Y_PHASE_RATE as f64)),
        }
    }
}

/// Where the particle's spring is pulling it this frame: its anchor plus a
/// phase-shifted oscillation.
#[inline]
pub fn wave_target(p: &Particle, wave: Vec2, params: &FieldParams) -> Vec2 {
    let offset = Vec2::new(
        (wave.x + p.phase).sin() * params.wave_amplitude * WAVE_X_SCALE,
        (wave.y + p.phase).cos() * params.wave_amplitude * WAVE_Y_SCALE,
    );
    p.base + offset
}

#[inline]
pub fn wave_return(p: &Particle, wave: Vec2, params: &FieldParams) -> Vec2 {
    (wave_target(p, wave, params) - p.pos) * params.return_force
}

pub fn attractor_position(frame: u64, size: SurfaceSize, params: &FieldParams) -> Vec2 {
    let speed = params.attractor_speed as f64;
    let wx = phase(frame, speed);
    let wy = phase(frame, speed * ATTRACTOR_Y_RATE as f64);
    Vec2::new(
        size.width * 0.5 + wx.sin() * size.width * ATTRACTOR_ORBIT,
        size.height * 0.5 + wy.cos() * size.height * ATTRACTOR_ORBIT,
    )
}

pub fn attractor_pull(pos: Vec2, attractor: Vec2, params: &FieldParams) -> Vec2 {
    let d = attractor - pos;
    let dist = d.length();
    if dist <= 0.0 || dist >= params.attractor_radius {
        return Vec2::ZERO;
    }
    let force = (1.0 - dist / params.attractor_radius) * params.attractor_force;
    d / dist * force
}

/// What a single pulse does to a particle it overlaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseHit {
    pub delta: Vec2,
    pub brighten: f32,
}

pub fn pulse_push(pos: Vec2, pulse: &PulseWave, params: &FieldParams) -> Option<PulseHit> {
    let d = pos - pulse.origin;
    let dist = d.length();
    let ring_dist = (dist - pulse.radius).abs();
    if ring_dist >= params.pulse_ring_width {
        return None;
    }
    let falloff = (1.0 - ring_dist / params.pulse_ring_width) * pulse.life();
    // at the origin there is no direction to push along, but the ring
    // still lights the particle
    let delta = if dist > 0.0 {
        d / dist * falloff * pulse.strength
    } else {
        Vec2::ZERO
    };
    Some(PulseHit {
        delta,
        brighten: falloff * PULSE_BRIGHTEN,
    })
}

/// Direction of the flow field at `pos` for the given phase pair, in radians.
#[inline]
pub fn flow_angle(pos: Vec2, flow: Vec2, params: &FieldParams) -> f32 {
    let s = pos / params.flow_cell_size;
    ((s.x + flow.x).sin() + (s.y - flow.y).cos()) * PI
}

#[inline]
pub fn flow_nudge(pos: Vec2, flow: Vec2, params: &FieldParams) -> Vec2 {
    Vec2::from_angle(flow_angle(pos, flow, params)) * params.flow_strength
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub delta: Vec2,
    /// 1 at the pointer, 0 at the edge of the influence radius.
    pub proximity: f32,
}

/// Radial push away from the pointer plus a smaller swirl around it.
pub fn pointer_repulsion(
    pos: Vec2,
    pointer: &PointerState,
    params: &FieldParams,
) -> Option<Repulsion> {
    if !pointer.active {
        return None;
    }
    let d = pos - pointer.position;
    let dist = d.length();
    if dist >= params.mouse_radius {
        return None;
    }
    if dist <= 0.0 {
        return Some(Repulsion {
            delta: Vec2::ZERO,
            proximity: 1.0,
        });
    }
    let proximity = 1.0 - dist / params.mouse_radius;
    let force = proximity * params.mouse_force;
    let radial = d / dist;
    Some(Repulsion {
        delta: radial * force * MOUSE_PUSH_GAIN + radial.perp() * force * MOUSE_SWIRL_GAIN,
        proximity,
    })
}
