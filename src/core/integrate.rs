use super::constants::*;
use super::particle::Particle;

/// Damp the accumulated velocity once, then move.
#[inline]
pub fn integrate(p: &mut Particle, friction: f32) {
    p.vel *= friction;
    p.pos += p.vel;
}

/// Move stored opacity a fixed fraction of the way back to rest.
#[inline]
pub fn relax_alpha(p: &mut Particle) {
    p.alpha += (p.base_alpha - p.alpha) * ALPHA_RELAX;
}

#[inline]
pub fn clamp_alpha(alpha: f32) -> f32 {
    alpha.clamp(ALPHA_FLOOR, ALPHA_CEIL)
}

/// Opacity to paint with: stored alpha plus a slow per-particle twinkle.
/// `twinkle` is the frame's wrapped twinkle angle.
#[inline]
pub fn paint_alpha(p: &Particle, twinkle: f32) -> f32 {
    let twinkle = (twinkle + p.phase).sin() * TWINKLE_AMPLITUDE;
    clamp_alpha(p.alpha + twinkle)
}
