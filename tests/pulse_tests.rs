// Host-side tests for pulse spawning, growth, expiry and push.

mod common;

use common::RecordingPainter;
use glam::Vec2;
use particle_field::core::constants::{PULSE_INTERVAL, PULSE_RING_ALPHA};
use particle_field::core::forces::pulse_push;
use particle_field::core::{
    FieldParams, NullPainter, ParticleField, PointerState, PulseSet, PulseWave, SurfaceSize,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pulse(origin: Vec2, max_radius: f32, speed: f32) -> PulseWave {
    PulseWave {
        origin,
        radius: 0.0,
        max_radius,
        strength: 0.6,
        speed,
    }
}

#[test]
fn first_tick_spawns_one_pulse_in_central_region() {
    for seed in 0..25 {
        let mut f = ParticleField::new(FieldParams::default(), StdRng::seed_from_u64(seed));
        f.resize(SurfaceSize::new(1000.0, 800.0));
        assert_eq!(f.frame(), 0);
        f.tick(&PointerState::default(), &mut NullPainter);

        assert_eq!(f.pulses().len(), 1);
        let p = &f.pulses()[0];
        assert!((200.0..=800.0).contains(&p.origin.x), "x {}", p.origin.x);
        assert!((160.0..=640.0).contains(&p.origin.y), "y {}", p.origin.y);
        assert!(p.radius > 0.0 && p.radius <= 4.5);

        // no second spawn until the cadence comes round again
        f.tick(&PointerState::default(), &mut NullPainter);
        assert_eq!(f.pulses().len(), 1);
    }
}

#[test]
fn pulses_spawn_on_every_interval() {
    let mut f = ParticleField::new(FieldParams::default(), StdRng::seed_from_u64(5));
    f.resize(SurfaceSize::new(800.0, 600.0));
    let mut spawned = 0;
    let mut max_live = 0;
    for _ in 0..(PULSE_INTERVAL * 3) {
        let frame = f.frame();
        f.tick(&PointerState::default(), &mut NullPainter);
        let newest = f.pulses().iter().filter(|p| p.radius <= p.speed).count();
        if frame % PULSE_INTERVAL == 0 {
            assert_eq!(newest, 1, "frame {frame}");
            spawned += 1;
        }
        max_live = max_live.max(f.pulses().len());
    }
    assert_eq!(spawned, 3);
    assert!(max_live <= 3, "live pulses {max_live}");
}

#[test]
fn radius_grows_until_removed_the_tick_it_overshoots() {
    let mut set = PulseSet::default();
    set.push(pulse(Vec2::ZERO, 10.0, 3.0));
    let mut radii = Vec::new();
    while !set.is_empty() {
        set.advance();
        if let Some(p) = set.as_slice().first() {
            assert!(p.radius <= p.max_radius);
            radii.push(p.radius);
        }
    }
    assert_eq!(radii, vec![3.0, 6.0, 9.0]);
}

#[test]
fn pulse_reaching_exactly_max_radius_lives_one_more_tick() {
    let mut set = PulseSet::default();
    set.push(pulse(Vec2::ZERO, 6.0, 3.0));
    set.advance();
    set.advance();
    assert_eq!(set.len(), 1);
    assert_eq!(set.as_slice()[0].radius, 6.0);
    set.advance();
    assert!(set.is_empty());
}

#[test]
fn radius_is_non_decreasing_inside_the_field() {
    let params = FieldParams {
        pulse_max_radius: (30.0, 40.0),
        ..FieldParams::default()
    };
    let mut f = ParticleField::new(params, StdRng::seed_from_u64(6));
    f.resize(SurfaceSize::new(400.0, 400.0));
    let mut last = 0.0;
    let mut gone_at = None;
    for tick in 0..40 {
        f.tick(&PointerState::default(), &mut NullPainter);
        match f.pulses().first() {
            Some(p) => {
                assert!(p.radius >= last);
                assert!(p.radius <= p.max_radius);
                last = p.radius;
            }
            None => {
                gone_at.get_or_insert(tick);
            }
        }
    }
    assert!(gone_at.is_some(), "pulse should have expired");
}

#[test]
fn push_is_outward_and_strongest_on_the_ring() {
    let params = FieldParams::default();
    let mut p = pulse(Vec2::new(100.0, 100.0), 600.0, 3.0);
    p.radius = 50.0;

    let on_ring = pulse_push(Vec2::new(150.0, 100.0), &p, &params).unwrap();
    let inside_band = pulse_push(Vec2::new(180.0, 100.0), &p, &params).unwrap();
    assert!(on_ring.delta.x > inside_band.delta.x);
    assert!(inside_band.delta.x > 0.0);
    assert!(on_ring.brighten > inside_band.brighten);

    let below = pulse_push(Vec2::new(100.0, 140.0), &p, &params).unwrap();
    assert!(below.delta.y > 0.0 && below.delta.x.abs() < 1e-6);

    assert!(pulse_push(Vec2::new(300.0, 100.0), &p, &params).is_none());

    // the origin is still inside this young ring's band: lit, not pushed
    let origin = pulse_push(Vec2::new(100.0, 100.0), &p, &params).unwrap();
    assert_eq!(origin.delta, Vec2::ZERO);
    assert!(origin.brighten > 0.0);
}

#[test]
fn ring_push_weakens_as_pulse_ages() {
    let params = FieldParams::default();
    let mut young = pulse(Vec2::ZERO, 600.0, 3.0);
    young.radius = 100.0;
    let mut old = young.clone();
    old.radius = 500.0;
    let a = pulse_push(Vec2::new(100.0, 0.0), &young, &params).unwrap();
    let b = pulse_push(Vec2::new(500.0, 0.0), &old, &params).unwrap();
    assert!(a.delta.length() > b.delta.length());
}

#[test]
fn rings_are_painted_fading_with_life() {
    let mut f = ParticleField::new(FieldParams::default(), StdRng::seed_from_u64(8));
    f.resize(SurfaceSize::new(500.0, 500.0));
    let mut first = RecordingPainter::default();
    f.tick(&PointerState::default(), &mut first);
    for _ in 0..100 {
        f.tick(&PointerState::default(), &mut NullPainter);
    }
    let mut later = RecordingPainter::default();
    f.tick(&PointerState::default(), &mut later);

    let (_, a0) = first.rings()[0];
    let (_, a1) = later.rings()[0];
    assert!(a0 <= PULSE_RING_ALPHA && a0 > 0.0);
    assert!(a1 < a0);
}
