// Host-side tests for connection opacity and the two pair scans.

use glam::Vec2;
use particle_field::core::connections::{connection_alpha, for_each_pair, ConnectionGrid};
use particle_field::core::constants::{CONNECTION_DISTANCE, CONNECTION_MAX_ALPHA};
use particle_field::core::{
    FieldParams, NullPainter, Particle, ParticleField, PointerState, SurfaceSize,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at(x: f32, y: f32) -> Particle {
    Particle::at_rest(Vec2::new(x, y), 1.0, 0.5, 0.5, 0.0)
}

#[test]
fn alpha_is_monotonic_and_zero_at_threshold() {
    let mut prev = connection_alpha(0.0, CONNECTION_DISTANCE);
    assert!((prev - CONNECTION_MAX_ALPHA).abs() < 1e-7);
    let mut d = 0.5;
    while d < CONNECTION_DISTANCE {
        let a = connection_alpha(d, CONNECTION_DISTANCE);
        assert!(a < prev, "alpha not decreasing at {d}");
        assert!(a > 0.0);
        prev = a;
        d += 0.5;
    }
    assert_eq!(connection_alpha(CONNECTION_DISTANCE, CONNECTION_DISTANCE), 0.0);
    assert_eq!(connection_alpha(CONNECTION_DISTANCE + 10.0, CONNECTION_DISTANCE), 0.0);
}

#[test]
fn pair_exactly_at_threshold_is_excluded() {
    let far = vec![at(0.0, 0.0), at(80.0, 0.0)];
    let mut n = 0;
    for_each_pair(&far, CONNECTION_DISTANCE, |_| n += 1);
    assert_eq!(n, 0);

    let near = vec![at(0.0, 0.0), at(79.0, 0.0)];
    let mut alphas = Vec::new();
    for_each_pair(&near, CONNECTION_DISTANCE, |s| alphas.push(s.alpha));
    assert_eq!(alphas.len(), 1);
    assert!(alphas[0] > 0.0);
    assert!((alphas[0] - (1.0 - 79.0 / 80.0) * CONNECTION_MAX_ALPHA).abs() < 1e-7);
}

fn sorted_pairs_reference(ps: &[Particle]) -> Vec<(usize, usize, f32)> {
    let mut out = Vec::new();
    for_each_pair(ps, CONNECTION_DISTANCE, |s| out.push((s.i, s.j, s.alpha)));
    out.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    out
}

fn sorted_pairs_grid(grid: &mut ConnectionGrid, ps: &[Particle]) -> Vec<(usize, usize, f32)> {
    let mut out = Vec::new();
    grid.for_each_pair(ps, CONNECTION_DISTANCE, |s| {
        assert!(s.i < s.j);
        out.push((s.i, s.j, s.alpha))
    });
    out.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    out
}

#[test]
fn grid_scan_matches_reference_scan() {
    let mut f = ParticleField::new(FieldParams::default(), StdRng::seed_from_u64(21));
    f.resize(SurfaceSize::new(1000.0, 800.0));
    let mut grid = ConnectionGrid::new();

    let fresh = sorted_pairs_reference(f.particles());
    assert!(!fresh.is_empty());
    assert_eq!(fresh, sorted_pairs_grid(&mut grid, f.particles()));

    // after drifting, some particles sit outside the surface; reuse the grid
    let mut pointer = PointerState::default();
    pointer.move_to(Vec2::new(10.0, 10.0));
    for _ in 0..120 {
        f.tick(&pointer, &mut NullPainter);
    }
    let drifted = sorted_pairs_reference(f.particles());
    assert_eq!(drifted, sorted_pairs_grid(&mut grid, f.particles()));
}

#[test]
fn grid_handles_negative_coordinates() {
    let ps = vec![at(-10.0, -10.0), at(10.0, 10.0), at(-200.0, 5.0), at(-150.0, 5.0)];
    let mut grid = ConnectionGrid::new();
    assert_eq!(sorted_pairs_reference(&ps), sorted_pairs_grid(&mut grid, &ps));
    assert_eq!(sorted_pairs_reference(&ps).len(), 2);
}
