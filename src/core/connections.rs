use super::constants::CONNECTION_MAX_ALPHA;
use super::particle::Particle;
use fnv::FnvHashMap;
use glam::Vec2;

/// Line opacity for two particles `dist` apart: fades linearly to exactly
/// zero at `max_dist`, and is zero beyond it.
#[inline]
pub fn connection_alpha(dist: f32, max_dist: f32) -> f32 {
    if dist < max_dist && max_dist > 0.0 {
        (1.0 - dist / max_dist) * CONNECTION_MAX_ALPHA
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub i: usize,
    pub j: usize,
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

#[inline]
fn segment(particles: &[Particle], i: usize, j: usize, max_dist: f32) -> Option<Segment> {
    let a = particles[i].pos;
    let b = particles[j].pos;
    let dist = a.distance(b);
    // coincident pairs have no direction to draw along
    if dist <= 0.0 {
        return None;
    }
    let alpha = connection_alpha(dist, max_dist);
    (alpha > 0.0).then_some(Segment { i, j, a, b, alpha })
}

/// Reference scan: every unordered pair, O(n²).
pub fn for_each_pair(particles: &[Particle], max_dist: f32, mut f: impl FnMut(Segment)) {
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if let Some(s) = segment(particles, i, j, max_dist) {
                f(s);
            }
        }
    }
}

/// Uniform bucket grid with cell size equal to the connection distance, so
/// any pair in range lies in the same or an adjacent cell.
///
/// Buckets are kept between frames to reuse their allocations.
#[derive(Default)]
pub struct ConnectionGrid {
    cells: FnvHashMap<(i32, i32), Vec<usize>>,
    cell_of: Vec<(i32, i32)>,
}

impl ConnectionGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn rebuild(&mut self, particles: &[Particle], cell: f32) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        self.cell_of.clear();
        for (i, p) in particles.iter().enumerate() {
            let key = (
                (p.pos.x / cell).floor() as i32,
                (p.pos.y / cell).floor() as i32,
            );
            self.cell_of.push(key);
            self.cells.entry(key).or_default().push(i);
        }
        // particles drift, so drop buckets nobody landed in this frame
        self.cells.retain(|_, bucket| !bucket.is_empty());
    }

    /// Visit the same segments as [`for_each_pair`], each once with `i < j`.
    /// Order of visits differs from the reference scan.
    pub fn for_each_pair(
        &mut self,
        particles: &[Particle],
        max_dist: f32,
        mut f: impl FnMut(Segment),
    ) {
        if max_dist <= 0.0 || !max_dist.is_finite() {
            return;
        }
        self.rebuild(particles, max_dist);
        for i in 0..particles.len() {
            let (cx, cy) = self.cell_of[i];
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &j in bucket {
                        if j <= i {
                            continue;
                        }
                        if let Some(s) = segment(particles, i, j, max_dist) {
                            f(s);
                        }
                    }
                }
            }
        }
    }
}
