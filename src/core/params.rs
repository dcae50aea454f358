use super::constants::*;

/// Which pair scan the frame uses to find connections.
///
/// Both produce the same set of segments; `Grid` only skips pairs that are
/// provably out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionScan {
    Pairwise,
    Grid,
}

/// Every tunable of the field in one place.
///
/// `Default` reproduces the constants in [`super::constants`]; tests build
/// their own to switch individual forces off.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub particle_count: usize,

    pub return_force: f32,
    pub wave_speed: f32,
    pub wave_amplitude: f32,
    pub friction: f32,

    pub mouse_radius: f32,
    pub mouse_force: f32,

    pub attractor_speed: f32,
    pub attractor_radius: f32,
    pub attractor_force: f32,

    pub pulse_interval: u64,
    pub pulse_speed: f32,
    pub pulse_speed_jitter: f32,
    pub pulse_max_radius: (f32, f32),
    pub pulse_strength: f32,
    pub pulse_ring_width: f32,

    pub flow_speed: f32,
    pub flow_strength: f32,
    pub flow_cell_size: f32,

    pub connection_distance: f32,
    pub connection_scan: ConnectionScan,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            return_force: RETURN_FORCE,
            wave_speed: WAVE_SPEED,
            wave_amplitude: WAVE_AMPLITUDE,
            friction: FRICTION,
            mouse_radius: MOUSE_RADIUS,
            mouse_force: MOUSE_FORCE,
            attractor_speed: ATTRACTOR_SPEED,
            attractor_radius: ATTRACTOR_RADIUS,
            attractor_force: ATTRACTOR_FORCE,
            pulse_interval: PULSE_INTERVAL,
            pulse_speed: PULSE_SPEED,
            pulse_speed_jitter: PULSE_SPEED_JITTER,
            pulse_max_radius: (PULSE_MAX_RADIUS_MIN, PULSE_MAX_RADIUS_MAX),
            pulse_strength: PULSE_STRENGTH,
            pulse_ring_width: PULSE_RING_WIDTH,
            flow_speed: FLOW_SPEED,
            flow_strength: FLOW_STRENGTH,
            flow_cell_size: FLOW_CELL_SIZE,
            connection_distance: CONNECTION_DISTANCE,
            connection_scan: ConnectionScan::Grid,
        }
    }
}

impl FieldParams {
    /// Parameters with every external force switched off: only friction
    /// acts on a particle's velocity.
    pub fn inert() -> Self {
        Self {
            return_force: 0.0,
            attractor_force: 0.0,
            pulse_strength: 0.0,
            flow_strength: 0.0,
            mouse_force: 0.0,
            ..Self::default()
        }
    }
}
