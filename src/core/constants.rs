// Tuning constants for the particle field. All distances are logical (CSS)
// pixels and all rates are per frame unless the name says otherwise.

use std::f32::consts::PI;

// Particle store
pub const PARTICLE_COUNT: usize = 800;
pub const PARTICLE_MIN_SIZE: f32 = 1.0;
pub const PARTICLE_MAX_SIZE: f32 = 3.0;
pub const BASE_ALPHA_MIN: f32 = 0.2;
pub const BASE_ALPHA_MAX: f32 = 0.8;
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 2.0;
pub const PHASE_RANGE: f32 = 2.0 * PI;

// Wave-return spring
pub const RETURN_FORCE: f32 = 0.015;
pub const WAVE_SPEED: f32 = 0.003;
pub const WAVE_AMPLITUDE: f32 = 30.0;
pub const WAVE_X_SCALE: f32 = 0.3; // fraction of amplitude on x
pub const WAVE_Y_SCALE: f32 = 0.5; // fraction of amplitude on y
pub const WAVE_Y_RATE: f32 = 0.7; // y oscillates slower than x

// Integrator
pub const FRICTION: f32 = 0.92;

// Opacity
pub const ALPHA_FLOOR: f32 = 0.05;
pub const ALPHA_CEIL: f32 = 1.0;
pub const ALPHA_RELAX: f32 = 0.05; // fraction of the gap to base alpha closed per frame
pub const TWINKLE_RATE: f32 = 0.02;
pub const TWINKLE_AMPLITUDE: f32 = 0.15;

// Pointer repulsion
pub const MOUSE_RADIUS: f32 = 180.0;
pub const MOUSE_FORCE: f32 = 0.08;
pub const MOUSE_PUSH_GAIN: f32 = 8.0; // radial component
pub const MOUSE_SWIRL_GAIN: f32 = 2.0; // tangential component
pub const MOUSE_BRIGHTEN: f32 = 0.5;
pub const POINTER_PARKED: [f32; 2] = [-1000.0, -1000.0];

// Idle attractor (Lissajous path around the surface centre)
pub const ATTRACTOR_SPEED: f32 = 0.0008;
pub const ATTRACTOR_RADIUS: f32 = 250.0;
pub const ATTRACTOR_FORCE: f32 = 0.012;
pub const ATTRACTOR_ORBIT: f32 = 0.35; // fraction of width/height
pub const ATTRACTOR_Y_RATE: f32 = 0.7;

// Pulse waves
pub const PULSE_INTERVAL: u64 = 300; // frames between spawns
pub const PULSE_SPEED: f32 = 3.0;
pub const PULSE_SPEED_JITTER: f32 = 1.5; // +/- around PULSE_SPEED
pub const PULSE_MAX_RADIUS_MIN: f32 = 500.0;
pub const PULSE_MAX_RADIUS_MAX: f32 = 700.0;
pub const PULSE_STRENGTH: f32 = 0.6;
pub const PULSE_RING_WIDTH: f32 = 60.0;
pub const PULSE_BRIGHTEN: f32 = 0.4;
pub const PULSE_SPAWN_MARGIN: f32 = 0.2; // spawn inside the central 60% per axis
pub const PULSE_RING_ALPHA: f32 = 0.08;

// Flow field
pub const FLOW_SPEED: f32 = 0.001;
pub const FLOW_STRENGTH: f32 = 0.15;
pub const FLOW_CELL_SIZE: f32 = 150.0;
pub const FLOW_Y_PHASE_RATE: f32 = 0.7;

// Connections
pub const CONNECTION_DISTANCE: f32 = 80.0;
pub const CONNECTION_MAX_ALPHA: f32 = 0.12;

