// Platform-independent particle simulation. Nothing in here touches the
// browser; the wasm front-end paints through `paint::Painter`.

pub mod connections;
pub mod constants;
pub mod driver;
pub mod field;
pub mod forces;
pub mod integrate;
pub mod paint;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod pulse;

pub use driver::FrameDriver;
pub use field::ParticleField;
pub use paint::{NullPainter, Painter};
pub use params::{ConnectionScan, FieldParams};
pub use particle::{Particle, ParticleStore, SurfaceSize};
pub use pointer::PointerState;
pub use pulse::{PulseSet, PulseWave};
