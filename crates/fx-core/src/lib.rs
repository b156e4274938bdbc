//! Platform-free logic for ambient-fx.
//!
//! Nothing here touches the DOM or the GPU. The web frontend feeds events in
//! and draws what comes out; the same types run under host tests.

pub mod animation;
pub mod burst;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod particle;
pub mod sampling;

pub use animation::*;
pub use burst::*;
pub use camera::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use particle::*;
