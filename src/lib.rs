// tabletop-sim: rigid-body tabletop game demos (air hockey, maze ball)

pub mod assets;
pub mod config;
pub mod game;
pub mod physics;
pub mod scene;
pub mod sim;
pub mod utils;

// Re-export commonly used types for convenience
pub use physics::{BodyHandle, BodyShape, PhysicsWorld, WorldError};
pub use scene::{Scene, SceneObject, Transform};
pub use sim::FrameClock;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
