pub mod world;

pub use world::{BodyHandle, BodyShape, PhysicsWorld, WorldError};
