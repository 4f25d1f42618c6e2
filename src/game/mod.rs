pub mod ai;
pub mod air_hockey;
pub mod input;
pub mod maze;
pub mod menu;

use thiserror::Error;

use crate::assets::AssetError;
use crate::physics::WorldError;

pub use ai::{AiController, Difficulty};
pub use air_hockey::{AirHockey, CameraView, HockeyState, Scores};
pub use input::{ArrowKey, InputState, PaddleKey, TiltKey};
pub use maze::{MazeBall, MazeMode, MazeState};
pub use menu::{HockeyMenu, MazeMenu, MenuOutcome};

/// Startup failure. Setup is all-or-nothing: if any collaborator-supplied
/// asset or the world construction is bad, nothing starts.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}
