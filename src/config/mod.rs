pub mod settings;

// Re-export commonly used types
pub use settings::{
    load_settings, save_settings, GameSettings, HockeySettings, MazeSettings,
};
