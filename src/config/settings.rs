use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "settings.toml";

/// Tunables for the air-hockey table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HockeySettings {
    /// Gain applied to normalized cursor deltas; negative so the paddle
    /// follows the cursor on a camera looking down -z.
    pub mouse_gain: f32,
    /// 1 = easy, 2 = medium, 3 = hard.
    pub difficulty_level: i32,
    pub ai_enabled: bool,
}

impl Default for HockeySettings {
    fn default() -> Self {
        Self {
            mouse_gain: -20.0,
            difficulty_level: 1,
            ai_enabled: false,
        }
    }
}

/// Tunables for the maze board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSettings {
    /// Radians added per tilt keypress.
    pub tilt_rate: f32,
    /// Radians per unit of normalized cursor delta.
    pub mouse_tilt_gain: f32,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            tilt_rate: 0.005,
            mouse_tilt_gain: 0.5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub hockey: HockeySettings,
    #[serde(default)]
    pub maze: MazeSettings,
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "tabletop", "tabletop-sim")
        .map(|proj| proj.config_dir().join(CONFIG_FILE))
}

pub fn save_settings(settings: &GameSettings) -> std::io::Result<()> {
    if let Some(path) = config_path() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, toml)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<GameSettings> {
    if let Some(path) = config_path() {
        if let Ok(data) = fs::read_to_string(path) {
            if let Ok(settings) = toml::from_str::<GameSettings>(&data) {
                return Some(settings);
            }
        }
    }
    None
}
