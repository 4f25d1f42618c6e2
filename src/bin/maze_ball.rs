use anyhow::Result;
use glam::Vec3;
use tracing::info;

use tabletop_sim::assets::MeshData;
use tabletop_sim::config::{load_settings, GameSettings};
use tabletop_sim::game::{MazeBall, MazeMenu, TiltKey};
use tabletop_sim::utils::logging::init_logging;
use tabletop_sim::FrameClock;

/// Stand-in for the model-loading collaborator: a 10x10 board with a floor
/// and four rim walls, as triangle soup.
fn board_mesh(name: &str) -> MeshData {
    let half = 5.0;
    let wall = 0.5;
    let mut triangles = Vec::new();

    let mut quad = |a: Vec3, b: Vec3, c: Vec3, d: Vec3| {
        triangles.push([a, b, c]);
        triangles.push([a, c, d]);
    };

    // Floor
    quad(
        Vec3::new(-half, 0.0, -half),
        Vec3::new(half, 0.0, -half),
        Vec3::new(half, 0.0, half),
        Vec3::new(-half, 0.0, half),
    );
    // Rim walls
    for (dir, sign) in [(Vec3::X, 1.0f32), (Vec3::X, -1.0), (Vec3::Z, 1.0), (Vec3::Z, -1.0)] {
        let n = dir * sign;
        let t = if dir == Vec3::X { Vec3::Z } else { Vec3::X };
        let base = n * half;
        quad(
            base - t * half,
            base + t * half,
            base + t * half + Vec3::Y * wall,
            base - t * half + Vec3::Y * wall,
        );
    }

    MeshData::new(name, triangles)
}

fn main() -> Result<()> {
    init_logging();
    info!("{} v{}", tabletop_sim::APP_NAME, tabletop_sim::VERSION);

    let settings = load_settings().unwrap_or_else(GameSettings::default);
    let board = board_mesh("maze1");
    let demo_board = board_mesh("maze2");
    let mut game = MazeBall::new(&board, &demo_board, &settings)?;
    let mut clock = FrameClock::new();

    game.apply_menu(MazeMenu::PlayGame);

    for frame in 0u32..900 {
        let dt = clock.dt();
        game.update(dt);

        // Lean the board toward the goal corner.
        if frame < 300 {
            game.tilt_key(TiltKey::RollRight);
            game.tilt_key(TiltKey::PitchUp);
        }

        if frame % 150 == 0 {
            let ball = game.world().translation(game.ball_handle());
            let (pitch, roll) = game.tilt();
            info!(frame, ?ball, pitch, roll, elapsed = game.state().elapsed, "frame");
        }

        for object in game.scene().objects() {
            let _ = (&object.mesh_id, &object.texture_id, &object.transform);
        }

        std::thread::sleep(std::time::Duration::from_millis(4));
    }

    let state = game.state();
    if state.won {
        info!(best = ?state.best_time, "maze solved");
    } else {
        info!(elapsed = state.elapsed, "time up, maze unsolved");
    }

    game.apply_menu(MazeMenu::Quit);
    Ok(())
}
