use anyhow::Result;
use tracing::info;

use tabletop_sim::config::{load_settings, GameSettings};
use tabletop_sim::game::{AirHockey, ArrowKey, HockeyMenu, MenuOutcome};
use tabletop_sim::utils::logging::init_logging;
use tabletop_sim::FrameClock;

/// Headless air-hockey host: drives the frame loop and feeds scripted input
/// where a windowing layer would normally deliver events.
fn main() -> Result<()> {
    init_logging();
    info!("{} v{}", tabletop_sim::APP_NAME, tabletop_sim::VERSION);

    let settings = load_settings().unwrap_or_else(GameSettings::default);
    let mut game = AirHockey::new(&settings);
    let mut clock = FrameClock::new();

    game.apply_menu(HockeyMenu::Start);
    game.apply_menu(HockeyMenu::ToggleAi);

    let mut cursor = (0.0f32, 0.0f32);
    for frame in 0u32..600 {
        let dt = clock.dt();
        game.update(dt);

        // Wiggle the player paddle the way a mouse would.
        cursor.0 = (frame as f32 * 0.05).sin() * 0.4;
        cursor.1 = (frame as f32 * 0.03).cos() * 0.4;
        game.mouse_moved(cursor.0, cursor.1);

        if frame % 120 == 60 {
            game.arrow_pressed(ArrowKey::Up);
        }

        if frame % 100 == 0 {
            let puck = game.world().translation(game.puck_handle());
            info!(frame, ?puck, "frame");
        }

        // Render pass stand-in: the host would draw each object here.
        for object in game.scene().objects() {
            let _ = (&object.mesh_id, &object.texture_id, &object.transform);
        }

        std::thread::sleep(std::time::Duration::from_millis(4));
    }

    let state = game.state();
    info!(
        p1 = state.scores.player1,
        p2 = state.scores.player2,
        "final score"
    );

    match game.apply_menu(HockeyMenu::Quit) {
        MenuOutcome::Quit => info!("quit"),
        MenuOutcome::Continue => {}
    }
    Ok(())
}
