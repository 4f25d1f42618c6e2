use glam::Vec3;

use tabletop_sim::assets::MeshData;
use tabletop_sim::config::GameSettings;
use tabletop_sim::game::{MazeBall, MazeMenu, MazeMode, MenuOutcome, SetupError, TiltKey};

/// Minimal board: one floor quad, enough for the collision pipeline.
fn flat_board(name: &str) -> MeshData {
    let half = 5.0;
    MeshData::new(
        name,
        vec![
            [
                Vec3::new(-half, 0.0, -half),
                Vec3::new(half, 0.0, -half),
                Vec3::new(half, 0.0, half),
            ],
            [
                Vec3::new(-half, 0.0, -half),
                Vec3::new(half, 0.0, half),
                Vec3::new(-half, 0.0, half),
            ],
        ],
    )
}

fn new_game() -> MazeBall {
    MazeBall::new(
        &flat_board("maze1"),
        &flat_board("maze2"),
        &GameSettings::default(),
    )
    .expect("setup")
}

#[test]
fn degenerate_board_geometry_aborts_setup() {
    let err = MazeBall::new(
        &MeshData::new("maze1", Vec::new()),
        &flat_board("maze2"),
        &GameSettings::default(),
    );
    assert!(matches!(err, Err(SetupError::Asset(_))));
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut game = new_game();
    let before = game.world().translation(game.ball_handle()).unwrap();

    game.update(0.0);
    game.update(-0.5);

    assert_eq!(game.world().translation(game.ball_handle()).unwrap(), before);
    assert_eq!(game.state().elapsed, 0.0);
}

#[test]
fn reaching_the_goal_corner_wins_and_latches() {
    let mut game = new_game();
    let ball = game.ball_handle();
    game.world_mut().set_translation(ball, Vec3::new(-4.5, 0.5, 4.5));
    game.world_mut().set_linear_velocity(ball, Vec3::ZERO);

    game.update(1e-4);
    assert!(game.state().won);

    // Ball leaves the goal region: the win sticks.
    game.world_mut().set_translation(ball, Vec3::new(0.0, 0.5, 0.0));
    game.world_mut().set_linear_velocity(ball, Vec3::ZERO);
    game.update(1e-4);
    assert!(game.state().won);
}

#[test]
fn near_misses_do_not_win() {
    let mut game = new_game();
    let ball = game.ball_handle();

    for pos in [Vec3::new(-4.5, 0.5, 4.0), Vec3::new(-4.0, 0.5, 4.5)] {
        game.world_mut().set_translation(ball, pos);
        game.world_mut().set_linear_velocity(ball, Vec3::ZERO);
        game.update(1e-4);
        assert!(!game.state().won, "won at {pos:?}");
    }
}

#[test]
fn best_time_records_the_fastest_win() {
    let mut game = new_game();
    let ball = game.ball_handle();

    // Slow first run.
    for _ in 0..50 {
        game.update(0.1);
    }
    game.world_mut().set_translation(ball, Vec3::new(-4.5, 0.5, 4.5));
    game.update(1e-4);
    assert!(game.state().won);
    let first = game.state().best_time.expect("best time after win");
    assert!(first >= 5.0);

    // Faster second run.
    game.apply_menu(MazeMenu::Restart);
    assert!(!game.state().won);
    assert_eq!(game.state().elapsed, 0.0);
    game.world_mut().set_translation(ball, Vec3::new(-4.5, 0.5, 4.5));
    game.world_mut().set_linear_velocity(ball, Vec3::ZERO);
    game.update(1e-4);
    let second = game.state().best_time.expect("best time after second win");
    assert!(second < first);

    // A later, slower reading never overwrites the record.
    for _ in 0..100 {
        game.update(0.1);
    }
    assert_eq!(game.state().best_time, Some(second));
}

#[test]
fn restart_resets_ball_tilt_and_timer() {
    let mut game = new_game();
    for _ in 0..20 {
        game.tilt_key(TiltKey::PitchUp);
        game.tilt_key(TiltKey::RollRight);
        game.update(0.05);
    }
    assert!(game.state().elapsed > 0.0);

    game.apply_menu(MazeMenu::Restart);

    assert_eq!(game.tilt(), (0.0, 0.0));
    assert_eq!(game.state().elapsed, 0.0);
    assert!(!game.state().won);
    let pos = game.world().translation(game.ball_handle()).unwrap();
    assert_eq!(pos, Vec3::new(4.5, 5.0, -4.2));
    assert_eq!(
        game.world().linear_velocity(game.ball_handle()).unwrap(),
        Vec3::ZERO
    );
}

#[test]
fn pause_freezes_the_simulation_and_timer() {
    let mut game = new_game();
    game.apply_menu(MazeMenu::TogglePause);
    let before = game.world().translation(game.ball_handle()).unwrap();

    for _ in 0..10 {
        game.update(0.1);
    }

    assert_eq!(game.world().translation(game.ball_handle()).unwrap(), before);
    assert_eq!(game.state().elapsed, 0.0);

    // Tilt keys are also gated while paused.
    game.tilt_key(TiltKey::PitchUp);
    assert_eq!(game.tilt(), (0.0, 0.0));
}

#[test]
fn demo_mode_drives_the_demo_board() {
    let mut game = new_game();
    game.apply_menu(MazeMenu::PlayDemo);
    assert_eq!(game.state().mode, MazeMode::Demo);

    game.tilt_key(TiltKey::PitchUp);
    // The main board's tilt is untouched in demo mode.
    assert_eq!(game.tilt(), (0.0, 0.0));
}

#[test]
fn menu_toggles_and_quit() {
    let mut game = new_game();

    game.apply_menu(MazeMenu::ToggleMouseControl);
    assert!(game.state().mouse_control);
    game.apply_menu(MazeMenu::ToggleFollowBall);
    assert!(game.state().follow_ball);
    assert_eq!(game.apply_menu(MazeMenu::Quit), MenuOutcome::Quit);
}

#[test]
fn mouse_tilt_only_when_enabled() {
    let mut game = new_game();
    game.mouse_moved(0.0, 0.0);
    game.mouse_moved(0.2, -0.1);
    assert_eq!(game.tilt(), (0.0, 0.0));

    game.apply_menu(MazeMenu::ToggleMouseControl);
    game.mouse_moved(0.4, -0.2);
    let (pitch, roll) = game.tilt();
    // roll += dx * 0.5, pitch -= dy * 0.5
    assert!((roll - 0.1).abs() < 1e-6);
    assert!((pitch - 0.05).abs() < 1e-6);
}
