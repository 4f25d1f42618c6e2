use glam::{Mat4, Vec3};
use tracing::{debug, info};

use crate::config::GameSettings;
use crate::game::ai::{AiController, Difficulty};
use crate::game::input::{ArrowKey, InputState, PaddleKey};
use crate::game::menu::{HockeyMenu, MenuOutcome};
use crate::physics::{BodyHandle, BodyShape, PhysicsWorld};
use crate::scene::{Scene, SceneObject};
use crate::sim::SOLVER_SUBSTEPS;

// Table geometry. The long axis is z; each paddle owns one half.
const GRAVITY: Vec3 = Vec3::new(0.0, -10.0, 0.0);
const GOAL_LINE_Z: f32 = 0.9;
const GOAL_HALF_WIDTH: f32 = 0.1;
/// z-impulse that shoves a paddle back into its own half.
const PADDLE_RETURN_IMPULSE: f32 = 10.0;
/// Kick that bounces the puck out of a goal mouth: x biased against the
/// puck's side, a hop in y, z back toward center.
const GOAL_BOUNCE: Vec3 = Vec3::new(0.5, 2.0, 0.5);

const PADDLE_SHAPE: BodyShape = BodyShape::Cylinder {
    half_height: 0.1,
    radius: 0.2,
};
const BODY_MASS: f32 = 2.0;
const PUCK_FRICTION: f32 = 0.1;
const DROP_POSITION: Vec3 = Vec3::new(-1.0, 15.0, 3.0);

/// Camera presets the host can render from; selected via the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraView {
    PlayerPerspective,
    Top,
    AngledSide,
}

impl CameraView {
    /// Eye position for the preset; all presets look at the table center.
    pub fn eye(self) -> Vec3 {
        match self {
            CameraView::PlayerPerspective => Vec3::new(0.0, 1.0, -2.0),
            CameraView::Top => Vec3::new(0.0, 3.5, -1.0),
            CameraView::AngledSide => Vec3::new(-2.0, 3.0, -2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub player1: u32,
    pub player2: u32,
}

/// All mutable game state, kept explicit so the scoring policy can be
/// exercised in isolation.
#[derive(Debug)]
pub struct HockeyState {
    pub scores: Scores,
    pub started: bool,
    pub paused: bool,
    pub ai_enabled: bool,
    pub difficulty: Difficulty,
    pub camera: CameraView,
}

impl Default for HockeyState {
    fn default() -> Self {
        Self {
            scores: Scores::default(),
            started: false,
            paused: false,
            ai_enabled: false,
            difficulty: Difficulty::Easy,
            camera: CameraView::PlayerPerspective,
        }
    }
}

/// The air-hockey table: physics world, scene objects, boundary and scoring
/// policy, input mapping, and the computer paddle's AI.
pub struct AirHockey {
    world: PhysicsWorld,
    scene: Scene,
    puck: BodyHandle,
    paddle_player: BodyHandle,
    paddle_computer: BodyHandle,
    state: HockeyState,
    ai: AiController,
    input: InputState,
    mouse_gain: f32,
    last_scored_step: Option<u64>,
}

impl AirHockey {
    pub fn new(settings: &GameSettings) -> Self {
        let mut world = PhysicsWorld::new(GRAVITY);

        // Table boundaries: floor plus four walls, as offset planes. The
        // playfield is x in (-0.65, 0.65), z in (-1.15, 1.15), floor y 0.2.
        world.add_static_plane(Vec3::new(0.0, 1.0, 0.0), 0.2);
        world.add_static_plane(Vec3::new(0.0, 0.0, 1.0), -1.15);
        world.add_static_plane(Vec3::new(0.0, 0.0, -1.0), -1.15);
        world.add_static_plane(Vec3::new(-1.0, 0.0, 0.0), -0.65);
        world.add_static_plane(Vec3::new(1.0, 0.0, 0.0), -0.65);

        let puck = world.add_dynamic_body(PADDLE_SHAPE, BODY_MASS, DROP_POSITION, PUCK_FRICTION, 0.0);
        let paddle_computer =
            world.add_dynamic_body(PADDLE_SHAPE, BODY_MASS, DROP_POSITION, 0.5, 0.0);
        let paddle_player =
            world.add_dynamic_body(PADDLE_SHAPE, BODY_MASS, DROP_POSITION, 0.5, 0.0);

        let mut scene = Scene::new();
        let mut table = SceneObject::new("table")
            .with_mesh("table")
            .with_texture("tableUV");
        table.transform = Mat4::from_rotation_y(90f32.to_radians());
        scene.add_object(table);
        scene.add_object(
            SceneObject::new("paddle_computer")
                .with_mesh("paddle")
                .with_texture("paddleUV")
                .with_body(paddle_computer),
        );
        scene.add_object(
            SceneObject::new("paddle_player")
                .with_mesh("paddle")
                .with_texture("paddleUV")
                .with_body(paddle_player),
        );
        scene.add_object(
            SceneObject::new("puck")
                .with_mesh("puck")
                .with_texture("puckUV")
                .with_body(puck),
        );

        let mut state = HockeyState::default();
        state.ai_enabled = settings.hockey.ai_enabled;
        state.difficulty =
            Difficulty::from_level(settings.hockey.difficulty_level).unwrap_or(Difficulty::Easy);

        debug!(bodies = world.body_count(), "air hockey world ready");

        Self {
            world,
            scene,
            puck,
            paddle_player,
            paddle_computer,
            state,
            ai: AiController::new(),
            input: InputState::new(),
            mouse_gain: settings.hockey.mouse_gain,
            last_scored_step: None,
        }
    }

    /// One frame: step physics, run the AI, refresh transforms, then enforce
    /// boundary and scoring policy. Impulses queued here land on the next
    /// step.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        if !self.state.paused {
            self.world.step(dt, SOLVER_SUBSTEPS);
        }

        if self.state.ai_enabled {
            let difficulty = self.state.difficulty;
            self.ai.update(difficulty, &mut self.world, self.paddle_computer);
        }

        self.scene.refresh_transforms(&self.world);
        self.enforce_paddle_halves();
        self.check_goal_lines();
    }

    /// Keep each paddle on its own half of the table. Enforced by impulse,
    /// not geometric clamp, so a paddle can overshoot for one frame before
    /// the correction lands.
    fn enforce_paddle_halves(&mut self) {
        if let Some(pos) = self.world.translation(self.paddle_computer) {
            if pos.z < 0.0 {
                self.world
                    .apply_impulse(self.paddle_computer, Vec3::new(0.0, 0.0, PADDLE_RETURN_IMPULSE));
            }
        }
        if let Some(pos) = self.world.translation(self.paddle_player) {
            if pos.z > 0.0 {
                self.world
                    .apply_impulse(self.paddle_player, Vec3::new(0.0, 0.0, -PADDLE_RETURN_IMPULSE));
            }
        }
    }

    /// Bounce the puck off either goal line and score when it crossed inside
    /// the goal mouth.
    fn check_goal_lines(&mut self) {
        if !self.state.started {
            return;
        }
        let Some(pos) = self.world.translation(self.puck) else {
            return;
        };

        if pos.z >= GOAL_LINE_Z {
            let x_kick = if pos.x <= 0.0 { GOAL_BOUNCE.x } else { -GOAL_BOUNCE.x };
            self.world
                .apply_impulse(self.puck, Vec3::new(x_kick, GOAL_BOUNCE.y, -GOAL_BOUNCE.z));
            if pos.x.abs() <= GOAL_HALF_WIDTH {
                self.score(1);
            }
        } else if pos.z <= -GOAL_LINE_Z {
            let x_kick = if pos.x <= 0.0 { GOAL_BOUNCE.x } else { -GOAL_BOUNCE.x };
            self.world
                .apply_impulse(self.puck, Vec3::new(x_kick, GOAL_BOUNCE.y, GOAL_BOUNCE.z));
            if pos.x.abs() <= GOAL_HALF_WIDTH {
                self.score(2);
            }
        }
    }

    /// Edge-triggered per physics step: re-running the policy against an
    /// unstepped world must not double-count, while a puck that lingers past
    /// the line across several steps still re-scores, as in the source game.
    fn score(&mut self, player: u8) {
        let step = self.world.step_count();
        if self.last_scored_step == Some(step) {
            return;
        }
        self.last_scored_step = Some(step);
        match player {
            1 => self.state.scores.player1 += 1,
            _ => self.state.scores.player2 += 1,
        }
        info!(
            player,
            p1 = self.state.scores.player1,
            p2 = self.state.scores.player2,
            "goal"
        );
    }

    /// Zero the scores and mark the game started. Body poses are left alone.
    pub fn restart(&mut self) {
        self.state.scores = Scores::default();
        self.state.started = true;
        self.last_scored_step = None;
        info!("game restarted");
    }

    pub fn apply_menu(&mut self, command: HockeyMenu) -> MenuOutcome {
        match command {
            HockeyMenu::Start => {
                self.restart();
                self.state.paused = false;
                self.state.camera = CameraView::PlayerPerspective;
            }
            HockeyMenu::TogglePause => self.state.paused = !self.state.paused,
            HockeyMenu::CameraTop => self.state.camera = CameraView::Top,
            HockeyMenu::CameraPlayer => self.state.camera = CameraView::PlayerPerspective,
            HockeyMenu::CameraSide => self.state.camera = CameraView::AngledSide,
            HockeyMenu::ToggleAi => self.state.ai_enabled = !self.state.ai_enabled,
            HockeyMenu::Restart => self.restart(),
            HockeyMenu::Quit => return MenuOutcome::Quit,
        }
        MenuOutcome::Continue
    }

    /// Keyboard on the computer paddle. Space lifts unconditionally; the
    /// steering keys only count while the AI is off and the game unpaused.
    pub fn key_pressed(&mut self, key: PaddleKey) {
        if key == PaddleKey::Lift {
            self.world.apply_impulse(self.paddle_computer, key.impulse());
            return;
        }
        if self.state.ai_enabled || self.state.paused {
            return;
        }
        self.world.apply_impulse(self.paddle_computer, key.impulse());
    }

    /// Arrow keys on the player paddle.
    pub fn arrow_pressed(&mut self, key: ArrowKey) {
        if self.state.paused {
            return;
        }
        self.world.apply_impulse(self.paddle_player, key.impulse());
    }

    /// Continuous mouse steering: impulse proportional to the cursor delta,
    /// scaled by the configured gain. In Medium difficulty with the AI on,
    /// the computer paddle gets a fixed counter-shove on every sample.
    pub fn mouse_moved(&mut self, x_norm: f32, y_norm: f32) {
        let (dx, dy) = self.input.cursor_delta(x_norm, y_norm);
        self.world.apply_impulse(
            self.paddle_player,
            Vec3::new(dx * self.mouse_gain, 0.0, dy * self.mouse_gain),
        );

        if self.state.difficulty == Difficulty::Medium && self.state.ai_enabled {
            self.world
                .apply_impulse(self.paddle_computer, Vec3::new(0.0, 0.0, -PADDLE_RETURN_IMPULSE));
        }
    }

    pub fn state(&self) -> &HockeyState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn puck_handle(&self) -> BodyHandle {
        self.puck
    }

    pub fn player_paddle_handle(&self) -> BodyHandle {
        self.paddle_player
    }

    pub fn computer_paddle_handle(&self) -> BodyHandle {
        self.paddle_computer
    }

    /// Test/diagnostic entry: run only the boundary/scoring pass without
    /// stepping physics.
    pub fn run_policy(&mut self) {
        self.enforce_paddle_halves();
        self.check_goal_lines();
    }
}
