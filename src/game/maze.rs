use glam::Vec3;
use rapier3d::na;
use tracing::{debug, info};

use crate::assets::MeshData;
use crate::config::GameSettings;
use crate::game::input::{InputState, TiltKey};
use crate::game::menu::{MazeMenu, MenuOutcome};
use crate::game::SetupError;
use crate::physics::{BodyHandle, BodyShape, PhysicsWorld};
use crate::scene::{Scene, SceneObject};
use crate::sim::SOLVER_SUBSTEPS;

const GRAVITY: Vec3 = Vec3::new(0.0, -5.0, 0.0);
const BALL_RADIUS: f32 = 0.15;
const BALL_MASS: f32 = 2.0;
const BALL_FRICTION: f32 = 0.01;
const BALL_RESTITUTION: f32 = 1.0;
const BALL_START: Vec3 = Vec3::new(4.5, 5.0, -4.2);
/// The goal pocket sits in the board corner past both of these.
const GOAL_MIN_X: f32 = -4.2;
const GOAL_MIN_Z: f32 = 4.2;
/// The demo board lives far off to the side so the two simulations never
/// interact.
const DEMO_OFFSET: Vec3 = Vec3::new(50.0, 0.0, 0.0);
const DEMO_BALL_START: Vec3 = Vec3::new(50.0, 5.0, 0.0);

/// Which board the player is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeMode {
    Game,
    Demo,
}

#[derive(Debug)]
pub struct MazeState {
    pub mode: MazeMode,
    pub paused: bool,
    pub won: bool,
    /// Unpaused simulated seconds since the last restart.
    pub elapsed: f32,
    /// Fastest winning time seen across runs.
    pub best_time: Option<f32>,
    pub mouse_control: bool,
    pub follow_ball: bool,
}

impl Default for MazeState {
    fn default() -> Self {
        Self {
            mode: MazeMode::Game,
            paused: false,
            won: false,
            elapsed: 0.0,
            best_time: None,
            mouse_control: false,
            follow_ball: false,
        }
    }
}

/// Ball-in-a-tilting-maze: a static triangle-mesh board whose orientation is
/// re-driven every frame from accumulated pitch/roll, plus a free ball.
pub struct MazeBall {
    world: PhysicsWorld,
    scene: Scene,
    board: BodyHandle,
    ball: BodyHandle,
    demo_board: BodyHandle,
    demo_ball: BodyHandle,
    pitch: f32,
    roll: f32,
    demo_pitch: f32,
    demo_roll: f32,
    tilt_rate: f32,
    mouse_tilt_gain: f32,
    state: MazeState,
    input: InputState,
}

impl MazeBall {
    /// Build the world from collaborator-supplied board geometry. Bad
    /// geometry aborts setup; no partial world is started.
    pub fn new(
        board_mesh: &MeshData,
        demo_mesh: &MeshData,
        settings: &GameSettings,
    ) -> Result<Self, SetupError> {
        board_mesh.validate()?;
        demo_mesh.validate()?;

        let mut world = PhysicsWorld::new(GRAVITY);

        let board = world.add_triangle_mesh_body(&board_mesh.triangles, Vec3::ZERO)?;
        let demo_board = world.add_triangle_mesh_body(&demo_mesh.triangles, DEMO_OFFSET)?;

        let ball = world.add_dynamic_body(
            BodyShape::Sphere {
                radius: BALL_RADIUS,
            },
            BALL_MASS,
            BALL_START,
            BALL_FRICTION,
            BALL_RESTITUTION,
        );
        let demo_ball = world.add_dynamic_body(
            BodyShape::Sphere {
                radius: BALL_RADIUS,
            },
            BALL_MASS,
            DEMO_BALL_START,
            BALL_FRICTION,
            BALL_RESTITUTION,
        );

        let mut scene = Scene::new();
        scene.add_object(
            SceneObject::new("board")
                .with_mesh(board_mesh.name.clone())
                .with_texture("wood")
                .with_body(board),
        );
        scene.add_object(
            SceneObject::new("ball")
                .with_mesh("ball1")
                .with_texture("marble")
                .with_body(ball),
        );
        scene.add_object(
            SceneObject::new("demo_board")
                .with_mesh(demo_mesh.name.clone())
                .with_texture("wood")
                .with_body(demo_board),
        );
        scene.add_object(
            SceneObject::new("demo_ball")
                .with_mesh("ball1")
                .with_texture("marble")
                .with_body(demo_ball),
        );

        debug!(bodies = world.body_count(), "maze world ready");

        Ok(Self {
            world,
            scene,
            board,
            ball,
            demo_board,
            demo_ball,
            pitch: 0.0,
            roll: 0.0,
            demo_pitch: 0.0,
            demo_roll: 0.0,
            tilt_rate: settings.maze.tilt_rate,
            mouse_tilt_gain: settings.maze.mouse_tilt_gain,
            state: MazeState::default(),
            input: InputState::new(),
        })
    }

    /// One frame: step physics and the run timer, refresh transforms,
    /// re-drive both boards from their tilt angles, then check the win
    /// condition.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        if !self.state.paused {
            self.world.step(dt, SOLVER_SUBSTEPS);
            self.state.elapsed += dt;
        }

        self.scene.refresh_transforms(&self.world);

        self.world
            .set_pose(self.board, tilt_pose(Vec3::ZERO, self.pitch, self.roll));
        self.world.set_pose(
            self.demo_board,
            tilt_pose(DEMO_OFFSET, self.demo_pitch, self.demo_roll),
        );

        self.check_win();
    }

    /// Terminal condition: once the ball reaches the goal corner the game is
    /// won and stays won until an explicit restart, even if the ball rolls
    /// back out. Best time only ever decreases.
    fn check_win(&mut self) {
        if !self.state.won {
            if let Some(pos) = self.world.translation(self.ball) {
                if pos.x < GOAL_MIN_X && pos.z > GOAL_MIN_Z {
                    self.state.won = true;
                    info!(time = self.state.elapsed, "maze solved");
                }
            }
        }
        if self.state.won {
            let elapsed = self.state.elapsed;
            self.state.best_time = Some(match self.state.best_time {
                Some(best) if best <= elapsed => best,
                _ => elapsed,
            });
        }
    }

    /// Put the ball back at the drop point, level the board, and restart the
    /// run timer. The best time survives as the across-runs record.
    pub fn restart(&mut self) {
        self.world
            .set_pose(self.ball, na::Isometry3::translation(BALL_START.x, BALL_START.y, BALL_START.z));
        self.world.set_linear_velocity(self.ball, Vec3::ZERO);
        self.pitch = 0.0;
        self.roll = 0.0;
        self.state.elapsed = 0.0;
        self.state.won = false;
        info!("maze restarted");
    }

    pub fn apply_menu(&mut self, command: MazeMenu) -> MenuOutcome {
        match command {
            MazeMenu::PlayGame => {
                self.state.mode = MazeMode::Game;
                self.state.elapsed = 0.0;
            }
            MazeMenu::PlayDemo => self.state.mode = MazeMode::Demo,
            MazeMenu::Restart => self.restart(),
            MazeMenu::TogglePause => self.state.paused = !self.state.paused,
            MazeMenu::ToggleMouseControl => self.state.mouse_control = !self.state.mouse_control,
            MazeMenu::ToggleFollowBall => self.state.follow_ball = !self.state.follow_ball,
            MazeMenu::Quit => return MenuOutcome::Quit,
        }
        MenuOutcome::Continue
    }

    /// Tilt keys nudge whichever board the current mode drives.
    pub fn tilt_key(&mut self, key: TiltKey) {
        if self.state.paused {
            return;
        }
        let (pitch, roll) = match self.state.mode {
            MazeMode::Game => (&mut self.pitch, &mut self.roll),
            MazeMode::Demo => (&mut self.demo_pitch, &mut self.demo_roll),
        };
        match key {
            TiltKey::PitchUp => *pitch += self.tilt_rate,
            TiltKey::PitchDown => *pitch -= self.tilt_rate,
            TiltKey::RollLeft => *roll -= self.tilt_rate,
            TiltKey::RollRight => *roll += self.tilt_rate,
        }
    }

    /// Mouse tilt, active only when mouse control is toggled on.
    pub fn mouse_moved(&mut self, x_norm: f32, y_norm: f32) {
        let (dx, dy) = self.input.cursor_delta(x_norm, y_norm);
        if !self.state.mouse_control {
            return;
        }
        self.roll += dx * self.mouse_tilt_gain;
        self.pitch -= dy * self.mouse_tilt_gain;
    }

    pub fn state(&self) -> &MazeState {
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

    pub fn ball_handle(&self) -> BodyHandle {
        self.ball
    }

    pub fn demo_ball_handle(&self) -> BodyHandle {
        self.demo_ball
    }

    pub fn tilt(&self) -> (f32, f32) {
        (self.pitch, self.roll)
    }
}

/// Board pose from accumulated tilt: pitch about x, roll about z.
fn tilt_pose(origin: Vec3, pitch: f32, roll: f32) -> na::Isometry3<f32> {
    na::Isometry3::from_parts(
        na::Translation3::new(origin.x, origin.y, origin.z),
        na::UnitQuaternion::from_euler_angles(pitch, 0.0, roll),
    )
}
