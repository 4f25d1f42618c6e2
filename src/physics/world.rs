use glam::Vec3;
use rapier3d::na;
use rapier3d::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::utils::math::{to_glam, to_na};

/// Handle to a body registered in a [`PhysicsWorld`].
///
/// Plain copyable index; the world owns every body for the process lifetime,
/// so handles never dangle while the world is alive.
pub type BodyHandle = RigidBodyHandle;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid collision mesh: {0}")]
    InvalidMesh(String),
}

/// Collision shape for a dynamic body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    /// Cylinder standing on the y axis.
    Cylinder { half_height: f32, radius: f32 },
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

impl BodyShape {
    fn collider(&self) -> ColliderBuilder {
        match *self {
            BodyShape::Cylinder {
                half_height,
                radius,
            } => ColliderBuilder::cylinder(half_height, radius),
            BodyShape::Sphere { radius } => ColliderBuilder::ball(radius),
            BodyShape::Cuboid { half_extents } => {
                ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            }
        }
    }
}

/// Rigid-body world: broad phase, narrow phase, and impulse solver, plus
/// ownership of every registered body and collider.
///
/// All setup happens once before the frame loop; stepping and reads happen on
/// the single simulation thread.
pub struct PhysicsWorld {
    gravity: na::Vector3<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    steps: u64,
}

impl PhysicsWorld {
    /// Create an empty world with the given gravity.
    pub fn new(gravity: Vec3) -> Self {
        Self {
            gravity: to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            steps: 0,
        }
    }

    /// Register an immovable boundary plane `normal . x = offset`.
    ///
    /// The halfspace collider passes through the origin, so the body is
    /// shifted along the normal to realize the offset.
    pub fn add_static_plane(&mut self, normal: Vec3, offset: f32) -> BodyHandle {
        let n = to_na(normal.normalize());
        let body = RigidBodyBuilder::fixed()
            .translation(n * offset)
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::halfspace(na::Unit::new_normalize(n)).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Register a movable body. Demo bodies stay interactive for the whole
    /// session, so sleeping is disabled: a sleeping body would miss impulses.
    pub fn add_dynamic_body(
        &mut self,
        shape: BodyShape,
        mass: f32,
        position: Vec3,
        friction: f32,
        restitution: f32,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(to_na(position))
            .can_sleep(false)
            .build();
        let handle = self.bodies.insert(body);
        let collider = shape
            .collider()
            .mass(mass)
            .friction(friction)
            .restitution(restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Register a static collision mesh from triangulated geometry, placed at
    /// `position`. Used where boundary planes are not enough (maze walls).
    pub fn add_triangle_mesh_body(
        &mut self,
        triangles: &[[Vec3; 3]],
        position: Vec3,
    ) -> Result<BodyHandle, WorldError> {
        if triangles.is_empty() {
            return Err(WorldError::InvalidMesh("no triangles".to_string()));
        }

        let mut vertices = Vec::with_capacity(triangles.len() * 3);
        let mut indices = Vec::with_capacity(triangles.len());
        for (i, tri) in triangles.iter().enumerate() {
            for v in tri {
                vertices.push(point![v.x, v.y, v.z]);
            }
            let base = (i * 3) as u32;
            indices.push([base, base + 1, base + 2]);
        }

        let shape = SharedShape::trimesh(vertices, indices)
            .map_err(|e| WorldError::InvalidMesh(e.to_string()))?;

        let body = RigidBodyBuilder::fixed().translation(to_na(position)).build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::new(shape).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        debug!(triangles = triangles.len(), "registered triangle mesh body");
        Ok(handle)
    }

    /// Advance the simulation by `dt` seconds, subdivided into `substeps`
    /// solver passes for stability under impulse-heavy play.
    ///
    /// `dt <= 0` is a no-op: a stalled clock must not reach the solver.
    pub fn step(&mut self, dt: f32, substeps: u32) {
        if dt <= 0.0 || substeps == 0 {
            return;
        }

        self.integration_parameters.dt = dt / substeps as f32;
        for _ in 0..substeps {
            self.pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.islands,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd_solver,
                None,
                &(),
                &(),
            );
        }
        self.steps += 1;
    }

    /// Number of successful (dt > 0) step calls so far.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Apply an instantaneous central impulse, then clear accumulated forces.
    ///
    /// Impulses here are discrete kicks, never sustained thrust; clearing
    /// right after keeps leftover forces from compounding across frames.
    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.apply_impulse(to_na(impulse), true);
            body.reset_forces(true);
        }
    }

    /// Current world-space translation of a body.
    pub fn translation(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| to_glam(b.translation()))
    }

    /// Current center-of-mass pose of a body.
    pub fn pose(&self, handle: BodyHandle) -> Option<na::Isometry3<f32>> {
        self.bodies.get(handle).map(|b| *b.position())
    }

    /// Teleport a body to a new pose (restart, tilt coupling).
    pub fn set_pose(&mut self, handle: BodyHandle, pose: na::Isometry3<f32>) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_position(pose, true);
        }
    }

    /// Teleport a body, keeping its orientation.
    pub fn set_translation(&mut self, handle: BodyHandle, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_translation(to_na(position), true);
        }
    }

    pub fn linear_velocity(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| to_glam(b.linvel()))
    }

    pub fn set_linear_velocity(&mut self, handle: BodyHandle, velocity: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(to_na(velocity), true);
        }
    }

    /// Sum of forces currently accumulated on a body.
    pub fn user_force(&self, handle: BodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| to_glam(&b.user_force()))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
