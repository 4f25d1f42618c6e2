use glam::Mat4;

use crate::physics::{BodyHandle, PhysicsWorld};
use crate::utils::math::iso_to_mat4;

/// Read-only object->world matrix derived each frame from a rigid body.
/// The body is the source of truth; this is a projection for rendering.
pub type Transform = Mat4;

/// Logical entity tying opaque render handles to a transform and, for dynamic
/// objects, the rigid body it follows. The world owns the body's lifetime;
/// the object only holds the handle.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub mesh_id: Option<String>,
    pub texture_id: Option<String>,
    pub transform: Transform,
    pub body: Option<BodyHandle>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh_id: None,
            texture_id: None,
            transform: Mat4::IDENTITY,
            body: None,
        }
    }

    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_mesh(mut self, mesh_id: impl Into<String>) -> Self {
        self.mesh_id = Some(mesh_id.into());
        self
    }

    pub fn with_texture(mut self, texture_id: impl Into<String>) -> Self {
        self.texture_id = Some(texture_id.into());
        self
    }

    /// Re-derive the transform from the body's center-of-mass pose.
    /// Objects without a body keep whatever transform they were given.
    pub fn refresh_transform(&mut self, world: &PhysicsWorld) {
        if let Some(handle) = self.body {
            if let Some(pose) = world.pose(handle) {
                self.transform = iso_to_mat4(&pose);
            }
        }
    }
}

/// Flat registry of scene objects; the host iterates it once per frame to
/// issue draw calls.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its index for later lookups.
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Refresh every dynamic object's transform after a physics step.
    pub fn refresh_transforms(&mut self, world: &PhysicsWorld) {
        for object in &mut self.objects {
            object.refresh_transform(world);
        }
    }
}
