use glam::Vec3;
use thiserror::Error;

/// Errors from validating host-supplied geometry. Any of these during setup
/// is fatal: no partial world is ever started.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("mesh '{0}' has no triangles")]
    EmptyMesh(String),
    #[error("mesh '{0}' contains a non-finite vertex")]
    NonFiniteVertex(String),
}

/// Triangulated mesh geometry handed over by the asset-loading collaborator.
///
/// The crate never parses model files itself; it only consumes triangle soup
/// for collision shapes plus opaque mesh/texture ids for the renderer.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub name: String,
    pub triangles: Vec<[Vec3; 3]>,
}

impl MeshData {
    pub fn new(name: impl Into<String>, triangles: Vec<[Vec3; 3]>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Reject geometry the collision pipeline cannot safely ingest.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.triangles.is_empty() {
            return Err(AssetError::EmptyMesh(self.name.clone()));
        }
        for tri in &self.triangles {
            if tri.iter().any(|v| !v.is_finite()) {
                return Err(AssetError::NonFiniteVertex(self.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_fails_validation() {
        let mesh = MeshData::new("maze", Vec::new());
        assert!(matches!(mesh.validate(), Err(AssetError::EmptyMesh(_))));
    }

    #[test]
    fn non_finite_vertex_fails_validation() {
        let mesh = MeshData::new(
            "maze",
            vec![[Vec3::ZERO, Vec3::X, Vec3::new(f32::NAN, 0.0, 0.0)]],
        );
        assert!(matches!(
            mesh.validate(),
            Err(AssetError::NonFiniteVertex(_))
        ));
    }

    #[test]
    fn well_formed_mesh_passes() {
        let mesh = MeshData::new("maze", vec![[Vec3::ZERO, Vec3::X, Vec3::Z]]);
        assert!(mesh.validate().is_ok());
    }
}
