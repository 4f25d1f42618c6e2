use glam::{Mat4, Vec3};
use rapier3d::na;

/// Convert a rigid-body pose into a column-major object->world matrix.
///
/// The homogeneous matrix nalgebra produces is already column-major, which is
/// what glam (and every GL-descended renderer) expects.
pub fn iso_to_mat4(iso: &na::Isometry3<f32>) -> Mat4 {
    let m = iso.to_homogeneous();
    let mut cols = [0.0f32; 16];
    cols.copy_from_slice(m.as_slice());
    Mat4::from_cols_array(&cols)
}

/// Convert a glam vector into the solver's vector type.
pub fn to_na(v: Vec3) -> na::Vector3<f32> {
    na::Vector3::new(v.x, v.y, v.z)
}

/// Convert a solver vector back into a glam vector.
pub fn to_glam(v: &na::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Normalize a window-space cursor position to [-1, 1] on both axes.
pub fn normalize_cursor(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    let x_norm = (x / width - 0.5) * 2.0;
    let y_norm = (y / height - 0.5) * 2.0;
    (x_norm, y_norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_pose_is_identity_matrix() {
        let iso = na::Isometry3::identity();
        assert_eq!(iso_to_mat4(&iso), Mat4::IDENTITY);
    }

    #[test]
    fn translation_lands_in_fourth_column() {
        let iso = na::Isometry3::translation(1.0, 2.0, 3.0);
        let m = iso_to_mat4(&iso);
        assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn cursor_normalization_is_centered() {
        let (x, y) = normalize_cursor(683.0, 384.0, 1366.0, 768.0);
        assert!(x.abs() < 1e-3);
        assert!(y.abs() < 1e-3);

        let (x, y) = normalize_cursor(0.0, 768.0, 1366.0, 768.0);
        assert_eq!(x, -1.0);
        assert_eq!(y, 1.0);
    }
}
