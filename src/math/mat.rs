use crate::math::vec::Vec3;

/// 4x4 matrix in row-vector layout: a point `p` is transformed as `p * M`,
/// so the translation lives in the last row. The memory layout is the same
/// as a column-major OpenGL/WGSL `mat4x4<f32>`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ])
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// Equivalent to `gluLookAt`: the camera looks down its local -Z axis.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let f = (target - eye).normalize();
        let s = f.cross(&up).normalize();
        let u = s.cross(&f);

        Mat4([
            [s.x(), u.x(), -f.x(), 0.0],
            [s.y(), u.y(), -f.y(), 0.0],
            [s.z(), u.z(), -f.z(), 0.0],
            [-s.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0],
        ])
    }

    /// Returns `self * b`, i.e. `self` is applied first.
    pub fn multiply(&self, b: &Mat4) -> Mat4 {
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[i][k] * b.0[k][j]).sum();
            }
        }
        Mat4(result)
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let v = [p.x(), p.y(), p.z(), 1.0];
        let mut out = [0.0f32; 3];
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|i| v[i] * self.0[i][j]).sum();
        }
        Vec3::from(out)
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(matrix: [[f32; 4]; 4]) -> Self {
        Mat4(matrix)
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// A camera at the origin looking down -Z sees a point ahead at negative view depth.
    #[test]
    fn test_look_at_forward_is_negative_z() {
        let view = Mat4::look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
        let p = view.transform_point(Vec3::new(0.0, 0.0, -5.0));
        assert_abs_diff_eq!(p.x(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.z(), -5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(3.0, 2.0, -7.0);
        let view = Mat4::look_at(eye, eye + Vec3::new(1.0, 0.0, 0.0), Vec3::UP);
        let p = view.transform_point(eye);
        assert_abs_diff_eq!(p.length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_multiply_applies_left_operand_first() {
        let a = Mat4::translation(1.0, 0.0, 0.0);
        let b = Mat4::translation(0.0, 2.0, 0.0);
        let p = a.multiply(&b).transform_point(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(Mat4::identity().multiply(&a), a);
    }
}
