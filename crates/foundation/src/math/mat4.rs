use super::Vec3;

/// Column-major 4x4 affine matrix.
///
/// Uses the column-vector convention: `a * b` applies `b` first, then `a`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f64; 4]; 4],
}

impl Mat4 {
    pub const fn identity() -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub const fn uniform_scale(s: f64) -> Self {
        Self {
            cols: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, s, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub const fn translation(t: Vec3) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [t.x, t.y, t.z, 1.0],
            ],
        }
    }

    pub fn mul(self, other: Self) -> Self {
        let a = self.cols;
        let b = other.cols;
        let mut c = [[0.0f64; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                c[col][row] = a[0][row] * b[col][0]
                    + a[1][row] * b[col][1]
                    + a[2][row] * b[col][2]
                    + a[3][row] * b[col][3];
            }
        }
        Self { cols: c }
    }

    /// Translation component of an affine matrix.
    pub fn translation_part(self) -> Vec3 {
        Vec3::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }

    /// Narrow to `f32` columns for GPU upload.
    pub fn to_cols_f32(self) -> [[f32; 4]; 4] {
        let mut out = [[0.0f32; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                out[col][row] = self.cols[col][row] as f32;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Mat4;
    use crate::math::Vec3;

    #[test]
    fn identity_is_neutral() {
        let t = Mat4::translation(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(Mat4::identity().mul(t), t);
        assert_eq!(t.mul(Mat4::identity()), t);
    }

    #[test]
    fn scale_then_translate_keeps_translation_exact() {
        let pos = Vec3::new(4.0, -5.0, 6.0);
        let m = Mat4::translation(pos).mul(Mat4::uniform_scale(0.1));
        assert_eq!(m.translation_part(), pos);
        assert_eq!(m.cols[0][0], 0.1);
        assert_eq!(m.cols[1][1], 0.1);
        assert_eq!(m.cols[2][2], 0.1);
    }

    #[test]
    fn f32_columns_match_f64_layout() {
        let m = Mat4::translation(Vec3::new(1.5, 2.5, -3.5));
        let cols = m.to_cols_f32();
        assert_eq!(cols[3], [1.5, 2.5, -3.5, 1.0]);
    }
}
