use bytemuck::{Pod, Zeroable};
use foundation::math::{Mat4, Vec3};

/// Per-object placement matrix for instanced rendering, in f32 columns so
/// the whole buffer can be handed to the GPU with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceTransform {
    pub cols: [[f32; 4]; 4],
}

impl InstanceTransform {
    /// Compose `Translate(position) * Scale(scale)`: the object is sized
    /// first, then moved to its world position.
    pub fn placement(position: Vec3, scale: f64) -> Self {
        let m = Mat4::translation(position).mul(Mat4::uniform_scale(scale));
        Self {
            cols: m.to_cols_f32(),
        }
    }

    /// Translation component, for verifying index correspondence.
    pub fn translation(self) -> Vec3 {
        Vec3::new(
            self.cols[3][0] as f64,
            self.cols[3][1] as f64,
            self.cols[3][2] as f64,
        )
    }
}

/// Build one placement matrix per world position.
///
/// Output index `i` always corresponds to `positions[i]` (and therefore to
/// record `i` of the source catalog). O(n), rebuilt only at load time.
pub fn build_instances(positions: &[Vec3], scale: f64) -> Vec<InstanceTransform> {
    positions
        .iter()
        .map(|&pos| InstanceTransform::placement(pos, scale))
        .collect()
}
