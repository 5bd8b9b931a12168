use glam::{EulerRot, Mat4, Quat, Vec3};

/// Per-frame derived state of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellTransform {
    pub position: Vec3,
    /// Euler angles (x, y, z), applied in XYZ order
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Vec3,
}

impl Default for CellTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            color: Vec3::ZERO,
        }
    }
}

impl CellTransform {
    /// Model matrix: translate * rotate * scale
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position)
    }

    pub fn to_instance(&self) -> CellInstance {
        CellInstance::new(self.model_matrix(), self.color)
    }
}

/// GPU-compatible per-instance data for one cell.
///
/// Layout: 80 bytes total.
/// - model: [[f32; 4]; 4] = 64 bytes - column-major model matrix
/// - color: [f32; 3] = 12 bytes - linear RGB
/// - _pad: f32 = 4 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CellInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

impl CellInstance {
    pub fn new(model: Mat4, color: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
            _pad: 0.0,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x3,
    ];

    /// Vertex buffer layout stepping once per instance
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CellInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_size() {
        assert_eq!(std::mem::size_of::<CellInstance>(), 80);
    }

    #[test]
    fn test_identity_transform() {
        let cell = CellTransform::default();
        assert_eq!(cell.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_model_matrix_translation_and_scale() {
        let cell = CellTransform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
            scale: 1.5,
            color: Vec3::ONE,
        };
        let m = cell.model_matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert!((m.x_axis.x - 1.5).abs() < 1e-6);
        assert!((m.y_axis.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_instance_columns_match_matrix() {
        let cell = CellTransform {
            position: Vec3::new(-4.0, 0.5, 2.0),
            rotation: Vec3::new(0.3, -0.2, 0.1),
            scale: 0.8,
            color: Vec3::new(0.1, 0.2, 0.3),
        };
        let instance = cell.to_instance();
        assert_eq!(instance.model, cell.model_matrix().to_cols_array_2d());
        assert_eq!(instance.color, [0.1, 0.2, 0.3]);
    }
}
