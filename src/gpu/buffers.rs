use wgpu::util::DeviceExt;
use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::animation::lights::PointLight;
use crate::animation::{CellInstance, FrameScene};
use crate::config::{
    rgb, BACKGROUND_COLOR, EMISSIVE_COLOR, EMISSIVE_INTENSITY, FOG_DENSITY, METALNESS, ROUGHNESS,
};

/// Cube vertex: position + face normal
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Point light as seen by the shader (32 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    /// xyz = position, w = range
    pub position: [f32; 4],
    /// rgb = color * intensity
    pub color: [f32; 4],
}

impl From<&PointLight> for PointLightRaw {
    fn from(light: &PointLight) -> Self {
        let color = light.color * light.intensity;
        Self {
            position: light.position.extend(light.range).to_array(),
            color: color.extend(0.0).to_array(),
        }
    }
}

/// Per-frame scene uniform (304 bytes, every member 16-byte aligned)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    pub ambient: [f32; 4],
    /// Direction toward the directional light
    pub sun_direction: [f32; 4],
    pub sun_color: [f32; 4],
    /// rgb = fog color, w = exp2 density
    pub fog: [f32; 4],
    /// x = roughness, y = metalness, z = emissive intensity
    pub material: [f32; 4],
    pub emissive: [f32; 4],
    pub point_lights: [PointLightRaw; 4],
}

impl SceneUniform {
    pub fn from_scene(scene: &FrameScene) -> Self {
        let lights = scene.lights;
        let fog = rgb(BACKGROUND_COLOR);
        let emissive = rgb(EMISSIVE_COLOR);

        Self {
            view_proj: scene.view_proj.to_cols_array_2d(),
            camera_position: scene.camera_position.extend(1.0).to_array(),
            ambient: lights.ambient.extend(0.0).to_array(),
            sun_direction: lights
                .directional_position
                .normalize_or_zero()
                .extend(0.0)
                .to_array(),
            sun_color: lights.directional_color.extend(0.0).to_array(),
            fog: [fog[0], fog[1], fog[2], FOG_DENSITY],
            material: [ROUGHNESS, METALNESS, EMISSIVE_INTENSITY, 0.0],
            emissive: [emissive[0], emissive[1], emissive[2], 0.0],
            point_lights: lights.point_lights().map(|light| PointLightRaw::from(&light)),
        }
    }
}

/// Mesh, instance and uniform buffers for the wave grid
pub struct SceneBuffers {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
    /// One CellInstance per grid cell, rewritten every frame
    pub instance_buffer: Buffer,
    pub instance_count: u32,
    pub uniform_buffer: Buffer,
}

impl SceneBuffers {
    /// Create buffers for `instance_count` cubes of edge `box_size`
    pub fn new(device: &Device, box_size: f32, instance_count: u32) -> Self {
        let (vertices, indices) = cube(box_size);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube-vertex-buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube-index-buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cell-instance-buffer"),
            size: (instance_count as usize * std::mem::size_of::<CellInstance>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene-uniform-buffer"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance_buffer,
            instance_count,
            uniform_buffer,
        }
    }

    /// Upload this frame's instances and scene uniform
    pub fn update(&self, queue: &Queue, scene: &FrameScene) {
        debug_assert_eq!(scene.instances.len(), self.instance_count as usize);
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(scene.instances));
        let uniform = SceneUniform::from_scene(scene);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
    }
}

/// Cube centered on the origin with edge `size`, 4 vertices per face
pub fn cube(size: f32) -> (Vec<Vertex>, Vec<u16>) {
    let h = size / 2.0;
    // (normal, tangent u, tangent v) per face; u x v = normal keeps CCW winding
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = [
                (normal[0] + su * u[0] + sv * v[0]) * h,
                (normal[1] + su * u[1] + sv * v[1]) * h,
                (normal[2] + su * u[2] + sv * v[2]) * h,
            ];
            vertices.push(Vertex { position, normal });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}
