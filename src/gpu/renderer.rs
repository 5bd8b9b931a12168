use std::sync::Arc;
use wgpu::BindGroup;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::{DepthTexture, GpuContext, RenderPipeline, SceneBuffers};
use crate::animation::FrameScene;
use crate::error::GpuError;

/// Draws one `FrameScene` per call to the window surface
pub struct Renderer {
    gpu: GpuContext,
    buffers: SceneBuffers,
    pipeline: RenderPipeline,
    bind_group: BindGroup,
    depth: DepthTexture,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        box_size: f32,
        instance_count: usize,
    ) -> Result<Self, GpuError> {
        log::info!("Creating GPU context...");
        let gpu = GpuContext::new(window).await?;

        log::info!("Creating GPU buffers...");
        let buffers = SceneBuffers::new(&gpu.device, box_size, instance_count as u32);

        log::info!("Creating render pipeline...");
        let pipeline = RenderPipeline::new(&gpu.device, gpu.format());
        let bind_group = pipeline.create_bind_group(&gpu.device, &buffers.uniform_buffer);
        let depth = DepthTexture::new(&gpu.device, gpu.config.width, gpu.config.height);

        Ok(Self {
            gpu,
            buffers,
            pipeline,
            bind_group,
            depth,
        })
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.gpu.resize(size);
        self.depth = DepthTexture::new(&self.gpu.device, size.width, size.height);
    }

    /// Upload and draw the scene. A lost or outdated surface is
    /// reconfigured and the frame skipped; other surface errors are returned.
    pub fn render(&mut self, scene: &FrameScene) -> Result<(), wgpu::SurfaceError> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        self.buffers.update(&self.gpu.queue, scene);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        self.pipeline.draw(
            &mut encoder,
            &view,
            &self.depth,
            &self.bind_group,
            &self.buffers,
        );

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
