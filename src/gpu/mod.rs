mod buffers;
mod context;
mod render;
mod renderer;

pub use buffers::SceneBuffers;
pub use context::GpuContext;
pub use render::{DepthTexture, RenderPipeline};
pub use renderer::Renderer;
