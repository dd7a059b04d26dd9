pub mod backend;
pub mod renderer;

pub use backend::ChatBackend;
pub use renderer::Renderer;
