// Rendering recipe outputs for display

mod renderer;
mod terminal;

pub use renderer::render;
pub use terminal::Terminal;
