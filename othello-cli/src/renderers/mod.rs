//! Renderers draw a board to an output file after it is created or changed.

mod grid;
mod renderer;

pub use grid::GridRenderer;
pub use renderer::Renderer;
