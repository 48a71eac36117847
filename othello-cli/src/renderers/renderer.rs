use othello_core::Board;
use std::io;
use std::path::PathBuf;

/// Something that can draw a saved game to "the outside world."
pub trait Renderer {
    /// Draw `board` for the game called `name`, returning where the drawing was written.
    /// Output location and naming are entirely up to the renderer.
    fn render(&mut self, name: &str, board: &Board) -> io::Result<PathBuf>;
}
