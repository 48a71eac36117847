//! Settings gathered from the command line.

use crate::commands::Session;
use crate::renderers::GridRenderer;
use crate::storage::Storage;
use std::path::PathBuf;

/// Default directory holding save files.
pub const DEFAULT_GAMES_DIR: &str = "games";

/// Default directory receiving drawings.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub games_dir: PathBuf,
    pub output_dir: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games_dir: PathBuf::from(DEFAULT_GAMES_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            debug: false,
        }
    }
}

impl Config {
    /// A session saving into `games_dir` and drawing text grids into `output_dir`.
    pub fn session(&self) -> Session<GridRenderer> {
        let mut session = Session::new(
            Storage::new(&self.games_dir),
            GridRenderer::new(&self.output_dir),
        );
        session.debug = self.debug;
        session
    }
}
