//! Command-line front end for `othello-core`: save files, drawings and the `new`, `draw` and `move` commands.

pub mod commands;
pub mod config;
pub mod renderers;
pub mod storage;

pub use commands::{CommandError, Outcome, Session};
pub use config::Config;
