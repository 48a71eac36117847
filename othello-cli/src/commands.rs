//! The three game commands: `new`, `draw` and `move`.
//!
//! Every command but `new` refuses to run against a save file that does not
//! exist. A missing file or a rejected move is a normal [`Outcome`]; only I/O
//! failures are errors.

use crate::renderers::Renderer;
use crate::storage::{Storage, StorageError};
use derive_more::{Display, Error, From};
use othello_core::{attempt_move, Board, Captures, Color, Location, MoveRejection};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// What a command did.
#[derive(Debug)]
pub enum Outcome {
    /// A new game was saved and drawn.
    Created { path: PathBuf, drawing: PathBuf },
    /// `new` without `--force` found a save file already there.
    AlreadyExists(PathBuf),
    /// The save file a command needs does not exist.
    Missing(PathBuf),
    /// The saved game was drawn.
    Drawn(PathBuf),
    /// A placement was accepted, saved and drawn.
    Moved {
        color: Color,
        location: Location,
        captures: Captures,
        drawing: PathBuf,
    },
    /// A placement was refused; nothing was written.
    Rejected(MoveRejection),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { path, drawing } => write!(
                f,
                "Created '{}' and drew it to '{}'",
                path.display(),
                drawing.display()
            ),
            Outcome::AlreadyExists(path) => write!(f, "File '{}' already exists", path.display()),
            Outcome::Missing(path) => write!(f, "File '{}' does not exist", path.display()),
            Outcome::Drawn(drawing) => write!(f, "Drew '{}'", drawing.display()),
            Outcome::Moved {
                color,
                location,
                captures,
                drawing,
            } => write!(
                f,
                "{} played {}, capturing {}; drew '{}'",
                color,
                location,
                captures,
                drawing.display()
            ),
            Outcome::Rejected(rejection) => write!(f, "{}", rejection),
        }
    }
}

#[derive(Debug, Display, Error, From)]
pub enum CommandError {
    #[display(fmt = "{}", _0)]
    Storage(StorageError),
    #[display(fmt = "cannot draw board: {}", _0)]
    Render(io::Error),
}

/// Runs commands against one games directory and one renderer.
pub struct Session<R> {
    pub storage: Storage,
    pub renderer: R,
    /// Print each resulting board and its captures to stderr.
    pub debug: bool,
}

impl<R: Renderer> Session<R> {
    pub fn new(storage: Storage, renderer: R) -> Self {
        Self {
            storage,
            renderer,
            debug: false,
        }
    }

    /// Start a game called `name` from the starting layout.
    /// An existing save is only replaced when `force` is set.
    pub fn new_game(&mut self, name: &str, force: bool) -> Result<Outcome, CommandError> {
        let path = self.storage.path(name);
        if !force && self.storage.exists(name) {
            return Ok(Outcome::AlreadyExists(path));
        }

        let board = Board::new();
        self.storage.save(name, &board)?;
        self.trace(&board);
        let drawing = self.renderer.render(name, &board)?;
        Ok(Outcome::Created { path, drawing })
    }

    /// Draw the saved game called `name`.
    pub fn draw(&mut self, name: &str) -> Result<Outcome, CommandError> {
        let board = match self.load_existing(name)? {
            Ok(board) => board,
            Err(missing) => return Ok(missing),
        };

        self.trace(&board);
        Ok(Outcome::Drawn(self.renderer.render(name, &board)?))
    }

    /// Place a piece of `color` at `location` in the saved game called `name`.
    /// The game is saved and redrawn only if the engine accepts the move.
    pub fn make_move(
        &mut self,
        name: &str,
        color: Color,
        location: Location,
    ) -> Result<Outcome, CommandError> {
        let mut board = match self.load_existing(name)? {
            Ok(board) => board,
            Err(missing) => return Ok(missing),
        };

        let captures = match attempt_move(&mut board, location, color) {
            Ok(captures) => captures,
            Err(rejection) => return Ok(Outcome::Rejected(rejection)),
        };

        self.storage.save(name, &board)?;
        if self.debug {
            eprintln!("{} at {} captured {}", color, location, captures);
        }
        self.trace(&board);
        let drawing = self.renderer.render(name, &board)?;

        Ok(Outcome::Moved {
            color,
            location,
            captures,
            drawing,
        })
    }

    /// Load `name`, or the [`Outcome::Missing`] to report if it has no save file.
    fn load_existing(&self, name: &str) -> Result<Result<Board, Outcome>, StorageError> {
        if !self.storage.exists(name) {
            return Ok(Err(Outcome::Missing(self.storage.path(name))));
        }
        self.storage.load(name).map(Ok)
    }

    fn trace(&self, board: &Board) {
        if self.debug {
            eprintln!("{}", board.pretty());
            eprintln!(
                "black: {}, white: {}, empty: {}",
                board.count(Color::Black),
                board.count(Color::White),
                board.count_empty()
            );
        }
    }
}
