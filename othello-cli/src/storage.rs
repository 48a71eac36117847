//! Save files: one board per file in the games directory, in the save layout.

use derive_more::{Display, Error};
use othello_core::Board;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension of a saved game.
pub const SAVE_EXTENSION: &str = "oth";

/// Reads and writes saved games under one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Storage {
    games_dir: PathBuf,
}

#[derive(Debug, Display, Error)]
pub enum StorageError {
    #[display(fmt = "cannot read '{}': {}", "path.display()", source)]
    Read { path: PathBuf, source: io::Error },
    #[display(fmt = "cannot write '{}': {}", "path.display()", source)]
    Write { path: PathBuf, source: io::Error },
}

impl Storage {
    pub fn new<P: Into<PathBuf>>(games_dir: P) -> Self {
        Self {
            games_dir: games_dir.into(),
        }
    }

    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    /// The save file for the game called `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.games_dir.join(format!("{}.{}", name, SAVE_EXTENSION))
    }

    /// Returns whether a save file exists for `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    pub fn load(&self, name: &str) -> Result<Board, StorageError> {
        let path = self.path(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Board::deserialize(&text)),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    /// Write `board` for `name`, creating the games directory if needed.
    /// The layout goes to a sibling temp file first and is renamed into
    /// place, so an interrupted save leaves the previous file intact.
    pub fn save(&self, name: &str, board: &Board) -> Result<(), StorageError> {
        let path = self.path(name);
        let temp_path = path.with_extension(format!("{}.tmp", SAVE_EXTENSION));

        let write = || -> io::Result<()> {
            fs::create_dir_all(&self.games_dir)?;
            fs::write(&temp_path, board.serialize())?;
            fs::rename(&temp_path, &path)
        };

        write().map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            StorageError::Write {
                path: path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::{Color, Location};
    use std::error::Error as _;

    fn scratch_dir(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "othello-storage-{}-{}",
            test_name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn save_path() {
        let storage = Storage::new("games");
        assert_eq!(storage.path("demo"), Path::new("games").join("demo.oth"));
    }

    #[test]
    fn save_and_load() {
        let dir = scratch_dir("save_and_load");
        let storage = Storage::new(dir.join("nested"));
        assert!(!storage.exists("demo"));

        let mut board = Board::new();
        let d3: Location = "D3".parse().unwrap();
        othello_core::attempt_move(&mut board, d3, Color::Black).unwrap();
        storage.save("demo", &board).unwrap();

        assert!(storage.exists("demo"));
        assert_eq!(storage.load("demo").unwrap(), board);
        assert_eq!(
            fs::read_to_string(storage.path("demo")).unwrap(),
            board.serialize()
        );

        let leftovers: Vec<_> = fs::read_dir(storage.games_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("demo.oth")]);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_short_file_pads() {
        let dir = scratch_dir("load_short_file_pads");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("short.oth"), "B\n W\n").unwrap();

        let board = Storage::new(&dir).load("short").unwrap();
        assert_eq!(board.get(0, 0), Some(Color::Black));
        assert_eq!(board.get(1, 1), Some(Color::White));
        assert_eq!(board.count_empty(), 62);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn error_message_and_source() {
        let error = StorageError::Read {
            path: PathBuf::from("games/demo.oth"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(error.to_string(), "cannot read 'games/demo.oth': gone");
        assert_eq!(error.source().map(|source| source.to_string()), Some("gone".to_string()));
    }

    #[test]
    fn load_missing_file() {
        let dir = scratch_dir("load_missing_file");
        let storage = Storage::new(&dir);
        match storage.load("nothing") {
            Err(StorageError::Read { path, .. }) => assert_eq!(path, storage.path("nothing")),
            other => panic!("expected a read error, got {:?}", other),
        }
    }
}
