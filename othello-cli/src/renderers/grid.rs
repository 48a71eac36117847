//! [`Renderer`] which draws the board as a labelled text grid.

use super::Renderer;
use itertools::Itertools;
use othello_core::{Board, Cell, Color, Location, EDGE_LENGTH};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes each drawing to `<output_dir>/<name>/<name>-<unix seconds>.txt`.
pub struct GridRenderer {
    output_dir: PathBuf,
}

impl GridRenderer {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Draw the board: a row number down the left side and column letters along the bottom.
    pub fn draw(board: &Board) -> String {
        let cells = board.cells().chunks(EDGE_LENGTH);
        let mut rows: Vec<String> = cells
            .into_iter()
            .map(|row| {
                let mut row = row.peekable();
                let label = row.peek().map_or(' ', |(loc, _)| loc.row_label());
                format!("{} | {}", label, row.map(|(_, cell)| glyph(cell)).join(" "))
            })
            .collect();

        let footer = (0..EDGE_LENGTH)
            .filter_map(|col| Location::from_coords(EDGE_LENGTH - 1, col))
            .map(Location::column_label)
            .join(" ");
        rows.push(format!("  +{}", "-".repeat(2 * EDGE_LENGTH)));
        rows.push(format!("    {}", footer));
        rows.join("\n") + "\n"
    }
}

fn glyph(cell: Cell) -> char {
    match cell {
        None => '.',
        Some(Color::Black) => 'X',
        Some(Color::White) => 'O',
    }
}

impl Renderer for GridRenderer {
    fn render(&mut self, name: &str, board: &Board) -> io::Result<PathBuf> {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());

        let dir = self.output_dir.join(name);
        fs::create_dir_all(&dir)?;
        let path = unused_path(&dir, &format!("{}-{}", name, seconds));
        fs::write(&path, Self::draw(board))?;
        Ok(path)
    }
}

/// `<stem>.txt` in `dir`, or `<stem>-1.txt`, `<stem>-2.txt`, ... if that is taken.
fn unused_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(format!("{}.txt", stem));
    if !first.exists() {
        return first;
    }

    (1..)
        .map(|n| dir.join(format!("{}-{}.txt", stem, n)))
        .find(|path| !path.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_starting_board() {
        let expected = "\
1 | . . . . . . . .
2 | . . . . . . . .
3 | . . . . . . . .
4 | . . . O X . . .
5 | . . . X O . . .
6 | . . . . . . . .
7 | . . . . . . . .
8 | . . . . . . . .
  +----------------
    A B C D E F G H
";
        assert_eq!(GridRenderer::draw(&Board::new()), expected);
    }

    #[test]
    fn render_writes_into_game_folder() {
        let dir = std::env::temp_dir().join(format!("othello-grid-{}", std::process::id()));
        let mut renderer = GridRenderer::new(&dir);

        let path = renderer.render("demo", &Board::new()).unwrap();
        assert_eq!(path.parent(), Some(dir.join("demo").as_path()));
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("demo-") && file_name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), GridRenderer::draw(&Board::new()));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn renders_in_the_same_second_are_kept() {
        let dir = std::env::temp_dir().join(format!("othello-grid-same-second-{}", std::process::id()));
        let mut renderer = GridRenderer::new(&dir);

        let mut board = Board::new();
        let first = renderer.render("demo", &board).unwrap();
        board.set(2, 3, Color::Black);
        let second = renderer.render("demo", &board).unwrap();
        let third = renderer.render("demo", &board).unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(fs::read_to_string(&first).unwrap(), GridRenderer::draw(&Board::new()));
        assert_eq!(fs::read_to_string(&second).unwrap(), GridRenderer::draw(&board));
        assert_eq!(fs::read_dir(dir.join("demo")).unwrap().count(), 3);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unused_path_adds_counter() {
        let dir = std::env::temp_dir().join(format!("othello-grid-counter-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        assert_eq!(unused_path(&dir, "demo-7"), dir.join("demo-7.txt"));
        fs::write(dir.join("demo-7.txt"), "").unwrap();
        assert_eq!(unused_path(&dir, "demo-7"), dir.join("demo-7-1.txt"));
        fs::write(dir.join("demo-7-1.txt"), "").unwrap();
        assert_eq!(unused_path(&dir, "demo-7"), dir.join("demo-7-2.txt"));

        fs::remove_dir_all(dir).unwrap();
    }
}
