//! Square letter grid

use super::{Alphabet, BoggleError, Position};
use rand::Rng;
use std::fmt;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest supported board side length
pub const MAX_BOARD_SIZE: usize = 16;

/// Side length of a square board, validated to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` when `size` is out of range.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::BoardSize;
    ///
    /// assert_eq!(BoardSize::new(5).unwrap().get(), 5);
    /// assert!(BoardSize::new(3).is_err());
    /// assert!(BoardSize::new(17).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, BoggleError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BoggleError::InvalidConfiguration(format!(
                "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {size}"
            )))
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of cells (N²)
    #[inline]
    #[must_use]
    pub const fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(MIN_BOARD_SIZE)
    }
}

/// An N×N grid of tiles stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    tiles: Vec<String>,
}

impl Board {
    /// Draw N² tiles independently and uniformly from `alphabet`
    pub fn random<R: Rng + ?Sized>(size: BoardSize, alphabet: &Alphabet, rng: &mut R) -> Self {
        let tiles = (0..size.cells())
            .map(|_| alphabet.pick(rng).to_string())
            .collect();
        Self { size, tiles }
    }

    /// Build a board from explicit rows of tiles
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` if the grid is not square,
    /// its size is out of range, or any tile is not made of ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::{Board, Position};
    ///
    /// let board = Board::from_rows(&[
    ///     vec!["c", "a", "t", "s"],
    ///     vec!["x", "x", "x", "x"],
    ///     vec!["x", "qu", "x", "x"],
    ///     vec!["x", "x", "x", "x"],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.size(), 4);
    /// assert_eq!(board.tile(Position::new(2, 1)), "qu");
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoggleError> {
        let size = BoardSize::new(rows.len())?;

        let mut tiles = Vec::with_capacity(size.cells());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size.get() {
                return Err(BoggleError::InvalidConfiguration(format!(
                    "row {r} has {} tiles, expected {}",
                    row.len(),
                    size.get()
                )));
            }
            for tile in row {
                let tile = tile.as_ref().trim().to_lowercase();
                if tile.is_empty() || !tile.chars().all(|c| c.is_ascii_lowercase()) {
                    return Err(BoggleError::InvalidConfiguration(format!(
                        "invalid tile {tile:?} in row {r}"
                    )));
                }
                tiles.push(tile);
            }
        }

        Ok(Self { size, tiles })
    }

    /// Parse a board written as rows separated by `/` or newlines, tiles
    /// separated by whitespace: `"c a t s / x x x x / ..."`
    ///
    /// # Errors
    /// Same conditions as [`Board::from_rows`].
    pub fn parse(text: &str) -> Result<Self, BoggleError> {
        let rows: Vec<Vec<&str>> = text
            .split(['/', '\n'])
            .map(|row| row.split_whitespace().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size.get()
    }

    #[inline]
    #[must_use]
    pub const fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Tile at `pos`
    ///
    /// # Panics
    /// Panics if `pos` lies outside the board.
    #[inline]
    #[must_use]
    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[pos.index(self.size())]
    }

    /// Iterate rows as tile slices
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.tiles.chunks(self.size())
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size();
        (0..size * size).map(move |i| Position::from_index(i, size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
