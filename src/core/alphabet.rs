//! Tile alphabet used to draw boards
//!
//! A tile is one or more letters occupying a single cell; the default alphabet
//! carries the "qu" cluster in place of a bare "q".

use super::BoggleError;
use rand::Rng;

/// Letters of the default alphabet, with "qu" standing in for "q"
pub const DEFAULT_TILES: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "qu", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Ordered, non-empty set of tiles a board is drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    tiles: Vec<String>,
}

impl Alphabet {
    /// Create an alphabet from tile strings
    ///
    /// Tiles are lowercased. Duplicates are kept and weight the draw.
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` if there are no tiles, or a
    /// tile is empty or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["A", "b", "qu"]).unwrap();
    /// assert_eq!(alphabet.tiles(), ["a", "b", "qu"]);
    ///
    /// assert!(Alphabet::new(Vec::<String>::new()).is_err());
    /// assert!(Alphabet::new(["a", ""]).is_err());
    /// ```
    pub fn new<I, S>(tiles: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tiles: Vec<String> = tiles
            .into_iter()
            .map(|tile| tile.into().to_lowercase())
            .collect();

        if tiles.is_empty() {
            return Err(BoggleError::InvalidConfiguration(
                "alphabet must contain at least one tile".to_string(),
            ));
        }

        if let Some(bad) = tiles
            .iter()
            .find(|tile| tile.is_empty() || !tile.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(BoggleError::InvalidConfiguration(format!(
                "invalid tile {bad:?}: tiles must be non-empty ASCII letters"
            )));
        }

        Ok(Self { tiles })
    }

    /// Parse a comma-separated tile list such as `"a,b,qu"`
    ///
    /// # Errors
    /// Same conditions as [`Alphabet::new`].
    pub fn parse(list: &str) -> Result<Self, BoggleError> {
        Self::new(list.split(',').map(str::trim))
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; construction rejects empty alphabets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw one tile uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.tiles[rng.random_range(0..self.tiles.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            tiles: DEFAULT_TILES.iter().map(|&t| t.to_string()).collect(),
        }
    }
}
