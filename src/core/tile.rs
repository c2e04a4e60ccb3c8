//! Puzzle tile representation
//!
//! A Tile is one pre-printed letter group of the puzzle. Tiles are identified
//! by their position in the input sequence, not by their text: two tiles with
//! identical letters at different positions are distinct.

use std::fmt;

/// A single puzzle tile: a non-empty lowercase letter group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    text: String,
}

/// Error type for invalid tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Tile must contain at least one letter"),
            Self::NonAscii => write!(f, "Tile must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Tile contains invalid characters"),
        }
    }
}

impl std::error::Error for TileError {}

impl Tile {
    /// Create a new Tile from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `TileError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use quartiles_solver::core::Tile;
    ///
    /// let tile = Tile::new("QU").unwrap();
    /// assert_eq!(tile.text(), "qu");
    ///
    /// assert!(Tile::new("").is_err());
    /// assert!(Tile::new("t1le").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, TileError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(TileError::Empty);
        }

        if !text.is_ascii() {
            return Err(TileError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(TileError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the tile text as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the tile text in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty tiles are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Convert a slice of raw strings into tiles, preserving order
///
/// # Errors
/// Returns the first `TileError` encountered, so a malformed tile list is
/// rejected as a whole rather than silently thinned out.
pub fn tiles_from_strings<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Tile>, TileError> {
    raw.iter().map(|s| Tile::new(s.as_ref())).collect()
}
