//! Tile grid
//!
//! `max_attempts` rows of `word_len` tiles. Rows are edited only while they are
//! the current row; once submitted their letters are frozen and only the
//! reveal steps touch them.

use crate::core::{Color, Word};

/// Visual state of one tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    /// Lowercase letter, if typed
    pub letter: Option<u8>,
    /// Revealed color, set halfway through the flip
    pub color: Option<Color>,
    pub flipping: bool,
    pub popping: bool,
}

impl Tile {
    /// Uppercase letter for display
    #[must_use]
    pub fn display_letter(&self) -> Option<char> {
        self.letter.map(|b| char::from(b.to_ascii_uppercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    word_len: usize,
    rows: Vec<Vec<Tile>>,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, word_len: usize) -> Self {
        Self {
            word_len,
            rows: vec![vec![Tile::default(); word_len]; rows],
        }
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.rows.get(row)?.get(col)
    }

    pub(crate) fn tile_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.rows.get_mut(row)?.get_mut(col)
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: Option<u8>) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.letter = letter;
        }
    }

    /// Text typed so far in `row`, lowercase, stopping at the first empty tile
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.rows.get(row).map_or_else(String::new, |tiles| {
            tiles
                .iter()
                .map_while(|tile| tile.letter.map(char::from))
                .collect()
        })
    }

    /// The row as a word, if every tile is filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let letters: Vec<u8> = self
            .rows
            .get(row)?
            .iter()
            .map(|tile| tile.letter)
            .collect::<Option<_>>()?;
        Word::from_letters(&letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 5);
        assert_eq!(board.rows().len(), 6);
        assert!(board.rows().iter().all(|row| row.len() == 5));
        assert!(board
            .rows()
            .iter()
            .flatten()
            .all(|tile| *tile == Tile::default()));
    }

    #[test]
    fn row_text_and_word() {
        let mut board = Board::new(2, 4);
        for (col, &b) in b"kan".iter().enumerate() {
            board.set_letter(0, col, Some(b));
        }
        assert_eq!(board.row_text(0), "kan");
        assert_eq!(board.row_word(0), None);

        board.set_letter(0, 3, Some(b'e'));
        assert_eq!(board.row_word(0), Word::new("kane").ok());
        assert_eq!(board.tile(0, 0).and_then(Tile::display_letter), Some('K'));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut board = Board::new(1, 3);
        board.set_letter(5, 5, Some(b'x'));
        assert!(board.tile(5, 5).is_none());
        assert_eq!(board.row_text(9), "");
    }
}
