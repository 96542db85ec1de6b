//! The 10x12 mailbox grid and piece-placement parsing.

use super::error::PlacementError;
use super::types::{Cell, Color, ColoredPiece, Piece, Square, GRID_SIZE};

/// Placement field of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Physical piece placement: the padded grid plus cached king squares.
///
/// The king cache always matches the grid. Only `set_pieces` and the
/// make/unmake code write to the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; GRID_SIZE],
    kings: [Option<Square>; 2],
}

impl Board {
    /// A board with every playable cell empty.
    #[must_use]
    pub fn empty() -> Self {
        let mut cells = [Cell::OffBoard; GRID_SIZE];
        for sq in Square::all() {
            cells[sq.mailbox()] = Cell::Empty;
        }
        Board {
            cells,
            kings: [None, None],
        }
    }

    /// Parse a board from the placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        board.set_pieces(placement)?;
        Ok(board)
    }

    /// Replace the grid with `placement`.
    ///
    /// The string is fully validated first; on error the board is unchanged.
    pub fn set_pieces(&mut self, placement: &str) -> Result<(), PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount { found: ranks.len() });
        }

        let mut parsed = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0usize;
            for ch in rank_str.chars() {
                match ch {
                    '1'..='8' => file += ch as usize - '0' as usize,
                    _ => {
                        let piece = ColoredPiece::from_fen_char(ch)
                            .ok_or(PlacementError::InvalidCharacter { ch })?;
                        if file < 8 {
                            if let Some(sq) = Square::from_coords(file as u8, rank) {
                                parsed.put(sq, piece);
                            }
                        }
                        file += 1;
                    }
                }
            }
            if file != 8 {
                return Err(PlacementError::RankWidth {
                    rank: rank + 1,
                    squares: file,
                });
            }
        }

        *self = parsed;
        Ok(())
    }

    /// Serialize the grid back to a FEN placement field.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                let piece = Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Chebyshev distance between two squares.
    #[inline]
    #[must_use]
    pub fn distance_between(&self, a: Square, b: Square) -> u8 {
        a.distance(b)
    }

    /// Raw grid cell by padded index.
    #[inline]
    #[must_use]
    pub fn cell(&self, idx: usize) -> Cell {
        self.cells.get(idx).copied().unwrap_or(Cell::OffBoard)
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.mailbox()].piece()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.mailbox()] == Cell::Empty
    }

    /// Cached square of `color`'s king, `None` if that side has no king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Squares holding pieces of `color`, in index order.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Place a piece, keeping the king cache in step.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: ColoredPiece) {
        self.cells[sq.mailbox()] = Cell::Occupied(piece);
        if piece.piece() == Piece::King {
            self.kings[piece.color().index()] = Some(sq);
        }
    }

    /// Empty a square, dropping it from the king cache if a king stood there.
    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        let idx = sq.mailbox();
        if let Cell::Occupied(piece) = self.cells[idx] {
            if piece.piece() == Piece::King && self.kings[piece.color().index()] == Some(sq) {
                self.kings[piece.color().index()] = None;
            }
        }
        self.cells[idx] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::from_placement(START_PLACEMENT).unwrap_or_else(|_| Board::empty())
    }
}
