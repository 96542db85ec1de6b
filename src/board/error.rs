//! Error types for position parsing.

use thiserror::Error;

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The placement does not split into exactly 8 ranks
    #[error("piece placement must have 8 ranks, found {found}")]
    RankCount { found: usize },
    /// A rank whose pieces and empty runs do not cover exactly 8 squares
    #[error("rank {rank} covers {squares} squares, expected 8")]
    RankWidth { rank: u8, squares: usize },
    /// A character that is neither a piece letter nor a run length 1-8
    #[error("invalid character '{ch}' in piece placement")]
    InvalidCharacter { ch: char },
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// FEN string has too few fields (needs at least 4)
    #[error("FEN must have at least 4 fields, found {found}")]
    TooFewParts { found: usize },
    /// FEN string has more than 6 fields
    #[error("FEN must have at most 6 fields, found {found}")]
    TooManyParts { found: usize },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Invalid castling field
    #[error("invalid castling field '{found}'")]
    InvalidCastling { found: String },
    /// Invalid en passant square
    #[error("invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    #[error("invalid halfmove clock '{found}'")]
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    #[error("invalid fullmove number '{found}'")]
    InvalidFullmoveNumber { found: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid algebraic notation
    #[error("invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
    /// Dense index outside 0-63
    #[error("square index {index} out of range (must be 0-63)")]
    OutOfRange { index: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_error_messages() {
        let err = PlacementError::RankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        let err = PlacementError::RankWidth { rank: 3, squares: 9 };
        assert!(err.to_string().contains('9'));
        let err = PlacementError::InvalidCharacter { ch: 'x' };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_fen_error_wraps_placement() {
        let err: FenError = PlacementError::InvalidCharacter { ch: 'z' }.into();
        assert!(matches!(err, FenError::Placement(_)));
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidEnPassant {
            found: "e5".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
