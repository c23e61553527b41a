//! Structured errors for the one collaborator the core cannot do without:
//! parsing a FEN string into a `Position`.
//!
//! The move generator and make/unmake never fail: they trust a `Position`
//! that only ever came from a successful parse, and a `Move` that only ever
//! came from this crate's own generator.

use thiserror::Error;

/// Failure modes when parsing a FEN piece-placement/state string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 space-separated fields, got {0}")]
    WrongFieldCount(usize),

    #[error("piece placement field has {0} ranks, expected 8")]
    WrongRankCount(usize),

    #[error("rank {rank} has {squares} squares, expected 8")]
    WrongRankLength { rank: usize, squares: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),

    #[error("invalid active color '{0}', expected 'w' or 'b'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights '{0}', expected a subset of \"KQkq\" or \"-\"")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square '{0}'")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock '{0}'")]
    InvalidHalfmoveClock(String),
}
