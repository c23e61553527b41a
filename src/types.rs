//! Core tagged enumerations: colors, piece kinds, and the 12 colored pieces.
//!
//! Pieces, colors, and move types are finite tagged enumerations; dispatch is
//! by table lookup or a small match over the tag, no vtables required.

use std::ops::Not;

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const COUNT: usize = 2;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Kind-without-color: `piece as u8 % 6`.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PieceType {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl PieceType {
    pub const COUNT: usize = 6;
    pub const ALL: [PieceType; 6] = [Self::King, Self::Queen, Self::Rook, Self::Bishop, Self::Knight, Self::Pawn];
    /// Sliding pieces, which need occupancy-dependent attack resolution.
    pub const SLIDERS: [PieceType; 3] = [Self::Queen, Self::Rook, Self::Bishop];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The 12 colored pieces, laid out `{W_KING..W_PAWN, B_KING..B_PAWN}` so that
/// `color(p) = p < 6 ? White : Black` and opposite-color same-role pieces
/// differ by exactly 6.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    WhiteKing = 0,
    WhiteQueen = 1,
    WhiteRook = 2,
    WhiteBishop = 3,
    WhiteKnight = 4,
    WhitePawn = 5,
    BlackKing = 6,
    BlackQueen = 7,
    BlackRook = 8,
    BlackBishop = 9,
    BlackKnight = 10,
    BlackPawn = 11,
}

impl Piece {
    pub const COUNT: usize = 12;
    pub const ALL: [Piece; 12] = [
        Self::WhiteKing,
        Self::WhiteQueen,
        Self::WhiteRook,
        Self::WhiteBishop,
        Self::WhiteKnight,
        Self::WhitePawn,
        Self::BlackKing,
        Self::BlackQueen,
        Self::BlackRook,
        Self::BlackBishop,
        Self::BlackKnight,
        Self::BlackPawn,
    ];

    #[inline]
    pub const fn new(color: Color, kind: PieceType) -> Self {
        let idx = kind.index() as u8 + 6 * color.index() as u8;
        // Safety: idx is always in 0..12, a valid Piece discriminant.
        unsafe { std::mem::transmute(idx) }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn color(self) -> Color {
        if (self as u8) < 6 { Color::White } else { Color::Black }
    }

    #[inline]
    pub const fn kind(self) -> PieceType {
        let idx = (self as u8) % 6;
        // Safety: idx is always in 0..6, a valid PieceType discriminant.
        unsafe { std::mem::transmute(idx) }
    }

    pub const fn to_char(self) -> char {
        let c = match self.kind() {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        if matches!(self.color(), Color::White) { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        Some(Self::new(color, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_of_piece_matches_layout() {
        assert_eq!(Piece::WhiteKing.color(), Color::White);
        assert_eq!(Piece::BlackPawn.color(), Color::Black);
    }

    #[test]
    fn same_role_opposite_color_differ_by_six() {
        for kind in PieceType::ALL {
            let white = Piece::new(Color::White, kind);
            let black = Piece::new(Color::Black, kind);
            assert_eq!(black.index() - white.index(), 6);
        }
    }

    #[test]
    fn char_roundtrip() {
        for p in Piece::ALL {
            assert_eq!(Piece::from_char(p.to_char()), Some(p));
        }
    }

    #[test]
    fn not_flips_color() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }
}
