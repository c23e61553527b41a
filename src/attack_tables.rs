//! Attack table construction and the "blockers-and-beyond" sliding-attack
//! resolution scheme.
//!
//! Four tables are built once at process start and never mutated again:
//! - `attack_on_empty[kind][sq]`: squares a piece of `kind` attacks from
//!   `sq` on an otherwise empty board (king, queen, rook, bishop, knight).
//! - `blocker_mask[kind][sq]`: candidate blocker squares along `kind`'s rays
//!   from `sq`, excluding the outermost ray square and `sq` itself (queen,
//!   rook, bishop only).
//! - `behind_mask[from][to]`: squares strictly beyond `to` along the
//!   from-to ray, zero if `from`/`to` are not collinear on a queen line.
//! - `pawn_attacks[color][sq]`: the squares a pawn on `sq` attacks, computed
//!   directly rather than via blockers (pawn captures never depend on what's
//!   beyond the target square).
//!
//! Sliding attacks against a real occupancy are resolved by starting from
//! `attack_on_empty` and, for every blocker actually on the board, clearing
//! everything behind it: see `AttackTables::sliding_attacks`.

use std::sync::OnceLock;

use crate::bitboard::Bitboard;
use crate::square::Square;
use crate::types::{Color, PieceType};

const KING_DELTAS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const KNIGHT_DELTAS: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
const BISHOP_DELTAS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub struct AttackTables {
    attack_on_empty: [[Bitboard; 64]; PieceType::COUNT],
    blocker_mask: [[Bitboard; 64]; PieceType::COUNT],
    behind_mask: [[Bitboard; 64]; 64],
    pawn_attacks: [[Bitboard; 64]; Color::COUNT],
}

static TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Returns the process-wide attack tables, building them on first use.
///
/// `OnceLock::get_or_init` establishes the happens-before edge required by
/// spec: every thread that reads the returned reference observes the fully
/// initialized tables, and initialization runs exactly once.
pub fn tables() -> &'static AttackTables {
    TABLES.get_or_init(AttackTables::build)
}

impl AttackTables {
    fn build() -> Self {
        let mut attack_on_empty = [[Bitboard::EMPTY; 64]; PieceType::COUNT];
        let mut blocker_mask = [[Bitboard::EMPTY; 64]; PieceType::COUNT];
        let mut behind_mask = [[Bitboard::EMPTY; 64]; 64];
        let mut pawn_attacks = [[Bitboard::EMPTY; 64]; Color::COUNT];

        for sq in Square::ALL {
            let rank = sq.rank() as i8;
            let file = sq.file() as i8;

            attack_on_empty[PieceType::King.index()][sq.index()] = leaper_attacks(rank, file, &KING_DELTAS);
            attack_on_empty[PieceType::Knight.index()][sq.index()] = leaper_attacks(rank, file, &KNIGHT_DELTAS);

            let rook_on_empty = rank_bb(sq.rank()) ^ file_bb(sq.file());
            let bishop_on_empty = slider_ray_union(rank, file, &BISHOP_DELTAS);
            attack_on_empty[PieceType::Rook.index()][sq.index()] = rook_on_empty;
            attack_on_empty[PieceType::Bishop.index()][sq.index()] = bishop_on_empty;
            attack_on_empty[PieceType::Queen.index()][sq.index()] = rook_on_empty | bishop_on_empty;

            let rook_blockers = (file_bb(sq.file()) & !Bitboard::rank_1() & !Bitboard::rank_8())
                | (rank_bb(sq.rank()) & !Bitboard::file_a() & !Bitboard::file_h());
            let rook_blockers = rook_blockers.without(sq);
            let bishop_blockers = bishop_on_empty & Bitboard::interior();
            blocker_mask[PieceType::Rook.index()][sq.index()] = rook_blockers;
            blocker_mask[PieceType::Bishop.index()][sq.index()] = bishop_blockers;
            blocker_mask[PieceType::Queen.index()][sq.index()] = rook_blockers | bishop_blockers;

            pawn_attacks[Color::White.index()][sq.index()] = pawn_attack_targets(rank, file, 1);
            pawn_attacks[Color::Black.index()][sq.index()] = pawn_attack_targets(rank, file, -1);

            for to in Square::ALL {
                behind_mask[sq.index()][to.index()] = compute_behind_mask(sq, to);
            }
        }

        Self { attack_on_empty, blocker_mask, behind_mask, pawn_attacks }
    }

    #[inline]
    pub fn attack_on_empty(&self, kind: PieceType, sq: Square) -> Bitboard {
        self.attack_on_empty[kind.index()][sq.index()]
    }

    #[inline]
    pub fn blocker_mask(&self, kind: PieceType, sq: Square) -> Bitboard {
        self.blocker_mask[kind.index()][sq.index()]
    }

    #[inline]
    pub fn behind_mask(&self, from: Square, to: Square) -> Bitboard {
        self.behind_mask[from.index()][to.index()]
    }

    #[inline]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn_attacks[color.index()][sq.index()]
    }

    #[inline]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.attack_on_empty(PieceType::King, sq)
    }

    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.attack_on_empty(PieceType::Knight, sq)
    }

    /// Resolves the attacks of a sliding piece of `kind` on `sq` against
    /// occupancy `occ` using the blockers-and-beyond method: start from the
    /// on-empty attack set, then for every blocker actually present, clear
    /// everything strictly beyond it. The result includes the blocker's own
    /// square (so it covers captures of either color); callers filter
    /// friend-occupied destinations.
    pub fn sliding_attacks(&self, kind: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
        let mut attacks = self.attack_on_empty(kind, sq);
        for blocker in (occ & self.blocker_mask(kind, sq)).iter() {
            attacks &= !self.behind_mask(sq, blocker);
        }
        attacks
    }
}

fn rank_bb(rank: u8) -> Bitboard {
    Bitboard(0x0000_0000_0000_00FFu64 << (rank * 8))
}

fn file_bb(file: u8) -> Bitboard {
    Bitboard(0x0101_0101_0101_0101u64 << file)
}

fn in_bounds(rank: i8, file: i8) -> bool {
    (0..8).contains(&rank) && (0..8).contains(&file)
}

fn leaper_attacks(rank: i8, file: i8, deltas: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for &(dr, df) in deltas {
        let (tr, tf) = (rank + dr, file + df);
        if in_bounds(tr, tf) {
            bb |= Square::from_rank_file(tr as u8, tf as u8).bb();
        }
    }
    bb
}

fn slider_ray_union(rank: i8, file: i8, deltas: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for &(dr, df) in deltas {
        let (mut tr, mut tf) = (rank + dr, file + df);
        while in_bounds(tr, tf) {
            bb |= Square::from_rank_file(tr as u8, tf as u8).bb();
            tr += dr;
            tf += df;
        }
    }
    bb
}

/// White pawn on `sq` attacks `sq+7`/`sq+9`; black attacks `sq-9`/`sq-7`.
/// Built here with explicit file-adjacency checks (rather than the raw
/// `1 << (sq +/- 7/9)` formula) so no bit lands on a non-adjacent file
/// through wraparound -- see the crate's design notes on this point.
fn pawn_attack_targets(rank: i8, file: i8, forward: i8) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    let tr = rank + forward;
    if in_bounds(tr, 0) {
        for df in [-1, 1] {
            let tf = file + df;
            if (0..8).contains(&tf) {
                bb |= Square::from_rank_file(tr as u8, tf as u8).bb();
            }
        }
    }
    bb
}

fn compute_behind_mask(from: Square, to: Square) -> Bitboard {
    if from == to {
        return Bitboard::EMPTY;
    }
    let dr = to.rank() as i8 - from.rank() as i8;
    let df = to.file() as i8 - from.file() as i8;
    let collinear = dr == 0 || df == 0 || dr.abs() == df.abs();
    if !collinear {
        return Bitboard::EMPTY;
    }
    let (step_r, step_f) = (dr.signum(), df.signum());
    let mut bb = Bitboard::EMPTY;
    let (mut r, mut f) = (to.rank() as i8 + step_r, to.file() as i8 + step_f);
    while in_bounds(r, f) {
        bb |= Square::from_rank_file(r as u8, f as u8).bb();
        r += step_r;
        f += step_f;
    }
    bb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_rook_on_empty_covers_file_and_rank() {
        let t = tables();
        let attacks = t.attack_on_empty(PieceType::Rook, Square::new(0));
        assert_eq!(attacks.popcount(), 14);
    }

    #[test]
    fn corner_bishop_on_empty_is_the_long_diagonal() {
        let t = tables();
        let attacks = t.attack_on_empty(PieceType::Bishop, Square::new(0));
        assert_eq!(attacks.popcount(), 7);
    }

    #[test]
    fn rook_blocker_mask_excludes_edges_and_self() {
        let t = tables();
        let mask = t.blocker_mask(PieceType::Rook, Square::new(27)); // d4
        assert!(!mask.contains(Square::new(27)));
        assert!(!mask.contains(Square::new(24))); // a4, edge of rank
        assert!(!mask.contains(Square::new(3))); // d1, edge of file
    }

    #[test]
    fn behind_mask_is_empty_for_non_collinear_pairs() {
        assert_eq!(compute_behind_mask(Square::new(0), Square::new(10)), Bitboard::EMPTY);
    }

    #[test]
    fn behind_mask_extends_to_board_edge() {
        // a1 -> a4 (same file): behind is a5..a8.
        let bb = compute_behind_mask(Square::new(0), Square::new(24));
        assert_eq!(bb.popcount(), 4);
        assert!(bb.contains(Square::new(32)));
        assert!(bb.contains(Square::new(56)));
    }

    #[test]
    fn sliding_attacks_stop_at_first_blocker_each_direction() {
        let t = tables();
        // Rook on a1 (sq 0), blocker on a4 (sq 24, same file).
        let occ = Square::new(24).bb() | Square::new(0).bb();
        let attacks = t.sliding_attacks(PieceType::Rook, Square::new(0), occ);
        assert!(attacks.contains(Square::new(24))); // includes the blocker
        assert!(!attacks.contains(Square::new(32))); // nothing beyond it
        assert!(attacks.contains(Square::new(7))); // whole rank 1 still open
    }

    #[test]
    fn pawn_attacks_never_wrap_the_board() {
        let t = tables();
        // White pawn on h2 (sq 15) can only attack g3 (sq 22), not wrap to a3.
        let attacks = t.pawn_attacks(Color::White, Square::new(15));
        assert_eq!(attacks.popcount(), 1);
        assert!(attacks.contains(Square::new(22)));
    }
}
