//! Precomputed move geometry.
//!
//! Every table is a pure function of the square (and color for pawns) and is
//! built exactly once, on first use, into an immutable `MoveTables` value that
//! positions borrow as `&'static`.

use once_cell::sync::Lazy;

use super::types::{CastleSide, Color, Square};

/// Ray directions as (rank delta, file delta): four orthogonal, then four diagonal.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ORTHOGONAL: std::ops::Range<usize> = 0..4;
pub(crate) const DIAGONAL: std::ops::Range<usize> = 4..8;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

static TABLES: Lazy<MoveTables> = Lazy::new(MoveTables::build);

/// Squares and pieces involved in one castling move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingPath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook
    pub must_be_empty: Vec<Square>,
    /// King origin, crossing and destination squares
    pub must_not_be_attacked: Vec<Square>,
}

/// Square-indexed move geometry for every piece type.
#[derive(Debug)]
pub struct MoveTables {
    rays: [[Vec<Square>; 8]; 64],
    knight: [Vec<Square>; 64],
    king: [Vec<Square>; 64],
    pawn_advance: [[Option<Square>; 64]; 2],
    pawn_double: [[Option<Square>; 64]; 2],
    pawn_capture: [[Vec<Square>; 64]; 2],
    castling: [[CastlingPath; 2]; 2],
}

impl MoveTables {
    /// The process-wide tables, built on first access.
    #[must_use]
    pub fn get() -> &'static MoveTables {
        &TABLES
    }

    fn build() -> Self {
        MoveTables {
            rays: std::array::from_fn(|sq| std::array::from_fn(|dir| ray(square(sq), dir))),
            knight: std::array::from_fn(|sq| leaps(square(sq), &KNIGHT_DELTAS)),
            king: std::array::from_fn(|sq| leaps(square(sq), &DIRECTIONS)),
            pawn_advance: std::array::from_fn(|c| {
                let color = Color::BOTH[c];
                std::array::from_fn(|sq| pawn_advance(color, square(sq)))
            }),
            pawn_double: std::array::from_fn(|c| {
                let color = Color::BOTH[c];
                std::array::from_fn(|sq| pawn_double(color, square(sq)))
            }),
            pawn_capture: std::array::from_fn(|c| {
                let color = Color::BOTH[c];
                std::array::from_fn(|sq| pawn_captures(color, square(sq)))
            }),
            castling: std::array::from_fn(|c| {
                let color = Color::BOTH[c];
                std::array::from_fn(|s| castling_path(color, CastleSide::BOTH[s]))
            }),
        }
    }

    /// Squares from `sq` outward to the edge in direction `dir`, nearest first.
    #[inline]
    #[must_use]
    pub fn ray(&self, sq: Square, dir: usize) -> &[Square] {
        &self.rays[sq.index()][dir]
    }

    #[inline]
    #[must_use]
    pub fn knight(&self, sq: Square) -> &[Square] {
        &self.knight[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn king(&self, sq: Square) -> &[Square] {
        &self.king[sq.index()]
    }

    /// Single-step advance, `None` on the promotion rank.
    #[inline]
    #[must_use]
    pub fn pawn_advance(&self, color: Color, sq: Square) -> Option<Square> {
        self.pawn_advance[color.index()][sq.index()]
    }

    /// Two-step advance, only from the pawn's start rank.
    #[inline]
    #[must_use]
    pub fn pawn_double(&self, color: Color, sq: Square) -> Option<Square> {
        self.pawn_double[color.index()][sq.index()]
    }

    /// Diagonal capture squares of a `color` pawn standing on `sq`.
    #[inline]
    #[must_use]
    pub fn pawn_captures(&self, color: Color, sq: Square) -> &[Square] {
        &self.pawn_capture[color.index()][sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn castling(&self, color: Color, side: CastleSide) -> &CastlingPath {
        &self.castling[color.index()][side.index()]
    }
}

fn square(idx: usize) -> Square {
    Square::from_index_unchecked(idx as u8)
}

fn ray(from: Square, dir: usize) -> Vec<Square> {
    let (dr, df) = DIRECTIONS[dir];
    let mut squares = Vec::with_capacity(7);
    let mut current = from;
    while let Some(next) = current.offset(dr, df) {
        squares.push(next);
        current = next;
    }
    squares
}

fn leaps(from: Square, deltas: &[(i8, i8)]) -> Vec<Square> {
    deltas
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .collect()
}

fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn pawn_advance(color: Color, sq: Square) -> Option<Square> {
    if sq.rank() == color.promotion_rank() {
        return None;
    }
    sq.offset(forward(color), 0)
}

fn pawn_double(color: Color, sq: Square) -> Option<Square> {
    if sq.rank() != color.pawn_start_rank() {
        return None;
    }
    sq.offset(2 * forward(color), 0)
}

fn pawn_captures(color: Color, sq: Square) -> Vec<Square> {
    if sq.rank() == color.promotion_rank() {
        return Vec::new();
    }
    leaps(sq, &[(forward(color), -1), (forward(color), 1)])
}

fn castling_path(color: Color, side: CastleSide) -> CastlingPath {
    let rank = color.back_rank();
    let at = |file: u8| Square::at(rank, file);
    match side {
        CastleSide::King => CastlingPath {
            king_from: at(4),
            king_to: at(6),
            rook_from: at(7),
            rook_to: at(5),
            must_be_empty: vec![at(5), at(6)],
            must_not_be_attacked: vec![at(4), at(5), at(6)],
        },
        CastleSide::Queen => CastlingPath {
            king_from: at(4),
            king_to: at(2),
            rook_from: at(0),
            rook_to: at(3),
            must_be_empty: vec![at(1), at(2), at(3)],
            must_not_be_attacked: vec![at(4), at(3), at(2)],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_rook_rays_from_corner() {
        let tables = MoveTables::get();
        assert_eq!(tables.ray(sq("a1"), 0).len(), 7);
        assert_eq!(tables.ray(sq("a1"), 0)[0], sq("a2"));
        assert_eq!(tables.ray(sq("a1"), 1).len(), 0);
        assert_eq!(tables.ray(sq("a1"), 2).last(), Some(&sq("h1")));
    }

    #[test]
    fn test_diagonal_ray_order() {
        let tables = MoveTables::get();
        let ne = tables.ray(sq("c1"), 4);
        assert_eq!(ne, &[sq("d2"), sq("e3"), sq("f4"), sq("g5"), sq("h6")]);
    }

    #[test]
    fn test_knight_counts() {
        let tables = MoveTables::get();
        assert_eq!(tables.knight(sq("a1")).len(), 2);
        assert_eq!(tables.knight(sq("e4")).len(), 8);
        assert_eq!(tables.knight(sq("h5")).len(), 4);
    }

    #[test]
    fn test_king_counts() {
        let tables = MoveTables::get();
        assert_eq!(tables.king(sq("h8")).len(), 3);
        assert_eq!(tables.king(sq("d4")).len(), 8);
    }

    #[test]
    fn test_pawn_tables() {
        let tables = MoveTables::get();
        assert_eq!(tables.pawn_advance(Color::White, sq("e2")), Some(sq("e3")));
        assert_eq!(tables.pawn_double(Color::White, sq("e2")), Some(sq("e4")));
        assert_eq!(tables.pawn_double(Color::White, sq("e3")), None);
        assert_eq!(tables.pawn_double(Color::Black, sq("d7")), Some(sq("d5")));
        assert_eq!(tables.pawn_captures(Color::White, sq("a2")), &[sq("b3")]);
        assert_eq!(tables.pawn_captures(Color::Black, sq("e5")).len(), 2);
        assert_eq!(tables.pawn_advance(Color::Black, sq("c1")), None);
    }

    #[test]
    fn test_castling_paths() {
        let tables = MoveTables::get();
        let path = tables.castling(Color::Black, CastleSide::Queen);
        assert_eq!(path.king_to, sq("c8"));
        assert_eq!(path.rook_from, sq("a8"));
        assert_eq!(path.rook_to, sq("d8"));
        assert!(path.must_be_empty.contains(&sq("b8")));
        assert!(!path.must_not_be_attacked.contains(&sq("b8")));
    }
}
