//! Fixed-depth tree search with a single pruning bound.

use log::warn;

use super::constants::{INFINITY, MATE_SCORE};
use super::SearchStats;
use crate::board::state::Position;
use crate::board::types::Color;

/// State of one search from the engine side's point of view.
pub(crate) struct SearchContext<'a> {
    pub pos: &'a mut Position,
    /// Side the scores are computed for
    pub engine: Color,
    pub stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(pos: &'a mut Position, engine: Color) -> Self {
        SearchContext {
            pos,
            engine,
            stats: SearchStats::default(),
        }
    }

    /// Score of the current position, `ply` plies below the root.
    ///
    /// A maximizing node (engine to move) whose running best reaches `bound`
    /// returns `INFINITY`; a minimizing node whose best falls to `bound`
    /// returns `-INFINITY`. The caller's current best is passed down as the
    /// bound, so a cut branch can never be chosen above it.
    pub(crate) fn search(&mut self, depth: u32, ply: u32, bound: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            if let Some(score) = self.terminal_score(ply) {
                return score;
            }
            self.stats.leaves += 1;
            return self.pos.evaluate(self.engine);
        }

        let moves = self.pos.legal_moves();
        if moves.is_empty() {
            return self.no_moves_score(ply);
        }
        if self.pos.is_draw_by_rule() {
            return 0;
        }

        let mover = self.pos.side_to_move();
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            self.pos.make_move(mv, false);
            if self.pos.king_attacked(mover) {
                warn!("search: generated move {mv} leaves the king in check");
                self.pos.unmake_move();
                continue;
            }
            let score = self.search(depth - 1, ply + 1, best, !maximizing);
            self.pos.unmake_move();

            if maximizing {
                best = best.max(score);
                if best >= bound {
                    self.stats.cutoffs += 1;
                    return INFINITY;
                }
            } else {
                best = best.min(score);
                if best <= bound {
                    self.stats.cutoffs += 1;
                    return -INFINITY;
                }
            }
        }
        best
    }

    fn terminal_score(&mut self, ply: u32) -> Option<i32> {
        if !self.pos.has_legal_move() {
            return Some(self.no_moves_score(ply));
        }
        if self.pos.is_draw_by_rule() {
            return Some(0);
        }
        None
    }

    /// Checkmate or stalemate of the side to move.
    fn no_moves_score(&self, ply: u32) -> i32 {
        if !self.pos.in_check() {
            return 0;
        }
        let mate = MATE_SCORE - ply as i32;
        if self.pos.side_to_move() == self.engine {
            -mate
        } else {
            mate
        }
    }
}
