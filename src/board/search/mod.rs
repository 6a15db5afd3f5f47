//! Move selection.
//!
//! Features:
//! - Fixed-depth search from the engine side's point of view
//! - Single-bound pruning
//! - Root ordering by one-ply static evaluation
//! - Random choice among the candidates scoring within a band of the best

mod constants;
mod move_order;
mod params;
mod tree;

use log::{debug, trace};
use rand::Rng;

use super::state::Position;
use super::types::Move;
pub use constants::{INFINITY, MATE_SCORE, MATE_THRESHOLD};
pub use params::SearchConfig;

use move_order::order_by_static_eval;
use tree::SearchContext;

/// Counters collected during one move selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Static evaluations at the depth limit
    pub leaves: u64,
    /// Nodes abandoned at the bound
    pub cutoffs: u64,
}

/// Outcome of one move selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` when the game is over
    pub best_move: Option<Move>,
    /// Surviving candidates with their scores, best first
    pub shortlist: Vec<(Move, i32)>,
    pub stats: SearchStats,
}

/// Pick a move for the side to move.
///
/// Returns `None` when the game has a result or there is no legal move, and
/// the only legal move without searching when there is exactly one.
/// Otherwise every candidate is searched to `config.depth`, the best
/// `config.shortlist_size` are kept and one of those within
/// `config.threshold` of the best is chosen with `rng`. A negative threshold
/// counts as zero.
pub fn select_move<R: Rng>(
    pos: &mut Position,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    search_root(pos, config, rng).best_move
}

/// `select_move` with the shortlist and counters.
pub fn search_root<R: Rng>(
    pos: &mut Position,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    if let Some(result) = pos.result() {
        debug!("no move: game already decided ({result})");
        return SearchResult::default();
    }
    let moves = pos.legal_moves();
    match moves.as_slice() {
        [] => {
            debug!("no move: no legal moves");
            return SearchResult::default();
        }
        [only] => {
            debug!("single legal move {only}, skipping search");
            return SearchResult {
                best_move: Some(*only),
                ..SearchResult::default()
            };
        }
        _ => {}
    }

    let engine = pos.side_to_move();
    let depth = config.depth.max(1);
    let capacity = config.shortlist_size.max(1);
    let threshold = config.threshold.max(0);
    let ordered = order_by_static_eval(pos, &moves, engine);

    let mut ctx = SearchContext::new(pos, engine);
    let mut shortlist: Vec<(Move, i32)> = Vec::with_capacity(capacity + 1);
    for (mv, static_score) in ordered {
        let bound = shortlist
            .first()
            .map_or(-INFINITY, |&(_, top)| top.saturating_sub(threshold));

        ctx.pos.make_move(mv, false);
        let score = ctx.search(depth - 1, 1, bound, false);
        ctx.pos.unmake_move();
        trace!("candidate {mv}: static {static_score}, searched {}", describe_score(score));

        if score <= bound {
            continue;
        }
        let slot = shortlist
            .iter()
            .position(|&(_, s)| score > s)
            .unwrap_or(shortlist.len());
        if slot < capacity {
            shortlist.insert(slot, (mv, score));
            shortlist.truncate(capacity);
        }
    }

    let stats = ctx.stats;
    if let Some(&(_, top)) = shortlist.first() {
        shortlist.retain(|&(_, s)| s >= top.saturating_sub(threshold));
    }
    let best_move = if shortlist.is_empty() {
        None
    } else {
        Some(shortlist[rng.gen_range(0..shortlist.len())].0)
    };

    debug!(
        "depth {depth}: chose {} from {} candidate(s) ({} nodes, {} leaves, {} cutoffs)",
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        shortlist.len(),
        stats.nodes,
        stats.leaves,
        stats.cutoffs
    );

    SearchResult {
        best_move,
        shortlist,
        stats,
    }
}

fn describe_score(score: i32) -> String {
    if score.abs() >= INFINITY {
        "pruned".to_string()
    } else if score.abs() >= MATE_THRESHOLD {
        let plies = MATE_SCORE - score.abs();
        let sign = if score > 0 { "" } else { "-" };
        format!("mate {sign}{plies} plies")
    } else {
        format!("cp {score}")
    }
}
