//! Engine controller implementation.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    select_move, Color, FenError, GameResult, Move, MoveParseError, PieceKind, Position,
    SearchConfig, START_FEN,
};

/// One game from the point of view of the side the engine plays.
///
/// Opponent (and own, once echoed back) moves arrive as text and are made
/// with result tracking; `choose_move` searches the current position.
#[derive(Debug)]
pub struct Engine {
    position: Position,
    start_fen: String,
    color: Color,
    config: SearchConfig,
    rng: StdRng,
    played: Vec<Move>,
}

impl Engine {
    /// Start a game from `fen` (or `"startpos"`) with the engine playing `color`.
    pub fn new(fen: &str, color: Color, config: SearchConfig) -> Result<Self, FenError> {
        let start_fen = if fen.trim() == "startpos" {
            START_FEN.to_string()
        } else {
            fen.trim().to_string()
        };
        let position = Position::try_from_fen(&start_fen)?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        debug!("new game as {color} from {start_fen}");
        Ok(Engine {
            position,
            start_fen,
            color,
            config,
            rng,
            played: Vec::new(),
        })
    }

    /// Start a game from the standard initial position.
    #[must_use]
    pub fn from_start(color: Color, config: SearchConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Engine {
            position: Position::new(),
            start_fen: START_FEN.to_string(),
            color,
            config,
            rng,
            played: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Moves made since the start position, oldest first.
    #[must_use]
    pub fn moves_played(&self) -> &[Move] {
        &self.played
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.position.result()
    }

    /// Make one move given as text (`e2e4`, `e7e8q`) for the side to move.
    pub fn apply_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.position.parse_move(text.trim()).map_err(|err| {
            warn!("rejected move '{text}': {err}");
            err
        })?;
        self.position.make_move(mv, true);
        self.played.push(mv);
        if let Some(result) = self.position.result() {
            debug!("game over after {mv}: {result}");
        }
        Ok(mv)
    }

    /// Make several moves in order, stopping at the first bad one.
    pub fn apply_moves<I, S>(&mut self, moves: I) -> Result<(), MoveParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in moves {
            self.apply_move(text.as_ref())?;
        }
        Ok(())
    }

    /// Bring the game in line with the full move list of the game so far.
    ///
    /// Only moves beyond those already made are applied. If the list does not
    /// extend the moves made so far the game is replayed from the start.
    pub fn sync_moves<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<(), MoveParseError> {
        let extends = moves.len() >= self.played.len()
            && self
                .played
                .iter()
                .zip(moves)
                .all(|(&mv, text)| same_move(mv, text.as_ref()));

        if !extends {
            warn!(
                "move list diverges from the {} move(s) played, replaying from the start",
                self.played.len()
            );
            self.reset();
            return self.apply_moves(moves);
        }
        let seen = self.played.len();
        self.apply_moves(&moves[seen..])
    }

    /// Return to the start position.
    pub fn reset(&mut self) {
        while !self.played.is_empty() {
            self.position.unmake_move();
            self.played.pop();
        }
    }

    /// Search the current position. `None` when the game is over or it is
    /// not the engine's turn.
    pub fn choose_move(&mut self) -> Option<Move> {
        if self.position.side_to_move() != self.color {
            warn!("asked for a move while it is {}'s turn", self.position.side_to_move());
            return None;
        }
        select_move(&mut self.position, &self.config, &mut self.rng)
    }

    /// Choose a move and make it.
    pub fn play_move(&mut self) -> Option<Move> {
        let mv = self.choose_move()?;
        self.position.make_move(mv, true);
        self.played.push(mv);
        Some(mv)
    }

    /// FEN the game started from.
    #[must_use]
    pub fn start_fen(&self) -> &str {
        &self.start_fen
    }
}

/// Text without a promotion letter matches a queen promotion.
fn same_move(mv: Move, text: &str) -> bool {
    let text = text.trim();
    let played = mv.to_string();
    played == text
        || (mv.promotion() == Some(PieceKind::Queen) && text.len() == 4 && played.starts_with(text))
}
