//! Game controller behavior through the public API.

use kestrel_chess::board::{FenError, MoveParseError, START_FEN};
use kestrel_chess::{Color, Engine, GameResult, Position, SearchConfig};

fn seeded() -> SearchConfig {
    SearchConfig::default().with_depth(2).with_seed(1234)
}

#[test]
fn startpos_alias() {
    let engine = Engine::new("startpos", Color::White, seeded()).unwrap();
    assert_eq!(engine.start_fen(), START_FEN);
    assert_eq!(engine.position(), &Position::new());
    assert_eq!(engine.color(), Color::White);
    assert!(engine.moves_played().is_empty());
}

#[test]
fn bad_fen_is_rejected() {
    let err = Engine::new("not a fen", Color::White, seeded()).unwrap_err();
    assert!(matches!(err, FenError::TooFewParts { .. }));

    let err = Engine::new("8/8/8/8/8/8/8/8 w - - 0 1", Color::Black, seeded()).unwrap_err();
    assert!(matches!(err, FenError::KingCount { .. }));
}

#[test]
fn apply_move_validates() {
    let mut engine = Engine::from_start(Color::Black, seeded());
    assert!(matches!(
        engine.apply_move("e2e5"),
        Err(MoveParseError::IllegalMove { .. })
    ));
    assert!(matches!(
        engine.apply_move("e2"),
        Err(MoveParseError::InvalidLength { .. })
    ));
    // A black move while white is to move
    assert!(engine.apply_move("e7e5").is_err());
    assert!(engine.moves_played().is_empty());

    let mv = engine.apply_move("e2e4").unwrap();
    assert_eq!(mv.to_string(), "e2e4");
    assert_eq!(engine.moves_played(), &[mv]);
}

#[test]
fn sync_moves_applies_only_new_suffix() {
    let mut engine = Engine::from_start(Color::White, seeded());
    engine.sync_moves(&["e2e4", "e7e5"]).unwrap();
    assert_eq!(engine.moves_played().len(), 2);

    engine.sync_moves(&["e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(engine.moves_played().len(), 3);

    // Repeating the same list changes nothing.
    engine.sync_moves(&["e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(engine.moves_played().len(), 3);

    let mut expected = Position::new();
    for uci in ["e2e4", "e7e5", "g1f3"] {
        expected.make_move_uci(uci).unwrap();
    }
    assert_eq!(engine.position().to_fen(), expected.to_fen());
}

#[test]
fn sync_moves_replays_on_divergence() {
    let mut engine = Engine::from_start(Color::White, seeded());
    engine.sync_moves(&["e2e4", "e7e5"]).unwrap();
    engine.sync_moves(&["d2d4", "d7d5"]).unwrap();

    let played: Vec<String> = engine.moves_played().iter().map(|m| m.to_string()).collect();
    assert_eq!(played, ["d2d4", "d7d5"]);

    let mut expected = Position::new();
    expected.make_move_uci("d2d4").unwrap();
    expected.make_move_uci("d7d5").unwrap();
    assert_eq!(engine.position(), &expected);

    engine.sync_moves::<&str>(&[]).unwrap();
    assert_eq!(engine.position(), &Position::new());
}

#[test]
fn sync_moves_accepts_promotion_without_letter() {
    let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";
    let mut engine = Engine::new(fen, Color::Black, seeded()).unwrap();
    engine.sync_moves(&["a7a8"]).unwrap();
    engine.sync_moves(&["a7a8q", "e8d7"]).unwrap();
    assert_eq!(engine.moves_played().len(), 2);
}

#[test]
fn choose_move_only_on_own_turn() {
    let mut engine = Engine::from_start(Color::Black, seeded());
    assert_eq!(engine.choose_move(), None);

    engine.apply_move("e2e4").unwrap();
    let mv = engine.choose_move().expect("black has moves");
    assert!(engine.position().clone().legal_moves().contains(&mv));
    // Choosing does not make the move.
    assert_eq!(engine.moves_played().len(), 1);
}

#[test]
fn play_move_makes_the_move() {
    let mut engine = Engine::from_start(Color::White, seeded());
    let mv = engine.play_move().unwrap();
    assert_eq!(engine.moves_played(), &[mv]);
    assert_eq!(engine.position().side_to_move(), Color::Black);
    assert_eq!(engine.play_move(), None);
}

#[test]
fn no_move_after_game_over() {
    let fen = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2";
    let mut engine = Engine::new(fen, Color::White, seeded()).unwrap();
    engine.apply_move("d8h4").unwrap();
    assert_eq!(engine.result(), Some(GameResult::BlackWins));
    assert_eq!(engine.choose_move(), None);
}

#[test]
fn same_seed_plays_same_game() {
    let play = || {
        let mut white = Engine::from_start(Color::White, seeded().with_threshold(100));
        let mut black = Engine::from_start(Color::Black, seeded().with_threshold(100));
        let mut moves = Vec::new();
        for ply in 0..6 {
            let (mover, other) = if ply % 2 == 0 {
                (&mut white, &mut black)
            } else {
                (&mut black, &mut white)
            };
            let Some(mv) = mover.play_move() else { break };
            other.apply_move(&mv.to_string()).unwrap();
            moves.push(mv);
        }
        moves
    };
    assert_eq!(play(), play());
}

#[test]
fn reset_returns_to_start() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let mut engine = Engine::new(fen, Color::White, seeded()).unwrap();
    engine.apply_moves(["e1g1", "e8c8"]).unwrap();
    engine.reset();
    assert_eq!(engine.position(), &Position::from_fen(fen));
    assert!(engine.moves_played().is_empty());
}
