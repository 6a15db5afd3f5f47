//! Evaluation tests: symmetry and term composition.

use crate::board::{evaluate, Color, Position};

/// Flip the board vertically and swap the colors of every piece.
fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let swap_case = |s: &str| -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect()
    };

    let placement: Vec<String> = parts[0].split('/').rev().map(swap_case).collect();
    let side = if parts[1] == "w" { "b" } else { "w" };
    let castling = if parts[2] == "-" {
        "-".to_string()
    } else {
        let swapped = swap_case(parts[2]);
        let mut sorted: Vec<char> = swapped.chars().collect();
        sorted.sort_by_key(|c| "KQkq".find(*c));
        sorted.into_iter().collect()
    };
    let ep = if parts[3] == "-" {
        "-".to_string()
    } else {
        let file = &parts[3][..1];
        let rank = if &parts[3][1..] == "3" { "6" } else { "3" };
        format!("{file}{rank}")
    };
    format!("{} {side} {castling} {ep} 0 1", placement.join("/"))
}

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "4k3/8/8/3p4/4P3/8/8/4K3 b - - 0 1",
];

#[test]
fn test_startpos_is_balanced() {
    let pos = Position::new();
    assert_eq!(pos.evaluate(Color::White), 0);
    assert_eq!(pos.evaluate(Color::Black), 0);
    let breakdown = pos.eval_breakdown();
    assert_eq!(breakdown.white, breakdown.black);
    assert!(!breakdown.endgame);
}

#[test]
fn test_evaluation_is_antisymmetric() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen);
        assert_eq!(
            pos.evaluate(Color::White),
            -pos.evaluate(Color::Black),
            "{fen}"
        );
    }
}

#[test]
fn test_mirrored_position_scores_the_same() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen);
        let mirrored = Position::from_fen(&mirror_fen(fen));
        assert_eq!(
            pos.evaluate(Color::White),
            mirrored.evaluate(Color::Black),
            "{fen}"
        );

        let a = pos.eval_breakdown();
        let b = mirrored.eval_breakdown();
        assert_eq!(a.white, b.black, "{fen}");
        assert_eq!(a.endgame, b.endgame, "{fen}");
    }
}

#[test]
fn test_breakdown_matches_evaluate() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen);
        let breakdown = pos.eval_breakdown();
        for color in Color::BOTH {
            assert_eq!(breakdown.score(color), evaluate(&pos, color), "{fen}");
        }
    }
}

#[test]
fn test_extra_queen_is_winning() {
    let pos = Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(pos.evaluate(Color::White) > 700);
    assert!(pos.evaluate(Color::Black) < -700);
}

#[test]
fn test_evaluation_does_not_modify_position() {
    let pos = Position::from_fen(POSITIONS[1]);
    let before = pos.clone();
    let _ = pos.eval_breakdown();
    assert_eq!(pos, before);
}

#[test]
fn test_mirror_helper() {
    assert_eq!(
        mirror_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1"),
        "4k3/8/8/4p3/8/8/8/4K3 w - e6 0 1"
    );
    assert_eq!(
        mirror_fen("r3k2r/8/8/8/8/8/8/R3K3 w Qkq - 0 1"),
        "r3k3/8/8/8/8/8/8/R3K2R b KQq - 0 1"
    );
}
