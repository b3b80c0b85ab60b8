//! King steps.

use super::sq;
use crate::board::{all_coordinates, is_legal_king_move, square_from_coordinate};

#[test]
fn test_king_non_move() {
    assert!(!is_legal_king_move(sq("e1"), sq("e1")));
}

#[test]
fn test_king_from_e1() {
    let expected = ["d1", "d2", "e2", "f1", "f2"];
    let src = sq("e1");

    for coord in all_coordinates() {
        let dst = square_from_coordinate(coord.as_str()).unwrap();
        assert_eq!(
            is_legal_king_move(src, dst),
            expected.contains(&coord.as_str()),
            "king e1 -> {coord}"
        );
    }
}

#[test]
fn test_king_diagonals_from_e2() {
    for dst in ["d1", "d3", "f1", "f3"] {
        assert!(is_legal_king_move(sq("e2"), sq(dst)), "king e2 -> {dst}");
    }
}

#[test]
fn test_king_two_steps() {
    assert!(!is_legal_king_move(sq("e1"), sq("e3")));
    assert!(!is_legal_king_move(sq("e1"), sq("c1")));
}
