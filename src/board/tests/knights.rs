//! Knight jumps.

use super::sq;
use crate::board::{all_coordinates, is_legal_knight_move, square_from_coordinate};

#[test]
fn test_knight_non_move() {
    assert!(!is_legal_knight_move(sq("a1"), sq("a1")));
    assert!(!is_legal_knight_move(sq("c3"), sq("c3")));
}

#[test]
fn test_knight_from_c3_has_exactly_eight_targets() {
    let expected = ["b1", "a2", "a4", "b5", "d5", "e4", "e2", "d1"];
    let src = sq("c3");

    for coord in all_coordinates() {
        let dst = square_from_coordinate(coord.as_str()).unwrap();
        let legal = is_legal_knight_move(src, dst);
        assert_eq!(
            legal,
            expected.contains(&coord.as_str()),
            "knight c3 -> {coord}"
        );
    }
}

#[test]
fn test_knight_from_corner() {
    assert!(is_legal_knight_move(sq("a1"), sq("b3")));
    assert!(is_legal_knight_move(sq("a1"), sq("c2")));
    assert!(!is_legal_knight_move(sq("a1"), sq("b2")));
    assert!(!is_legal_knight_move(sq("a1"), sq("c3")));
}
