use move_validator::board::prelude::*;
use move_validator::board::{
    is_legal_bishop_move, is_legal_king_move, is_legal_knight_move, is_legal_pawn_move,
    is_legal_queen_move, is_legal_rook_move,
};

fn square(coordinate: &str) -> Square {
    square_from_coordinate(coordinate).expect("valid coordinate")
}

#[test]
fn documented_examples_hold() {
    assert!(!is_legal_rook_move(square("a1"), square("a1")));
    assert!(is_legal_rook_move(square("a1"), square("a7")));
    assert!(is_legal_rook_move(square("a1"), square("b1")));
    assert!(!is_legal_rook_move(square("a1"), square("b4")));

    assert!(!is_legal_bishop_move(square("a1"), square("a1")));
    assert!(!is_legal_bishop_move(square("d3"), square("h8")));
    assert!(is_legal_bishop_move(square("d3"), square("h7")));

    assert!(is_legal_queen_move(square("a1"), square("c3")));
    assert!(is_legal_queen_move(square("a1"), square("a3")));
    assert!(!is_legal_queen_move(square("a1"), square("c4")));

    assert!(is_legal_knight_move(square("c3"), square("e4")));
    assert!(!is_legal_knight_move(square("c3"), square("c3")));

    assert!(is_legal_king_move(square("e1"), square("e2")));
    assert!(!is_legal_king_move(square("e1"), square("e3")));
    assert!(!is_legal_king_move(square("e1"), square("c1")));

    assert!(is_legal_pawn_move(square("e2"), square("e4")));
    assert!(is_legal_pawn_move(square("c7"), square("c5")));
    assert!(!is_legal_pawn_move(square("e3"), square("e5")));
    assert!(is_legal_pawn_move(square("d4"), square("d5")));
    assert!(is_legal_pawn_move(square("e5"), square("f6")));
}

#[test]
fn piece_kind_selects_a_predicate() {
    let kind = PieceKind::from_char('n').unwrap();
    assert_eq!(kind, PieceKind::BLACK_KNIGHT);
    assert_eq!(is_legal_move_between(kind.piece, "g8", "f6"), Ok(true));
}

#[test]
fn coordinate_list_is_readable_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                all_coordinates()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let coords = handle.join().unwrap();
        assert_eq!(coords.len(), 64);
        assert_eq!(coords[0], "a1");
        assert_eq!(coords[63], "h8");
    }
}
