/* =======================================================================
Sable is a chess playing engine.
Copyright (C) 2024-2025, The Sable developers

Sable is written in the Rust programming language. It is an original
work, not derived from any engine that came before it. However, it does
use a lot of concepts which are well-known and are in use by most if not
all classical alpha/beta-based chess engines.

Sable is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Sable is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.

You should have received a copy of the GNU General Public License along
with this program.  If not, see <http://www.gnu.org/licenses/>.
======================================================================= */

use crate::{
    board::{
        defs::{Pieces, Squares},
        Board,
    },
    defs::{Side, Sides, Square},
    misc::parse,
    movegen::{
        defs::{Move, MoveList},
        MoveGenerator,
    },
};

// Translate an incoming move string into one of the generated
// pseudo-legal moves for the given position. Accepts plain coordinate
// notation and the castling literals. Matching against the generated
// list guarantees that the returned move carries the right captured
// piece and special attribute; whether it is fully legal is decided by
// make_move, as always.
pub fn parse_usermove(
    board: &Board,
    side: Side,
    mg: &MoveGenerator,
    mv: &str,
) -> Option<Move> {
    let (from, to, promotion_letter) = match mv {
        "O-O" => (castling_source(side), castling_kingside_target(side), None),
        "O-O-O" => (castling_source(side), castling_queenside_target(side), None),
        _ => {
            let (from, to, letter) = parse::coordinate_move(mv).ok()?;
            (from, to, letter)
        }
    };

    let promotion = match promotion_letter {
        Some(letter) => parse::promotion_piece(letter, side)?,
        None => Pieces::NONE,
    };

    let mut list = MoveList::new();
    mg.all_moves(board, side, &mut list);

    let mut fallback: Option<Move> = None;
    for i in 0..list.len() {
        let m = list.get_move(i);
        if m.from() != from || m.to() != to {
            continue;
        }

        if m.promoted() == promotion {
            return Some(m);
        }

        // A promotion arriving without a piece letter defaults to the
        // queen.
        if promotion == Pieces::NONE && m.promoted() == Pieces::QUEENS[side] {
            fallback = Some(m);
        }
    }

    fallback
}

fn castling_source(side: Side) -> Square {
    if side == Sides::WHITE {
        Squares::E1
    } else {
        Squares::E8
    }
}

fn castling_kingside_target(side: Side) -> Square {
    if side == Sides::WHITE {
        Squares::G1
    } else {
        Squares::G8
    }
}

fn castling_queenside_target(side: Side) -> Square {
    if side == Sides::WHITE {
        Squares::C1
    } else {
        Squares::C8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usermoves_resolve_against_the_move_list() {
        let mg = MoveGenerator::new();
        let board = Board::starting_position();

        let m = parse_usermove(&board, Sides::WHITE, &mg, "e2e4").unwrap();
        assert_eq!(m.piece(), Pieces::WHITE_PAWN);
        assert_eq!(m.to_string(), "e2e4");

        assert!(parse_usermove(&board, Sides::WHITE, &mg, "e2e5").is_none());
        assert!(parse_usermove(&board, Sides::WHITE, &mg, "O-O").is_none());
        assert!(parse_usermove(&board, Sides::WHITE, &mg, "nonsense").is_none());
    }

    #[test]
    fn castling_literals_and_coordinates_both_resolve() {
        let mg = MoveGenerator::new();
        let mut board = Board::new();
        board
            .fen_read(Some("4k3/8/8/8/8/8/8/4K2R w K - 0 1"))
            .unwrap();

        let literal = parse_usermove(&board, Sides::WHITE, &mg, "O-O").unwrap();
        assert_ne!(literal.castling(), Pieces::NONE);

        let coordinate = parse_usermove(&board, Sides::WHITE, &mg, "e1g1").unwrap();
        assert_eq!(literal, coordinate);
    }

    #[test]
    fn bare_promotions_default_to_the_queen() {
        let mg = MoveGenerator::new();
        let mut board = Board::new();
        board.fen_read(Some("8/2P5/8/8/8/8/8/8 w - - 0 1")).unwrap();

        let explicit = parse_usermove(&board, Sides::WHITE, &mg, "c7c8n").unwrap();
        assert_eq!(explicit.promoted(), Pieces::WHITE_KNIGHT);

        let bare = parse_usermove(&board, Sides::WHITE, &mg, "c7c8").unwrap();
        assert_eq!(bare.promoted(), Pieces::WHITE_QUEEN);
    }
}
