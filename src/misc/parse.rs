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
    board::defs::{Pieces, SQUARE_NAME},
    defs::{Piece, Side, Square},
};
use if_chain::if_chain;

// A move string taken apart: from-square, to-square, and the promotion
// letter if there was one.
pub type PotentialMove = (Square, Square, Option<char>);
pub type ParseMoveResult = Result<PotentialMove, ()>;

// Split coordinate notation ("e2e4", "a7a8q") into its pieces. Whether
// the move is actually playable is for the caller to find out against
// the legal move list.
pub fn coordinate_move(m: &str) -> ParseMoveResult {
    let lower_case_move = m.to_ascii_lowercase();

    if m.len() != 4 && m.len() != 5 {
        return Err(());
    }

    if_chain! {
        if let Some(from) = algebraic_square_to_number(&lower_case_move[0..=1]);
        if let Some(to) = algebraic_square_to_number(&lower_case_move[2..=3]);
        then {
            let promotion = lower_case_move.chars().nth(4);
            if m.len() == 5 && !"qrbn".contains(promotion.unwrap_or('-')) {
                return Err(());
            }
            return Ok((from, to, promotion));
        }
    }

    Err(())
}

pub fn algebraic_square_to_number(algebraic_square: &str) -> Option<Square> {
    SQUARE_NAME
        .iter()
        .position(|&element| element == algebraic_square)
}

// Turn a promotion letter into the colored piece for the given side.
pub fn promotion_piece(letter: char, side: Side) -> Option<Piece> {
    match letter.to_ascii_lowercase() {
        'q' => Some(Pieces::QUEENS[side]),
        'r' => Some(Pieces::ROOKS[side]),
        'b' => Some(Pieces::BISHOPS[side]),
        'n' => Some(Pieces::KNIGHTS[side]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::Sides;

    #[test]
    fn coordinate_moves_parse() {
        assert_eq!(coordinate_move("e2e4"), Ok((12, 28, None)));
        assert_eq!(coordinate_move("a7a8q"), Ok((48, 56, Some('q'))));
        assert!(coordinate_move("e2").is_err());
        assert!(coordinate_move("e2e9").is_err());
        assert!(coordinate_move("a7a8x").is_err());
    }

    #[test]
    fn promotion_letters_are_colored() {
        assert_eq!(promotion_piece('q', Sides::WHITE), Some(Pieces::WHITE_QUEEN));
        assert_eq!(promotion_piece('n', Sides::BLACK), Some(Pieces::BLACK_KNIGHT));
        assert_eq!(promotion_piece('k', Sides::WHITE), None);
    }
}
