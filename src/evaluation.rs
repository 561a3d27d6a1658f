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

pub mod defs;
pub mod material;

use crate::{
    board::Board,
    defs::{Side, Sides},
    movegen::MoveGenerator,
};
use defs::{Eval, PositionKind, DRAW_SCORE, MATE_SCORE};

pub struct Evaluation;

impl Evaluation {
    // Classify the position from the viewpoint of the side to move.
    // "Check" and "normal" both mean play continues; the other three end
    // the game.
    pub fn classify_position(
        board: &Board,
        side_to_move: Side,
        mg: &MoveGenerator,
    ) -> PositionKind {
        if board.only_kings_left() {
            return PositionKind::InsufficientMaterial;
        }

        let in_check = mg.detect_check(board, side_to_move);
        let any_legal = board.has_legal_moves(side_to_move, mg);

        match (in_check, any_legal) {
            (true, false) => PositionKind::Mate,
            (false, false) => PositionKind::Stalemate,
            (true, true) => PositionKind::Check,
            (false, true) => PositionKind::Normal,
        }
    }

    // Static evaluation in centipawns from the side to move's point of
    // view. The depth makes mate scores depth-dependent, so the search
    // prefers the faster mate.
    pub fn evaluate(side_to_move: Side, board: &Board, depth: u8, mg: &MoveGenerator) -> Eval {
        match Evaluation::classify_position(board, side_to_move, mg) {
            PositionKind::Mate => -(MATE_SCORE + depth as Eval),
            PositionKind::Stalemate | PositionKind::InsufficientMaterial => DRAW_SCORE,
            _ => {
                // The material balance is stored white-positive.
                if side_to_move == Sides::BLACK {
                    -board.material
                } else {
                    board.material
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_fen(fen: &str) -> (Board, Side) {
        let mut board = Board::new();
        let side = board.fen_read(Some(fen)).unwrap();
        (board, side)
    }

    #[test]
    fn fools_mate_is_mate() {
        let mg = MoveGenerator::new();
        let (board, side) =
            from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");

        assert_eq!(side, Sides::WHITE);
        assert_eq!(
            Evaluation::classify_position(&board, side, &mg),
            PositionKind::Mate
        );
        assert_eq!(
            Evaluation::evaluate(side, &board, 1, &mg),
            -(MATE_SCORE + 1)
        );
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let mg = MoveGenerator::new();
        let (board, side) = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");

        assert_eq!(
            Evaluation::classify_position(&board, side, &mg),
            PositionKind::Stalemate
        );
        assert_eq!(Evaluation::evaluate(side, &board, 1, &mg), DRAW_SCORE);
    }

    #[test]
    fn bare_kings_cannot_win() {
        let mg = MoveGenerator::new();
        let (board, side) = from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");

        assert_eq!(
            Evaluation::classify_position(&board, side, &mg),
            PositionKind::InsufficientMaterial
        );
    }

    #[test]
    fn check_with_escapes_is_just_check() {
        let mg = MoveGenerator::new();
        let (board, side) = from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");

        assert_eq!(
            Evaluation::classify_position(&board, side, &mg),
            PositionKind::Check
        );
    }

    #[test]
    fn material_is_scored_from_the_movers_view() {
        let mg = MoveGenerator::new();
        // White is a rook up.
        let (board, _) = from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");

        assert_eq!(Evaluation::evaluate(Sides::WHITE, &board, 1, &mg), 500);
        assert_eq!(Evaluation::evaluate(Sides::BLACK, &board, 1, &mg), -500);
    }
}
