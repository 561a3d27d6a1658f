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

mod alpha_beta;
pub mod defs;
mod minimax;

pub struct Search;

#[cfg(test)]
mod tests {
    use super::{
        defs::{INF},
        Search,
    };
    use crate::{
        board::{defs::Pieces, Board},
        defs::{Side, Sides},
        evaluation::{
            defs::{PositionKind, MATE_SCORE},
            Evaluation,
        },
        misc::bits,
        movegen::{defs::MoveList, MoveGenerator},
    };

    fn from_fen(fen: &str) -> (Board, Side) {
        let mut board = Board::new();
        let side = board.fen_read(Some(fen)).unwrap();
        (board, side)
    }

    fn is_legal(board: &Board, side: Side, m: crate::movegen::defs::Move, mg: &MoveGenerator) -> bool {
        let mut list = MoveList::new();
        mg.all_moves(board, side, &mut list);

        (0..list.len()).any(|i| {
            let gen = list.get_move(i);
            let mut test = *board;
            gen == m && test.make_move(gen, mg)
        })
    }

    #[test]
    fn depth_one_from_the_start_returns_a_legal_move() {
        let mg = MoveGenerator::new();
        let board = Board::starting_position();

        let result = Search::alpha_beta(Sides::WHITE, &board, 1, -INF, INF, &mg);
        assert!(!result.best_move.is_null());
        assert!(is_legal(&board, Sides::WHITE, result.best_move, &mg));

        // All twenty openings lead to an unremarkable position.
        let mut list = MoveList::new();
        mg.all_moves(&board, Sides::WHITE, &mut list);
        let mut legal = 0;
        for i in 0..list.len() {
            let mut test = board;
            if test.make_move(list.get_move(i), &mg) {
                legal += 1;
                assert_eq!(
                    Evaluation::classify_position(&test, Sides::BLACK, &mg),
                    PositionKind::Normal
                );
            }
        }
        assert_eq!(legal, 20);
    }

    #[test]
    fn mate_in_one_is_found_and_preferred() {
        let mg = MoveGenerator::new();
        // After 1. f3 e5 2. g4 black mates with Qd8-h4.
        let (board, side) =
            from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2");
        assert_eq!(side, Sides::BLACK);

        let result = Search::alpha_beta(side, &board, 2, -INF, INF, &mg);
        assert_eq!(result.best_move.to_string(), "d8h4");
        assert_eq!(result.eval, MATE_SCORE + 1);

        let mut test = board;
        assert!(test.make_move(result.best_move, &mg));
        assert_eq!(
            Evaluation::classify_position(&test, Sides::WHITE, &mg),
            PositionKind::Mate
        );
    }

    #[test]
    fn hanging_queen_is_taken() {
        let mg = MoveGenerator::new();
        let (board, side) = from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");

        let result = Search::alpha_beta(side, &board, 2, -INF, INF, &mg);
        assert_eq!(result.best_move.to_string(), "e4d5");
        assert_eq!(result.best_move.captured(), Pieces::BLACK_QUEEN);
    }

    #[test]
    fn searching_a_mated_position_reports_the_mate_score() {
        let mg = MoveGenerator::new();
        let (board, side) =
            from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");

        let result = Search::alpha_beta(side, &board, 3, -INF, INF, &mg);
        assert!(result.best_move.is_null());
        assert_eq!(result.eval, -(MATE_SCORE + 3));

        let oracle = Search::minimax(side, &board, 3, &mg);
        assert!(oracle.best_move.is_null());
        assert_eq!(oracle.eval, result.eval);
    }

    #[test]
    fn alpha_beta_agrees_with_the_oracle() {
        let mg = MoveGenerator::new();
        let suite = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1",
        ];

        for fen in suite {
            let (board, side) = from_fen(fen);

            for depth in 1..=3u8 {
                let ab = Search::alpha_beta(side, &board, depth, -INF, INF, &mg);
                let mm = Search::minimax(side, &board, depth, &mg);

                assert_eq!(ab.eval, mm.eval, "fen {} depth {}", fen, depth);
                assert!(is_legal(&board, side, ab.best_move, &mg));
                assert!(is_legal(&board, side, mm.best_move, &mg));
            }
        }
    }

    #[test]
    fn oracle_agreement_holds_at_depth_four() {
        // The bigger suite positions take too long through the plain
        // minimax at this depth; the smaller ones still cover captures,
        // pins and promotions.
        let mg = MoveGenerator::new();
        let suite = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1",
        ];

        for fen in suite {
            let (board, side) = from_fen(fen);
            let ab = Search::alpha_beta(side, &board, 4, -INF, INF, &mg);
            let mm = Search::minimax(side, &board, 4, &mg);

            assert_eq!(ab.eval, mm.eval, "fen {}", fen);
            assert!(is_legal(&board, side, ab.best_move, &mg));
        }
    }

    #[test]
    fn deeper_search_prefers_the_faster_mate() {
        let mg = MoveGenerator::new();
        // Back-rank mate in one; at depth 4 the mate must still be
        // delivered immediately, scoring as the shallowest mate.
        let (board, side) = from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1");

        let result = Search::alpha_beta(side, &board, 4, -INF, INF, &mg);
        assert_eq!(result.best_move.to_string(), "a1a8");
        assert_eq!(result.eval, MATE_SCORE + 3);

        let mut test = board;
        assert!(test.make_move(result.best_move, &mg));
        assert_eq!(
            Evaluation::classify_position(&test, bits::swap_side(side), &mg),
            PositionKind::Mate
        );
    }
}
