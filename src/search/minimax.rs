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

use super::{
    defs::{SearchResult, BELOW_ANY_EVAL},
    Search,
};
use crate::{
    board::Board,
    defs::Side,
    evaluation::Evaluation,
    misc::bits,
    movegen::{
        defs::{Move, MoveList},
        MoveGenerator,
    },
};

impl Search {
    // Plain negamax-style minimax without pruning. It exists as the
    // correctness oracle for alpha_beta: for any position and depth both
    // must agree on the evaluation.
    pub fn minimax(side: Side, board: &Board, depth: u8, mg: &MoveGenerator) -> SearchResult {
        let mut result = SearchResult {
            best_move: Move::new(0),
            eval: BELOW_ANY_EVAL,
        };

        let mut list = MoveList::new();
        mg.all_moves(board, side, &mut list);

        for i in 0..list.len() {
            let m = list.get_move(i);
            let mut test = *board;

            if !test.make_move(m, mg) {
                continue;
            }

            // Evaluate the leaf directly instead of recursing one more
            // ply for nothing.
            let leaf_eval = if depth == 1 {
                -Evaluation::evaluate(bits::swap_side(side), &test, depth, mg)
            } else {
                -Search::minimax(bits::swap_side(side), &test, depth - 1, mg).eval
            };

            if leaf_eval > result.eval {
                result.eval = leaf_eval;
                result.best_move = m;
            }
        }

        // No legal moves: mate or stalemate. Score the position where it
        // stands.
        if result.eval == BELOW_ANY_EVAL {
            result.eval = Evaluation::evaluate(side, board, depth, mg);
        }

        result
    }
}
