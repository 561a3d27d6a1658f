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

use super::{defs::SearchResult, Search};
use crate::{
    board::Board,
    defs::Side,
    evaluation::{defs::Eval, Evaluation},
    misc::bits,
    movegen::{
        defs::{Move, MoveList},
        MoveGenerator,
    },
};

impl Search {
    // Depth-bounded alpha-beta. The running best evaluation doubles as
    // alpha; since it does not start at minus infinity (the caller picks
    // the window), a separate flag tracks whether any legal move was
    // seen, so the no-legal-moves branch stays reachable under unusual
    // windows.
    pub fn alpha_beta(
        side: Side,
        board: &Board,
        depth: u8,
        alpha: Eval,
        beta: Eval,
        mg: &MoveGenerator,
    ) -> SearchResult {
        let mut result = SearchResult {
            best_move: Move::new(0),
            eval: alpha,
        };
        let mut any_legal = false;

        let mut list = MoveList::new();
        mg.all_moves(board, side, &mut list);

        for i in 0..list.len() {
            let m = list.get_move(i);
            let mut test = *board;

            if !test.make_move(m, mg) {
                continue;
            }

            let leaf_eval = if depth == 1 {
                -Evaluation::evaluate(bits::swap_side(side), &test, depth, mg)
            } else {
                -Search::alpha_beta(
                    bits::swap_side(side),
                    &test,
                    depth - 1,
                    -beta,
                    -result.eval,
                    mg,
                )
                .eval
            };

            // Fail high: the opponent will not allow this line, so the
            // exact score beyond beta does not matter.
            if leaf_eval >= beta {
                result.eval = beta;
                result.best_move = m;
                return result;
            }

            if leaf_eval > result.eval || !any_legal {
                result.eval = leaf_eval;
                result.best_move = m;
            }

            any_legal = true;
        }

        // No legal moves: mate or stalemate. Score the position where it
        // stands.
        if !any_legal {
            result.eval = Evaluation::evaluate(side, board, depth, mg);
        }

        result
    }
}
