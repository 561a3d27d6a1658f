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

// Engine-vs-engine harness: the engine plays itself at a fixed depth,
// and every move the pruned search is cross-checked against the plain
// minimax oracle. Any disagreement on the evaluation is a bug in one of
// the two. The game is written to a PGN file as it goes.

use super::pgn;
use crate::{
    board::Board,
    defs::{Side, Sides, FIFTY_MOVE_RULE},
    engine::defs::ErrFatal,
    evaluation::{defs::PositionKind, Evaluation},
    misc::bits,
    movegen::{defs::MoveList, MoveGenerator},
    search::{defs::INF, Search},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use std::fs::File;
use std::io::Write;

const PGN_FILE: &str = "selfplay.pgn";

// Fixed seed so a run can be reproduced.
const OPENING_SEED: u64 = 10;

pub fn run(start: Board, start_side: Side, depth: u8, mg: &MoveGenerator) {
    let mut pgn_file = match File::create(PGN_FILE) {
        Ok(f) => f,
        Err(e) => {
            println!("Failed to open {}: {}", PGN_FILE, e);
            return;
        }
    };

    let mut board = start;
    let mut side = start_side;
    let mut move_num: u16 = 1;

    println!("Self-play at depth {}, game goes to {}", depth, PGN_FILE);

    // From the standard starting position, play a random opening move so
    // consecutive runs do not all follow the same game.
    if board_is_startpos(&board) && side == Sides::WHITE {
        let mut rng = ChaChaRng::seed_from_u64(OPENING_SEED);
        let mut list = MoveList::new();
        mg.all_moves(&board, side, &mut list);

        loop {
            let pick = list.get_move(rng.gen_range(0..list.len()));
            let mut test = board;
            if test.make_move(pick, mg) {
                board = test;
                let kind = Evaluation::classify_position(&board, Sides::BLACK, mg);
                println!("{:>3}. {}", move_num, pick);
                pgn::write_move(&mut pgn_file, pick, move_num, side, kind)
                    .expect(ErrFatal::PGN_WRITE);
                side = Sides::BLACK;
                break;
            }
        }
    }

    loop {
        let result = Search::alpha_beta(side, &board, depth, -INF, INF, mg);
        let oracle = Search::minimax(side, &board, depth, mg);

        if result.eval != oracle.eval {
            println!(
                "SEARCH MISMATCH: alpha-beta {} vs minimax {}",
                result.eval, oracle.eval
            );
            break;
        }

        if result.best_move.is_null() {
            // The game ended on the previous move.
            break;
        }

        let mut test = board;
        if !test.make_move(result.best_move, mg) {
            println!("SEARCH ERROR: best move {} is illegal", result.best_move);
            break;
        }
        board = test;

        let kind = Evaluation::classify_position(&board, bits::swap_side(side), mg);
        println!(
            "{:>3}. {} ({:+.2})",
            move_num,
            result.best_move,
            result.eval as f64 / 100.0
        );
        pgn::write_move(&mut pgn_file, result.best_move, move_num, side, kind)
            .expect(ErrFatal::PGN_WRITE);

        match kind {
            PositionKind::Mate => {
                println!("{}", if side == Sides::WHITE { "1-0" } else { "0-1" });
                break;
            }
            PositionKind::Stalemate | PositionKind::InsufficientMaterial => {
                println!("1/2-1/2");
                break;
            }
            _ => (),
        }

        if board.halfmove_clock >= FIFTY_MOVE_RULE {
            println!("1/2-1/2 (fifty-move rule)");
            writeln!(pgn_file, "1/2-1/2").expect(ErrFatal::PGN_WRITE);
            break;
        }

        if side == Sides::BLACK {
            move_num += 1;
        }
        side = bits::swap_side(side);

        pgn_file.flush().expect(ErrFatal::PGN_WRITE);
    }
}

fn board_is_startpos(board: &Board) -> bool {
    let start = Board::starting_position();
    board.bb_pieces == start.bb_pieces && board.castling == start.castling
}
