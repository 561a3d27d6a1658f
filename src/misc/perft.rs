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
    board::Board,
    defs::Side,
    evaluation::{defs::PositionKind, Evaluation},
    misc::{bits, print},
    movegen::{defs::MoveList, MoveGenerator},
};
use std::time::Instant;

// Leaf counters of a detailed perft run. A mate also counts as a check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftTotals {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub mates: u64,
}

// This function runs perft(), while collecting speed information.
pub fn run(board: &Board, side: Side, depth: u8, mg: &MoveGenerator) {
    let mut total_time: u128 = 0;
    let mut total_nodes: u64 = 0;

    println!("Benchmarking perft 1-{}:", depth);
    print::position(board);

    for d in 1..=depth {
        let mut perft_board = *board;
        let now = Instant::now();
        let leaf_nodes = perft(&mut perft_board, side, d, mg);
        let elapsed = now.elapsed().as_millis();
        let leaves_per_second = ((leaf_nodes * 1000) as f64 / elapsed as f64).floor();

        total_time += elapsed;
        total_nodes += leaf_nodes;
        println!(
            "Perft {}: {} ({} ms, {} leaves/sec)",
            d, leaf_nodes, elapsed, leaves_per_second
        );
    }

    let final_lnps = ((total_nodes * 1000) as f64 / total_time as f64).floor();
    println!("Total time spent: {} ms", total_time);
    println!("Execution speed: {} leaves/second", final_lnps);
}

// This is the actual perft function: count the leaf positions reachable
// in "depth" half-moves. Moves are undone by restoring the pre-move copy
// of the board.
pub fn perft(board: &mut Board, side: Side, depth: u8, mg: &MoveGenerator) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut list = MoveList::new();
    mg.all_moves(board, side, &mut list);

    let mut leaf_nodes: u64 = 0;
    let backup = *board;

    for i in 0..list.len() {
        if board.make_move(list.get_move(i), mg) {
            leaf_nodes += perft(board, bits::swap_side(side), depth - 1, mg);
        }
        *board = backup;
    }

    leaf_nodes
}

// Perft with the full leaf decomposition: captures, en-passants,
// castles, promotions, checks and mates, classified at the last ply.
pub fn perft_detailed(
    board: &mut Board,
    side: Side,
    depth: u8,
    mg: &MoveGenerator,
    totals: &mut PerftTotals,
) {
    if depth == 0 {
        totals.nodes += 1;
        return;
    }

    let mut list = MoveList::new();
    mg.all_moves(board, side, &mut list);

    let backup = *board;

    for i in 0..list.len() {
        let m = list.get_move(i);
        if board.make_move(m, mg) {
            if depth == 1 {
                if m.captured() != 0 {
                    totals.captures += 1;
                }
                if m.castling() != 0 {
                    totals.castles += 1;
                }
                if m.promoted() != 0 {
                    totals.promotions += 1;
                }
                if m.en_passant() != 0 {
                    totals.en_passants += 1;
                }

                match Evaluation::classify_position(board, bits::swap_side(side), mg) {
                    PositionKind::Check => totals.checks += 1,
                    PositionKind::Mate => {
                        totals.mates += 1;
                        totals.checks += 1;
                    }
                    _ => (),
                }
            }

            perft_detailed(board, bits::swap_side(side), depth - 1, mg, totals);
        }
        *board = backup;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{FEN_KIWIPETE_POSITION, Sides};

    fn detailed(fen: Option<&str>, depth: u8, mg: &MoveGenerator) -> PerftTotals {
        let mut board = Board::new();
        let side = board.fen_read(fen).unwrap();
        let mut totals = PerftTotals::default();
        perft_detailed(&mut board, side, depth, mg, &mut totals);
        totals
    }

    #[rustfmt::skip]
    const STARTPOS_EXPECTED: [PerftTotals; 5] = [
        PerftTotals { nodes: 20, captures: 0, en_passants: 0, castles: 0, promotions: 0, checks: 0, mates: 0 },
        PerftTotals { nodes: 400, captures: 0, en_passants: 0, castles: 0, promotions: 0, checks: 0, mates: 0 },
        PerftTotals { nodes: 8_902, captures: 34, en_passants: 0, castles: 0, promotions: 0, checks: 12, mates: 0 },
        PerftTotals { nodes: 197_281, captures: 1_576, en_passants: 0, castles: 0, promotions: 0, checks: 469, mates: 8 },
        PerftTotals { nodes: 4_865_609, captures: 82_719, en_passants: 258, castles: 0, promotions: 0, checks: 27_351, mates: 347 },
    ];

    #[rustfmt::skip]
    const KIWIPETE_EXPECTED: [PerftTotals; 4] = [
        PerftTotals { nodes: 48, captures: 8, en_passants: 0, castles: 2, promotions: 0, checks: 0, mates: 0 },
        PerftTotals { nodes: 2_039, captures: 351, en_passants: 1, castles: 91, promotions: 0, checks: 3, mates: 0 },
        PerftTotals { nodes: 97_862, captures: 17_102, en_passants: 45, castles: 3_162, promotions: 0, checks: 993, mates: 1 },
        PerftTotals { nodes: 4_085_603, captures: 757_163, en_passants: 1_929, castles: 128_013, promotions: 15_172, checks: 25_523, mates: 43 },
    ];

    #[test]
    fn perft_from_the_starting_position() {
        let mg = MoveGenerator::new();

        for (i, expected) in STARTPOS_EXPECTED.iter().enumerate() {
            let totals = detailed(None, (i + 1) as u8, &mg);
            assert_eq!(totals, *expected, "startpos depth {}", i + 1);
        }
    }

    #[test]
    fn perft_from_kiwipete() {
        let mg = MoveGenerator::new();

        for (i, expected) in KIWIPETE_EXPECTED.iter().enumerate() {
            let totals = detailed(Some(FEN_KIWIPETE_POSITION), (i + 1) as u8, &mg);
            assert_eq!(totals, *expected, "kiwipete depth {}", i + 1);
        }
    }

    #[test]
    fn perft_nodes_match_the_detailed_walk() {
        let mg = MoveGenerator::new();
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Sides::WHITE, 4, &mg), 197_281);

        let mut board = Board::new();
        let side = board.fen_read(Some(FEN_KIWIPETE_POSITION)).unwrap();
        assert_eq!(perft(&mut board, side, 3, &mg), 97_862);
    }

    // The published depth-six totals. Slow; run with --ignored to check.
    #[test]
    #[ignore]
    fn perft_deep() {
        let mg = MoveGenerator::new();

        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Sides::WHITE, 6, &mg), 119_060_324);

        let mut board = Board::new();
        let side = board.fen_read(Some(FEN_KIWIPETE_POSITION)).unwrap();
        assert_eq!(perft(&mut board, side, 5, &mg), 193_690_690);
    }
}
