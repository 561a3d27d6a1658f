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

use crate::{board::Board, defs::Side};

// The kernel undoes moves by copying the whole board, so the game
// history works the same way: one snapshot of the board and the side to
// move per played half-move. "undo" pops one entry, "remove" two.
struct HistoryEntry {
    board: Board,
    side_to_move: Side,
}

pub struct GameHistory {
    list: Vec<HistoryEntry>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, board: Board, side_to_move: Side) {
        self.list.push(HistoryEntry {
            board,
            side_to_move,
        });
    }

    pub fn pop(&mut self) -> Option<(Board, Side)> {
        self.list.pop().map(|e| (e.board, e.side_to_move))
    }
}
