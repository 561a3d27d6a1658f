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

use super::Board;
use crate::{
    defs::{Side, Sides},
    movegen::{defs::MoveList, MoveGenerator},
};

impl Board {
    // Determines if the given side has at least one legal move.
    pub fn has_legal_moves(&self, side: Side, mg: &MoveGenerator) -> bool {
        let mut list = MoveList::new();
        mg.all_moves(self, side, &mut list);

        for i in 0..list.len() {
            let mut test = *self;
            if test.make_move(list.get_move(i), mg) {
                return true;
            }
        }

        false
    }

    // Only the two kings left on the board?
    pub fn only_kings_left(&self) -> bool {
        use super::defs::Pieces;
        self.bb_all
            & !self.bb_pieces[Pieces::KINGS[Sides::WHITE]]
            & !self.bb_pieces[Pieces::KINGS[Sides::BLACK]]
            == 0
    }
}
