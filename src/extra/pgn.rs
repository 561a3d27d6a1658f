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

// A minimal PGN move writer, used by the self-play harness to record its
// games. Moves are written in long algebraic form ("e2-e4", "Ng1xf3"),
// castling as the literals, with check/mate/draw markers taken from the
// position classification after the move.

use crate::{
    board::defs::{Pieces, SQUARE_NAME, PIECE_SYMBOLS},
    defs::{Side, Sides},
    evaluation::defs::PositionKind,
    movegen::defs::Move,
};
use std::io::{self, Write};

pub fn write_move<W: Write>(
    out: &mut W,
    m: Move,
    move_num: u16,
    side: Side,
    kind: PositionKind,
) -> io::Result<()> {
    if side == Sides::WHITE {
        write!(out, "{}. ", move_num)?;
    }

    if m.castling() != Pieces::NONE {
        write!(out, "{}", m)?;
    } else {
        let piece = m.piece();
        if piece != Pieces::WHITE_PAWN && piece != Pieces::BLACK_PAWN {
            write!(out, "{}", PIECE_SYMBOLS[piece].to_ascii_uppercase())?;
        }

        let connector = if m.captured() != Pieces::NONE { "x" } else { "-" };
        write!(out, "{}{}{}", SQUARE_NAME[m.from()], connector, SQUARE_NAME[m.to()])?;

        if m.promoted() != Pieces::NONE {
            write!(out, "={}", PIECE_SYMBOLS[m.promoted()].to_ascii_uppercase())?;
        }
    }

    let suffix = match kind {
        PositionKind::Check => "+",
        PositionKind::Mate => "#",
        PositionKind::Stalemate | PositionKind::InsufficientMaterial => " 1/2-1/2",
        PositionKind::Normal => "",
    };
    write!(out, "{} ", suffix)?;

    if side == Sides::BLACK {
        writeln!(out)?;
    }

    Ok(())
}
