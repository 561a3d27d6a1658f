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

use crate::comm::defs::CommIn;
use std::fmt::{self, Display};

// Messages the engine thread can receive from the other threads.
#[derive(PartialEq, Clone)]
pub enum Information {
    Comm(CommIn),
}

// This struct holds messages that are reported on fatal engine errors.
// These should never happen; if they do the engine is in an unknown
// state, and it will panic without trying any recovery whatsoever.
pub struct ErrFatal;
impl ErrFatal {
    pub const READ_IO: &'static str = "Reading I/O failed.";
    pub const HANDLE: &'static str = "Broken handle.";
    pub const THREAD: &'static str = "Thread has failed.";
    pub const CHANNEL: &'static str = "Broken channel.";
    pub const NO_INFO_RX: &'static str = "No incoming Info channel.";
    pub const GENERATED_ILLEGAL_MOVE: &'static str = "The engine generated an illegal move!";
    pub const PGN_WRITE: &'static str = "Writing the PGN file failed.";
}

// Messages for conditions a user can run into; not fatal.
pub struct ErrNormal;
impl ErrNormal {
    pub const UNKNOWN_COMMAND: &'static str = "Unknown command";
    pub const INCORRECT_FEN: &'static str = "Incorrect FEN-string";
}

// What the engine is currently doing.
#[derive(Clone, Copy, PartialEq)]
pub enum EngineState {
    // Neither playing a side nor analyzing; just relaying moves.
    Observing,
    // Playing one side, waiting for the opponent's move.
    Waiting,
    Thinking,
    Analyzing,
}

#[derive(Clone, Copy, PartialEq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WhiteWins => write!(f, "1-0"),
            Self::BlackWins => write!(f, "0-1"),
            Self::Draw => write!(f, "1/2-1/2"),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum GameOverReason {
    WhiteMates,
    BlackMates,
    Stalemate,
    InsufficientMaterial,
    FiftyMoves,
}

impl Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WhiteMates => write!(f, "White mates"),
            Self::BlackMates => write!(f, "Black mates"),
            Self::Stalemate => write!(f, "Stalemate"),
            Self::InsufficientMaterial => write!(f, "Insufficient material"),
            Self::FiftyMoves => write!(f, "Fifty-move rule"),
        }
    }
}

// Engine settings coming from the command line.
pub struct Settings {
    pub depth: u8,
    pub threads: usize,
    pub quiet: bool,
}
