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
    engine::defs::{GameOverReason, GameResult},
    evaluation::defs::Eval,
    movegen::defs::Move,
    search::defs::SearchSummary,
};
use std::fmt::{self, Display};

pub struct CommType;
impl CommType {
    pub const XBOARD: &'static str = "xboard";
}

// With a clock under this (milliseconds), forget the configured depth
// and move fast.
const LOW_TIME: u128 = 5_000;
const PANIC_DEPTH: u8 = 3;

// The time control state as sent by the user interface. The input thread
// buffers these values and attaches them to every command that can put
// the engine to work, so the engine itself never has to track protocol
// details. Without iterative deepening, the single per-move budget only
// decides how deep the search may go.
#[derive(PartialEq, Clone)]
pub struct TimeControl {
    pub move_depth: u8,
    pub move_time: u128,
    pub moves_per_session: u8,
    pub base_time: u128,
    pub increment: u128,
    pub time_left: u128,
    pub opp_time_left: u128,
    pub is_move_time: bool,
    pub is_game_time: bool,
}

impl TimeControl {
    pub fn new() -> Self {
        Self {
            move_depth: 0,
            move_time: 0,
            moves_per_session: 0,
            base_time: 0,
            increment: 0,
            time_left: 0,
            opp_time_left: 0,
            is_move_time: false,
            is_game_time: false,
        }
    }

    // Pick the depth for the next search.
    pub fn allot(&self, default_depth: u8) -> u8 {
        let depth = if self.move_depth > 0 {
            self.move_depth
        } else {
            default_depth
        };

        if self.is_game_time && self.time_left > 0 && self.time_left < LOW_TIME {
            depth.min(PANIC_DEPTH)
        } else {
            depth
        }
    }
}

impl Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sd: {} st: {} mps: {} bt: {} inc: {} time: {} otim: {}",
            self.move_depth,
            self.move_time,
            self.moves_per_session,
            self.base_time,
            self.increment,
            self.time_left,
            self.opp_time_left,
        )
    }
}

// This is a list of supported incoming commands.
#[derive(PartialEq, Clone)]
pub enum CommIn {
    XBoard(XBoardIn),

    // Custom commands for use in a terminal window.
    Board,
    Eval,
    Help,

    Quit,
    Unknown(String),
    Ignore(String),
}

#[derive(PartialEq, Clone)]
pub enum XBoardIn {
    XBoard,
    ProtoVer(u8),
    New,
    Force,
    Go(TimeControl),
    SetBoard(String),
    UserMove(String, TimeControl),
    Undo,
    Remove,
    Ping(i8),
    Post,
    NoPost,
    Analyze,
    Exit,
    Buffered(XBoardInBuffered),
}

// Commands that never reach the engine directly: the input thread
// buffers their values into its TimeControl and attaches that to the
// next Go or UserMove.
#[derive(PartialEq, Clone)]
pub enum XBoardInBuffered {
    Sd(u8),
    St(u128),
    Level(u8, u128, u128),
    Time(u128),
    OTim(u128),
}

impl Display for XBoardIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XBoardIn::XBoard => write!(f, "xboard"),
            XBoardIn::ProtoVer(version) => write!(f, "protover {}", version),
            XBoardIn::New => write!(f, "new"),
            XBoardIn::Force => write!(f, "force"),
            XBoardIn::Go(tc) => write!(f, "go {}", tc),
            XBoardIn::SetBoard(fen) => write!(f, "setboard {}", fen),
            XBoardIn::UserMove(mv, tc) => write!(f, "usermove {} {}", mv, tc),
            XBoardIn::Undo => write!(f, "undo"),
            XBoardIn::Remove => write!(f, "remove"),
            XBoardIn::Ping(value) => write!(f, "ping {}", value),
            XBoardIn::Post => write!(f, "post"),
            XBoardIn::NoPost => write!(f, "nopost"),
            XBoardIn::Analyze => write!(f, "analyze"),
            XBoardIn::Exit => write!(f, "exit"),
            XBoardIn::Buffered(cmd) => write!(f, "{}", cmd),
        }
    }
}

impl Display for XBoardInBuffered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XBoardInBuffered::Sd(depth) => write!(f, "sd {}", depth),
            XBoardInBuffered::St(time) => write!(f, "st {}", time),
            XBoardInBuffered::Level(mps, bt, inc) => write!(f, "level {} {} {}", mps, bt, inc),
            XBoardInBuffered::Time(time) => write!(f, "time {}", time),
            XBoardInBuffered::OTim(time) => write!(f, "otim {}", time),
        }
    }
}

// This is a list of supported output commands, sending information from
// the engine to the user interface.
pub enum CommOut {
    XBoard(XBoardOut),

    BestMove(Move),
    IllegalMove(String),
    Result(GameResult, GameOverReason),
    SearchSummary(SearchSummary),
    Message(String),
    Error(&'static str, String),

    // Custom prints for use in a terminal window.
    PrintBoard,
    PrintEval(Eval),
    PrintHelp,

    Quit,
}

pub enum XBoardOut {
    NewLine,
    Features,
    Pong(i8),
}
