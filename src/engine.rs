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

mod comm_handler;
pub mod defs;
mod history;
mod main_loop;
mod utils;

use crate::{
    board::Board,
    comm::{defs::CommOut, xboard::XBoard, IComm},
    defs::{About, EngineRunResult, Side, Sides, FEN_KIWIPETE_POSITION},
    engine::defs::{EngineState, Information, Settings},
    misc::{cmdline::CmdLine, perft},
    movegen::MoveGenerator,
};
use crossbeam_channel::Receiver;
use history::GameHistory;
use parking_lot::Mutex;
use std::sync::Arc;

// This struct holds the chess engine and its functions, so they are not
// all separate entities in the global space.
pub struct Engine {
    quit: bool,
    state: EngineState,
    settings: Settings,
    cmdline: CmdLine,
    comm: Box<dyn IComm>,
    board: Arc<Mutex<Board>>,
    mg: Arc<MoveGenerator>,
    info_rx: Option<Receiver<Information>>,

    // Game state the board itself does not carry.
    side_to_move: Side,
    engine_side: Option<Side>,
    history: GameHistory,
    post: bool,
}

impl Engine {
    // Create a new engine.
    pub fn new() -> Self {
        let cmdline = CmdLine::new();

        let settings = Settings {
            depth: cmdline.depth(),
            threads: cmdline.threads(),
            quiet: cmdline.has_quiet(),
        };

        Self {
            quit: false,
            state: EngineState::Observing,
            settings,
            cmdline,
            comm: Box::new(XBoard::new()),
            board: Arc::new(Mutex::new(Board::new())),
            mg: Arc::new(MoveGenerator::new()),
            info_rx: None,
            side_to_move: Sides::WHITE,
            engine_side: None,
            history: GameHistory::new(),
            // Thinking output starts disabled; the GUI turns it on with
            // "post".
            post: false,
        }
    }

    // Run the engine.
    pub fn run(&mut self) -> EngineRunResult {
        self.print_about();

        // Set up the position given on the command line, and abort if
        // this fails.
        let fen = if self.cmdline.has_kiwipete() {
            String::from(FEN_KIWIPETE_POSITION)
        } else {
            self.cmdline.fen()
        };
        self.side_to_move = self.board.lock().fen_read(Some(&fen))?;

        // Run a specific action if requested...
        let mut action_requested = false;

        if self.cmdline.perft() > 0 {
            action_requested = true;
            let board = *self.board.lock();
            perft::run(&board, self.side_to_move, self.cmdline.perft(), &self.mg);
        }

        // === Only available with the "extra" features enabled. ===
        #[cfg(feature = "extra")]
        if self.cmdline.has_epd_test() {
            action_requested = true;
            crate::extra::perftsuite::run(self.settings.threads, Arc::clone(&self.mg));
        }

        #[cfg(feature = "extra")]
        if self.cmdline.has_selfplay() {
            action_requested = true;
            crate::extra::selfplay::run(
                *self.board.lock(),
                self.side_to_move,
                self.settings.depth,
                &self.mg,
            );
        }
        // ==========================================================

        // In the main loop, the engine communicates with a user
        // interface over the XBoard protocol until it is told to quit.
        if !action_requested {
            self.main_loop();
        }

        Ok(())
    }

    // This function quits Comm and the engine thread itself.
    pub fn quit(&mut self) {
        self.comm.send(CommOut::Quit);
        self.quit = true;
    }

    fn print_about(&self) {
        println!(
            "{} {} by {}, speaking {}",
            About::ENGINE,
            About::VERSION,
            About::AUTHOR,
            self.comm.get_protocol_name()
        );
    }

    pub fn set_state(&mut self, state: EngineState) {
        self.state = state;
    }

    pub fn is_thinking(&self) -> bool {
        self.state == EngineState::Thinking
    }

    pub fn is_analyzing(&self) -> bool {
        self.state == EngineState::Analyzing
    }
}
