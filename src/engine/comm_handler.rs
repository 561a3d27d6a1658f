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
    defs::{EngineState, ErrFatal, ErrNormal, GameOverReason, GameResult},
    utils, Engine,
};
use crate::{
    board::Board,
    comm::defs::{CommIn, CommOut, TimeControl, XBoardIn, XBoardOut},
    defs::{Side, Sides, FIFTY_MOVE_RULE},
    evaluation::{defs::PositionKind, Evaluation},
    misc::bits,
    search::{
        defs::{SearchSummary, INF},
        Search,
    },
};
use std::time::Instant;

impl Engine {
    // Dispatch on everything the communication module can send us.
    pub fn comm_handler(&mut self, input: &CommIn) {
        match input {
            CommIn::XBoard(command) => self.xboard_handler(command),

            CommIn::Board => self.comm.send(CommOut::PrintBoard),
            CommIn::Eval => {
                let board = *self.board.lock();
                let eval = Evaluation::evaluate(self.side_to_move, &board, 1, &self.mg);
                self.comm.send(CommOut::PrintEval(eval));
            }
            CommIn::Help => self.comm.send(CommOut::PrintHelp),

            CommIn::Quit => self.quit(),
            CommIn::Unknown(cmd) => self
                .comm
                .send(CommOut::Error(ErrNormal::UNKNOWN_COMMAND, cmd.clone())),
            CommIn::Ignore(_) => (),
        }
    }

    fn xboard_handler(&mut self, command: &XBoardIn) {
        match command {
            XBoardIn::XBoard => self.comm.send(CommOut::XBoard(XBoardOut::NewLine)),
            XBoardIn::ProtoVer(_) => self.comm.send(CommOut::XBoard(XBoardOut::Features)),

            XBoardIn::New => {
                *self.board.lock() = Board::starting_position();
                self.side_to_move = Sides::WHITE;
                self.engine_side = Some(Sides::BLACK);
                self.history.clear();
                self.set_state(EngineState::Waiting);
            }

            XBoardIn::Force => {
                self.engine_side = None;
                self.set_state(EngineState::Observing);
            }

            XBoardIn::Go(tc) => {
                self.engine_side = Some(self.side_to_move);
                self.set_state(EngineState::Waiting);
                if !self.report_game_over() {
                    self.think(tc);
                }
            }

            XBoardIn::SetBoard(fen) => self.setboard(fen),
            XBoardIn::UserMove(mv, tc) => self.usermove(mv, tc),

            XBoardIn::Undo => self.take_back(1),
            XBoardIn::Remove => self.take_back(2),

            XBoardIn::Ping(value) => self.comm.send(CommOut::XBoard(XBoardOut::Pong(*value))),

            XBoardIn::Post => self.post = true,
            XBoardIn::NoPost => self.post = false,

            XBoardIn::Analyze => {
                self.engine_side = None;
                self.set_state(EngineState::Analyzing);
                self.analyze();
            }
            XBoardIn::Exit => {
                self.engine_side = None;
                self.set_state(EngineState::Observing);
            }

            // Buffered commands live in the comm module; if one still
            // arrives here there is nothing to do with it.
            XBoardIn::Buffered(_) => (),
        }
    }

    fn setboard(&mut self, fen: &str) {
        let mut new_board = Board::new();
        match new_board.fen_read(Some(fen)) {
            Ok(side) => {
                *self.board.lock() = new_board;
                self.side_to_move = side;
                self.engine_side = None;
                self.history.clear();
                self.set_state(EngineState::Observing);
            }
            Err(_) => self
                .comm
                .send(CommOut::Error(ErrNormal::INCORRECT_FEN, fen.to_string())),
        }
    }

    fn usermove(&mut self, mv: &str, tc: &TimeControl) {
        let board = *self.board.lock();
        let side = self.side_to_move;

        let parsed = utils::parse_usermove(&board, side, &self.mg, mv);
        let m = match parsed {
            Some(m) => m,
            None => {
                self.comm.send(CommOut::IllegalMove(mv.to_string()));
                return;
            }
        };

        let mut new_board = board;
        if !new_board.make_move(m, &self.mg) {
            self.comm.send(CommOut::IllegalMove(mv.to_string()));
            return;
        }

        self.history.push(board, side);
        *self.board.lock() = new_board;
        self.side_to_move = bits::swap_side(side);

        if self.report_game_over() {
            return;
        }

        if self.is_analyzing() {
            self.analyze();
        } else if self.engine_side == Some(self.side_to_move) {
            self.think(tc);
        }
    }

    fn take_back(&mut self, half_moves: usize) {
        for _ in 0..half_moves {
            if let Some((board, side)) = self.history.pop() {
                *self.board.lock() = board;
                self.side_to_move = side;
            }
        }

        if self.is_analyzing() {
            self.analyze();
        }
    }

    // Search the current position and play the best move.
    fn think(&mut self, tc: &TimeControl) {
        self.set_state(EngineState::Thinking);

        let board = *self.board.lock();
        let side = self.side_to_move;
        let depth = tc.allot(self.settings.depth);

        let started = Instant::now();
        let result = Search::alpha_beta(side, &board, depth, -INF, INF, &self.mg);
        let elapsed = started.elapsed().as_millis();

        // No legal move at all should have been caught as game over
        // before thinking started.
        if result.best_move.is_null() {
            self.report_game_over();
            self.set_state(EngineState::Observing);
            return;
        }

        let mut new_board = board;
        if !new_board.make_move(result.best_move, &self.mg) {
            panic!("{}", ErrFatal::GENERATED_ILLEGAL_MOVE);
        }

        self.history.push(board, side);
        *self.board.lock() = new_board;
        self.side_to_move = bits::swap_side(side);

        if self.post && !self.settings.quiet {
            self.comm.send(CommOut::SearchSummary(SearchSummary {
                depth,
                eval: result.eval,
                time: elapsed,
                best_move: result.best_move,
            }));
        }

        self.comm.send(CommOut::BestMove(result.best_move));

        self.report_game_over();
        if self.is_thinking() {
            self.set_state(EngineState::Waiting);
        }
    }

    // Search the current position for the analysis window, without
    // playing anything.
    fn analyze(&mut self) {
        let board = *self.board.lock();
        let side = self.side_to_move;
        let depth = self.settings.depth;

        let started = Instant::now();
        let result = Search::alpha_beta(side, &board, depth, -INF, INF, &self.mg);
        let elapsed = started.elapsed().as_millis();

        if !result.best_move.is_null() {
            self.comm.send(CommOut::SearchSummary(SearchSummary {
                depth,
                eval: result.eval,
                time: elapsed,
                best_move: result.best_move,
            }));
        }
    }

    // If the game has ended, announce the result and stop playing.
    // Returns true when the game is over.
    fn report_game_over(&mut self) -> bool {
        let board = *self.board.lock();
        let side = self.side_to_move;

        let game_over = match Evaluation::classify_position(&board, side, &self.mg) {
            PositionKind::Mate => Some(Engine::mated_result(side)),
            PositionKind::Stalemate => Some((GameResult::Draw, GameOverReason::Stalemate)),
            PositionKind::InsufficientMaterial => {
                Some((GameResult::Draw, GameOverReason::InsufficientMaterial))
            }
            PositionKind::Normal | PositionKind::Check => {
                if board.halfmove_clock >= FIFTY_MOVE_RULE {
                    Some((GameResult::Draw, GameOverReason::FiftyMoves))
                } else {
                    None
                }
            }
        };

        if let Some((result, reason)) = game_over {
            self.comm.send(CommOut::Result(result, reason));
            self.engine_side = None;
            self.set_state(EngineState::Observing);
            return true;
        }

        false
    }

    // The side to move is mated; the other side wins.
    fn mated_result(mated: Side) -> (GameResult, GameOverReason) {
        if mated == Sides::WHITE {
            (GameResult::BlackWins, GameOverReason::BlackMates)
        } else {
            (GameResult::WhiteWins, GameOverReason::WhiteMates)
        }
    }
}
