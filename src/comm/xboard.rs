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

// This file implements the XBoard communication module: one thread that
// reads stdin and turns lines into typed commands for the engine, and
// one thread that prints whatever the engine wants to say.

use super::{
    defs::{CommIn, CommOut, CommType, TimeControl, XBoardIn, XBoardInBuffered, XBoardOut},
    IComm,
};
use crate::{
    board::Board,
    defs::About,
    engine::defs::{ErrFatal, GameOverReason, GameResult, Information},
    misc::print,
    movegen::defs::Move,
    search::defs::SearchSummary,
};
use crossbeam_channel::{self, Sender};
use parking_lot::Mutex;
use std::{
    io,
    sync::Arc,
    thread::{self, JoinHandle},
};

// The feature list sent to the user interface after "protover 2".
// "myname=x" is replaced with the actual engine name and version.
const FEATURES: [&str; 12] = [
    "done=0",
    "myname=x",
    "ping=1",
    "setboard=1",
    "usermove=1",
    "playother=0",
    "analyze=1",
    "draw=0",
    "sigint=0",
    "sigterm=0",
    "colors=0",
    "done=1",
];

// This struct is used to instantiate the Comm XBoard module.
pub struct XBoard {
    input_handle: Option<JoinHandle<()>>,
    output_handle: Option<JoinHandle<()>>,
    output_tx: Option<Sender<CommOut>>,
}

impl XBoard {
    pub fn new() -> Self {
        Self {
            input_handle: None,
            output_handle: None,
            output_tx: None,
        }
    }
}

// Any communication module must implement the trait IComm.
impl IComm for XBoard {
    fn init(&mut self, receiving_tx: Sender<Information>, board: Arc<Mutex<Board>>) {
        self.input_thread(receiving_tx);
        self.output_thread(board);
    }

    // The engine thread (which is the creator of the Comm module) uses
    // this function to send output towards the user interface.
    fn send(&self, msg: CommOut) {
        if let Some(tx) = &self.output_tx {
            tx.send(msg).expect(ErrFatal::CHANNEL);
        }
    }

    // After the engine sends 'quit' to both threads, it calls shutdown()
    // and waits here until they are gone.
    fn shutdown(&mut self) {
        if let Some(h) = self.input_handle.take() {
            h.join().expect(ErrFatal::THREAD);
        }

        if let Some(h) = self.output_handle.take() {
            h.join().expect(ErrFatal::THREAD);
        }
    }

    fn get_protocol_name(&self) -> &'static str {
        CommType::XBOARD
    }
}

// ---------------------------------------------------------------------
// Input thread
// ---------------------------------------------------------------------

impl XBoard {
    // The input thread receives incoming commands from the console or
    // GUI, turns them into a CommIn object, and sends this object to the
    // engine thread so the engine can decide what to do.
    fn input_thread(&mut self, transmitter: Sender<Information>) {
        let mut incoming_data = String::from("");

        // Incoming time controls are buffered, so they can be attached
        // to each command that starts a search. This way the engine does
        // not have to keep its own time controls.
        let mut buf_tc = TimeControl::new();

        let input_handle = thread::spawn(move || {
            let mut quit = false;

            while !quit {
                io::stdin()
                    .read_line(&mut incoming_data)
                    .expect(ErrFatal::READ_IO);

                let mut comm_in = XBoard::create_comm_input(&incoming_data);

                match comm_in {
                    // Buffer maximum search depth as time control.
                    CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::Sd(depth))) => {
                        buf_tc.move_depth = depth;
                    }

                    // Buffer the XBoard version of "movetime".
                    CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::St(time))) => {
                        buf_tc.move_time = time;
                        buf_tc.moves_per_session = 0;
                        buf_tc.base_time = 0;
                        buf_tc.increment = 0;
                        buf_tc.is_game_time = false;
                        buf_tc.is_move_time = time > 0;
                    }

                    // Buffer the "level" command.
                    CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::Level(mps, bt, inc))) => {
                        buf_tc.moves_per_session = mps;
                        buf_tc.base_time = bt;
                        buf_tc.increment = inc;
                        buf_tc.move_time = 0;
                        buf_tc.is_move_time = false;
                        buf_tc.is_game_time = mps > 0 || bt > 0 || inc > 0;
                    }

                    // Buffer the clocks.
                    CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::Time(time))) => {
                        buf_tc.time_left = time;
                    }
                    CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::OTim(time))) => {
                        buf_tc.opp_time_left = time;
                    }

                    // Attach the buffered time control to the commands
                    // that can start a search.
                    CommIn::XBoard(XBoardIn::UserMove(mv, _)) => {
                        comm_in = CommIn::XBoard(XBoardIn::UserMove(mv, buf_tc.clone()));
                    }
                    CommIn::XBoard(XBoardIn::Go(_)) => {
                        comm_in = CommIn::XBoard(XBoardIn::Go(buf_tc.clone()));
                    }

                    _ => (),
                }

                transmitter
                    .send(Information::Comm(comm_in.clone()))
                    .expect(ErrFatal::HANDLE);

                // Terminate the input thread if "quit" was detected.
                quit = comm_in == CommIn::Quit;

                // Clear for next input.
                incoming_data = String::from("");
            }
        });

        self.input_handle = Some(input_handle);
    }
}

// ---------------------------------------------------------------------
// Parsing functions for the input thread
// ---------------------------------------------------------------------

impl XBoard {
    fn create_comm_input(input: &str) -> CommIn {
        // Trim CR/LF so only the usable characters remain.
        let i = input.trim_end().to_string();

        match i {
            cmd if cmd == "xboard" => CommIn::XBoard(XBoardIn::XBoard),
            cmd if cmd == "new" => CommIn::XBoard(XBoardIn::New),
            cmd if cmd == "force" => CommIn::XBoard(XBoardIn::Force),
            cmd if cmd == "go" => CommIn::XBoard(XBoardIn::Go(TimeControl::new())),
            cmd if cmd == "undo" => CommIn::XBoard(XBoardIn::Undo),
            cmd if cmd == "remove" => CommIn::XBoard(XBoardIn::Remove),
            cmd if cmd == "post" => CommIn::XBoard(XBoardIn::Post),
            cmd if cmd == "nopost" => CommIn::XBoard(XBoardIn::NoPost),
            cmd if cmd == "analyze" => CommIn::XBoard(XBoardIn::Analyze),
            cmd if cmd == "exit" => CommIn::XBoard(XBoardIn::Exit),
            cmd if cmd == "quit" || cmd.is_empty() => CommIn::Quit,
            cmd if cmd.starts_with("ping") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("protover") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("setboard") => XBoard::parse_setboard(&cmd),
            cmd if cmd.starts_with("usermove") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("sd") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("st ") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("time") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("otim") => XBoard::parse_key_value_pair(&cmd),
            cmd if cmd.starts_with("level") => XBoard::parse_level(&cmd),

            // Custom commands
            cmd if cmd == "board" => CommIn::Board,
            cmd if cmd == "eval" => CommIn::Eval,
            cmd if cmd == "help" => CommIn::Help,

            // Some GUIs send these; the engine has no use for them.
            cmd if cmd == "easy" || cmd == "hard" => CommIn::Ignore(cmd),
            cmd if cmd == "random" || cmd == "computer" => CommIn::Ignore(cmd),
            cmd if cmd.starts_with("accepted") || cmd.starts_with("rejected") => {
                CommIn::Ignore(cmd)
            }
            cmd if cmd.starts_with("result") || cmd.starts_with("name") => CommIn::Ignore(cmd),
            cmd if cmd == "?" || cmd == "." => CommIn::Ignore(cmd),

            // Try to parse anything else as a move.
            _ => XBoard::parse_move(&i),
        }
    }

    // Parse a key-value pair such as "ping 7" into its typed command.
    fn parse_key_value_pair(cmd: &str) -> CommIn {
        const KEY: usize = 0;
        const VALUE: usize = 1;
        let parts: Vec<&str> = cmd.split_whitespace().collect();

        // Key-value pair must have two parts. Ignore anything after the
        // second part.
        if parts.len() < 2 {
            return CommIn::Unknown(cmd.to_string());
        }

        match parts[KEY] {
            "ping" => {
                let value = parts[VALUE].parse::<i8>().unwrap_or(0);
                CommIn::XBoard(XBoardIn::Ping(value))
            }
            "protover" => {
                let value = parts[VALUE].parse::<u8>().unwrap_or(0);
                CommIn::XBoard(XBoardIn::ProtoVer(value))
            }
            "usermove" => {
                let value = parts[VALUE].to_string();
                CommIn::XBoard(XBoardIn::UserMove(value, TimeControl::new()))
            }
            "sd" => {
                let value = parts[VALUE].parse::<u8>().unwrap_or(0);
                CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::Sd(value)))
            }
            "st" => {
                // Seconds per move; convert to milliseconds.
                let value = parts[VALUE].parse::<u128>().unwrap_or(0);
                CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::St(value * 1000)))
            }
            "time" => {
                // The GUI sends centiseconds; convert to milliseconds.
                let value = parts[VALUE].parse::<u128>().unwrap_or(0);
                CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::Time(value * 10)))
            }
            "otim" => {
                let value = parts[VALUE].parse::<u128>().unwrap_or(0);
                CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::OTim(value * 10)))
            }
            _ => CommIn::Unknown(cmd.to_string()),
        }
    }

    fn parse_setboard(cmd: &str) -> CommIn {
        let fen = cmd.replace("setboard", "").trim().to_string();
        CommIn::XBoard(XBoardIn::SetBoard(fen))
    }

    fn parse_level(cmd: &str) -> CommIn {
        const MOVES_PER_SESSION: usize = 1;
        const BASE_TIME: usize = 2;
        const INCREMENT: usize = 3;
        const MINUTES: usize = 0;
        const SECONDS: usize = 1;
        const COLON: &str = ":";
        const PERIOD: &str = ".";

        let parts: Vec<&str> = cmd.split_whitespace().collect();

        // "level moves_per_session base_time increment"; anything after
        // the increment is ignored.
        if parts.len() < 4 {
            return CommIn::Unknown(cmd.to_string());
        }

        let mps = parts[MOVES_PER_SESSION].parse::<u8>().unwrap_or(0);

        // Base time is minutes, or minutes:seconds.
        let bt = if parts[BASE_TIME].contains(COLON) {
            let time: Vec<&str> = parts[BASE_TIME].split(COLON).collect();
            let minutes = time[MINUTES].parse::<u128>().unwrap_or(0);
            let seconds = time.get(SECONDS).and_then(|s| s.parse::<u128>().ok()).unwrap_or(0);
            ((minutes * 60) + seconds) * 1000
        } else {
            parts[BASE_TIME].parse::<u128>().unwrap_or(0) * 60 * 1000
        };

        // The increment can be a fraction of a second.
        let inc = if parts[INCREMENT].contains(PERIOD) {
            let fraction = parts[INCREMENT].parse::<f64>().unwrap_or(0.0);
            (fraction * 1000_f64).round() as u128
        } else {
            parts[INCREMENT].parse::<u128>().unwrap_or(0) * 1000
        };

        CommIn::XBoard(XBoardIn::Buffered(XBoardInBuffered::Level(mps, bt, inc)))
    }

    // Try to parse anything that is not a command as a move: either the
    // castling literals or plain coordinate notation.
    fn parse_move(cmd: &str) -> CommIn {
        const ALPHA_COORDS: &str = "abcdefgh";
        const DIGIT_COORDS: &str = "12345678";
        const PROMOTIONS: &str = "qrbn";

        if cmd == "O-O" || cmd == "O-O-O" {
            return CommIn::XBoard(XBoardIn::UserMove(cmd.to_string(), TimeControl::new()));
        }

        let mut char_ok = 0;

        if cmd.len() == 4 || cmd.len() == 5 {
            for (i, c) in cmd.chars().enumerate() {
                match i {
                    0 | 2 if ALPHA_COORDS.contains(c) => char_ok += 1,
                    1 | 3 if DIGIT_COORDS.contains(c) => char_ok += 1,
                    4 if PROMOTIONS.contains(c) => char_ok += 1,
                    _ => (),
                }
            }
        }

        // Only if every character checks out is this a plausible move.
        if cmd.len() == char_ok {
            CommIn::XBoard(XBoardIn::UserMove(cmd.to_string(), TimeControl::new()))
        } else {
            CommIn::Unknown(cmd.to_string())
        }
    }
}

// ---------------------------------------------------------------------
// Output thread
// ---------------------------------------------------------------------

impl XBoard {
    // The output thread receives commands from the engine thread.
    fn output_thread(&mut self, board: Arc<Mutex<Board>>) {
        let (output_tx, output_rx) = crossbeam_channel::unbounded::<CommOut>();

        let output_handle = thread::spawn(move || {
            let mut quit = false;
            let t_board = Arc::clone(&board);

            while !quit {
                let output = output_rx.recv().expect(ErrFatal::CHANNEL);

                match output {
                    CommOut::XBoard(XBoardOut::NewLine) => XBoard::new_line(),
                    CommOut::XBoard(XBoardOut::Features) => XBoard::features(),
                    CommOut::XBoard(XBoardOut::Pong(value)) => XBoard::pong(value),

                    CommOut::BestMove(m) => XBoard::best_move(&m),
                    CommOut::IllegalMove(m) => XBoard::illegal_move(&m),
                    CommOut::Result(result, reason) => XBoard::result(result, reason),
                    CommOut::SearchSummary(summary) => XBoard::search_summary(&summary),
                    CommOut::Message(msg) => XBoard::message(&msg),
                    CommOut::Error(err_type, cmd) => XBoard::error(err_type, &cmd),
                    CommOut::Quit => quit = true,

                    // Custom prints for use in the console.
                    CommOut::PrintBoard => print::position(&t_board.lock()),
                    CommOut::PrintEval(eval) => println!("Evaluation: {} centipawns", eval),
                    CommOut::PrintHelp => XBoard::help(),
                }
            }
        });

        self.output_handle = Some(output_handle);
        self.output_tx = Some(output_tx);
    }
}

// ---------------------------------------------------------------------
// Print functions for the output thread
// ---------------------------------------------------------------------

impl XBoard {
    fn new_line() {
        println!();
    }

    fn features() {
        let myname = format!("myname=\"{} {}\"", About::ENGINE, About::VERSION);

        for f in FEATURES {
            let value = f.replace("myname=x", myname.as_str());
            println!("feature {}", value);
        }
    }

    fn pong(value: i8) {
        println!("pong {}", value);
    }

    fn best_move(m: &Move) {
        println!("move {}", m);
    }

    fn illegal_move(m: &str) {
        println!("Illegal move: {}", m);
    }

    fn message(msg: &str) {
        println!("# {}", msg);
    }

    fn error(err_type: &str, cmd: &str) {
        println!("Error ({}): {}", err_type, cmd);
    }

    // Post line: DEPTH SCORE TIME(centiseconds) NODES PV. The kernel
    // search does not count nodes, so that column reports zero.
    fn search_summary(s: &SearchSummary) {
        println!(
            "{} {} {} 0 {}",
            s.depth,
            s.eval,
            (s.time as f64 / 10.0).round(),
            s.best_move
        );
    }

    fn result(result: GameResult, reason: GameOverReason) {
        println!("{} {{{}}}", result, reason);
    }

    fn help() {
        println!("The engine is in XBoard communication mode. It supports some custom");
        println!("commands to make use through a terminal window easier.");
        println!();
        println!("Custom commands");
        println!("================================================================");
        println!("help      :   This help information.");
        println!("board     :   Print the current board state.");
        println!("eval      :   Print evaluation for side to move.");
        println!("exit      :   Leave analyze mode.");
        println!("quit      :   Quit the engine.");
        println!();
    }
}
