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

use crate::defs::{About, FEN_START_POSITION};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

// Consts for command line options, flags and arguments

struct CmdLineArgs;
impl CmdLineArgs {
    // FEN
    const FEN_LONG: &'static str = "fen";
    const FEN_SHORT: char = 'f';
    const FEN_HELP: &'static str = "Set up the given position";

    // Perft
    const PERFT_LONG: &'static str = "perft";
    const PERFT_SHORT: char = 'p';
    const PERFT_HELP: &'static str = "Run perft to the given depth";
    const PERFT_DEFAULT: u8 = 0;

    // Search depth
    const DEPTH_LONG: &'static str = "depth";
    const DEPTH_SHORT: char = 'd';
    const DEPTH_HELP: &'static str = "Default search depth in plies";
    const DEPTH_DEFAULT: u8 = 5;

    // Threads
    const THREADS_LONG: &'static str = "threads";
    const THREADS_SHORT: char = 't';
    const THREADS_HELP: &'static str = "Worker threads for the perft suite";
    const THREADS_DEFAULT: usize = 4;

    // Quiet (no post lines)
    const QUIET_LONG: &'static str = "quiet";
    const QUIET_SHORT: char = 'q';
    const QUIET_HELP: &'static str = "No thinking output during search";

    // Kiwipete
    const KIWI_LONG: &'static str = "kiwipete";
    const KIWI_SHORT: char = 'k';
    const KIWI_HELP: &'static str = "Set up KiwiPete position (ignore --fen)";

    // Perft suite
    #[cfg(feature = "extra")]
    const EPD_TEST_LONG: &'static str = "epdtest";
    #[cfg(feature = "extra")]
    const EPD_TEST_HELP: &'static str = "Run the perft test suite";

    // Self-play
    #[cfg(feature = "extra")]
    const SELFPLAY_LONG: &'static str = "selfplay";
    #[cfg(feature = "extra")]
    const SELFPLAY_HELP: &'static str = "Play an engine-vs-engine game and write it as PGN";
}

pub struct CmdLine {
    arguments: ArgMatches,
}

impl CmdLine {
    pub fn new() -> Self {
        Self {
            arguments: Self::get(),
        }
    }

    pub fn fen(&self) -> String {
        self.arguments
            .get_one::<String>(CmdLineArgs::FEN_LONG)
            .unwrap_or(&FEN_START_POSITION.to_string())
            .clone()
    }

    pub fn perft(&self) -> u8 {
        *self
            .arguments
            .get_one::<u8>(CmdLineArgs::PERFT_LONG)
            .unwrap_or(&CmdLineArgs::PERFT_DEFAULT)
    }

    pub fn depth(&self) -> u8 {
        *self
            .arguments
            .get_one::<u8>(CmdLineArgs::DEPTH_LONG)
            .unwrap_or(&CmdLineArgs::DEPTH_DEFAULT)
    }

    pub fn threads(&self) -> usize {
        *self
            .arguments
            .get_one::<usize>(CmdLineArgs::THREADS_LONG)
            .unwrap_or(&CmdLineArgs::THREADS_DEFAULT)
    }

    pub fn has_quiet(&self) -> bool {
        self.arguments.get_flag(CmdLineArgs::QUIET_LONG)
    }

    pub fn has_kiwipete(&self) -> bool {
        self.arguments.get_flag(CmdLineArgs::KIWI_LONG)
    }

    #[cfg(feature = "extra")]
    pub fn has_epd_test(&self) -> bool {
        self.arguments.get_flag(CmdLineArgs::EPD_TEST_LONG)
    }

    #[cfg(feature = "extra")]
    pub fn has_selfplay(&self) -> bool {
        self.arguments.get_flag(CmdLineArgs::SELFPLAY_LONG)
    }

    fn get() -> ArgMatches {
        let cmd = Command::new(About::ENGINE)
            .version(About::VERSION)
            .author(About::AUTHOR)
            .arg(
                Arg::new(CmdLineArgs::FEN_LONG)
                    .short(CmdLineArgs::FEN_SHORT)
                    .long(CmdLineArgs::FEN_LONG)
                    .help(CmdLineArgs::FEN_HELP)
                    .num_args(1)
                    .default_value(FEN_START_POSITION),
            )
            .arg(
                Arg::new(CmdLineArgs::PERFT_LONG)
                    .short(CmdLineArgs::PERFT_SHORT)
                    .long(CmdLineArgs::PERFT_LONG)
                    .help(CmdLineArgs::PERFT_HELP)
                    .num_args(1)
                    .value_parser(value_parser!(u8))
                    .default_value("0"),
            )
            .arg(
                Arg::new(CmdLineArgs::DEPTH_LONG)
                    .short(CmdLineArgs::DEPTH_SHORT)
                    .long(CmdLineArgs::DEPTH_LONG)
                    .help(CmdLineArgs::DEPTH_HELP)
                    .num_args(1)
                    .value_parser(value_parser!(u8))
                    .default_value("5"),
            )
            .arg(
                Arg::new(CmdLineArgs::THREADS_LONG)
                    .short(CmdLineArgs::THREADS_SHORT)
                    .long(CmdLineArgs::THREADS_LONG)
                    .help(CmdLineArgs::THREADS_HELP)
                    .num_args(1)
                    .value_parser(value_parser!(usize))
                    .default_value("4"),
            )
            .arg(
                Arg::new(CmdLineArgs::KIWI_LONG)
                    .short(CmdLineArgs::KIWI_SHORT)
                    .long(CmdLineArgs::KIWI_LONG)
                    .help(CmdLineArgs::KIWI_HELP)
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(CmdLineArgs::QUIET_LONG)
                    .short(CmdLineArgs::QUIET_SHORT)
                    .long(CmdLineArgs::QUIET_LONG)
                    .help(CmdLineArgs::QUIET_HELP)
                    .action(ArgAction::SetTrue),
            );

        #[cfg(feature = "extra")]
        let cmd = cmd
            .arg(
                Arg::new(CmdLineArgs::EPD_TEST_LONG)
                    .long(CmdLineArgs::EPD_TEST_LONG)
                    .help(CmdLineArgs::EPD_TEST_HELP)
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(CmdLineArgs::SELFPLAY_LONG)
                    .long(CmdLineArgs::SELFPLAY_LONG)
                    .help(CmdLineArgs::SELFPLAY_HELP)
                    .action(ArgAction::SetTrue),
            );

        cmd.get_matches()
    }
}
