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

pub mod defs;
pub mod xboard;

use crate::{board::Board, engine::defs::Information};
use crossbeam_channel::Sender;
use defs::CommOut;
use parking_lot::Mutex;
use std::sync::Arc;

// Any communication module the engine can drive must implement this
// trait. The engine thread creates the module, hands it the channel for
// incoming information, and sends output through it.
pub trait IComm {
    fn init(&mut self, receiving_tx: Sender<Information>, board: Arc<Mutex<Board>>);
    fn send(&self, msg: CommOut);
    fn shutdown(&mut self);
    fn get_protocol_name(&self) -> &'static str;
}
