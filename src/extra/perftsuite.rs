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

// Runs the embedded perft suite, fanning the test positions out over a
// pool of worker threads. Each worker owns its own board; only the
// read-only move generator is shared.

use super::suites::PERFT_SUITE;
use crate::{
    board::Board,
    engine::defs::ErrFatal,
    misc::perft,
    movegen::MoveGenerator,
};
use crossbeam_channel::unbounded;
use std::{sync::Arc, thread, time::Instant};

const SEMI_COLON: char = ';';
const SPACE: char = ' ';

struct TestResult {
    test_nr: usize,
    passed: bool,
    report: String,
}

pub fn run(threads: usize, mg: Arc<MoveGenerator>) {
    let number_of_tests = PERFT_SUITE.len();
    let workers = threads.max(1);
    println!(
        "Running {} perft tests on {} worker threads...",
        number_of_tests, workers
    );

    let started = Instant::now();
    let (job_tx, job_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<TestResult>();

    for test_nr in 0..number_of_tests {
        job_tx.send(test_nr).expect(ErrFatal::CHANNEL);
    }
    drop(job_tx);

    let mut handles = Vec::new();
    for _ in 0..workers {
        let t_job_rx = job_rx.clone();
        let t_result_tx = result_tx.clone();
        let t_mg = Arc::clone(&mg);

        handles.push(thread::spawn(move || {
            // The channel closes when all jobs are handed out.
            while let Ok(test_nr) = t_job_rx.recv() {
                let result = run_one(test_nr, &t_mg);
                t_result_tx.send(result).expect(ErrFatal::CHANNEL);
            }
        }));
    }
    drop(result_tx);

    let mut results: Vec<TestResult> = result_rx.iter().collect();
    results.sort_by_key(|r| r.test_nr);

    for h in handles {
        h.join().expect(ErrFatal::THREAD);
    }

    let mut all_passed = true;
    for r in &results {
        println!("{}", r.report);
        all_passed = all_passed && r.passed;
    }

    println!(
        "Finished in {} ms: {}",
        started.elapsed().as_millis(),
        if all_passed { "all tests passed" } else { "there were FAILURES" }
    );
}

fn run_one(test_nr: usize, mg: &MoveGenerator) -> TestResult {
    let data: Vec<String> = PERFT_SUITE[test_nr]
        .split(SEMI_COLON)
        .map(|s| s.trim().to_string())
        .collect();
    let fen = &data[0];

    let mut board = Board::new();
    let side = match board.fen_read(Some(fen)) {
        Ok(side) => side,
        Err(e) => {
            return TestResult {
                test_nr,
                passed: false,
                report: format!("Test {}: FEN error: {}", test_nr + 1, e),
            }
        }
    };

    let mut report = format!("Test {}: {}\n", test_nr + 1, fen);
    let mut passed = true;

    // Data index 0 is the FEN-string itself; every later part is one
    // "Dn expected" pair.
    for d in data.iter().skip(1) {
        let depth_nodes: Vec<String> = d.split(SPACE).map(|s| s.to_string()).collect();
        let depth = depth_nodes[0][1..].parse::<u8>().unwrap_or(0);
        let expected = depth_nodes[1].parse::<u64>().unwrap_or(0);

        let found = perft::perft(&mut board, side, depth, mg);
        let is_ok = found == expected;
        passed = passed && is_ok;

        report += &format!(
            "  depth {}: expected {}, found {} - {}\n",
            depth,
            expected,
            found,
            if is_ok { "OK" } else { "FAIL" }
        );

        if !is_ok {
            break;
        }
    }

    TestResult {
        test_nr,
        passed,
        report: report.trim_end().to_string(),
    }
}
