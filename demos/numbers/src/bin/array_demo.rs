// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: raw integer buffer
//
// Allocates 20 integers (exit 1 if that fails), fills them 0, 2, ... 38 and
// prints them. Then grows the buffer to 40 and, if that worked, fills the new
// half 0, -2, ... -38 and prints everything to the terminal and numbers.txt.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use numbers_demo::{ArrayDemo, DemoError, GROWN_LEN, INITIAL_LEN, OUTPUT_FILE};

fn run() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut demo = ArrayDemo::start(INITIAL_LEN, &mut out)?;

    let mut file = BufWriter::new(File::create(OUTPUT_FILE)?);

    if !demo.grow(GROWN_LEN, &mut out, &mut file)?.is_completed() {
        eprintln!("array-demo: could not grow to {GROWN_LEN} integers, second stage skipped");
    }

    file.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("array-demo: {e}");
            ExitCode::from(1)
        }
    }
}
