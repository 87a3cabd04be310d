// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: integer vectors
//
// v1 lives on the stack, v2 is a boxed handle (exit 1 if it cannot be
// allocated). v1 gets ten integers from 0 in steps of 2, v2 twenty from 100 in
// steps of -1. v1 loses its last element, v2 gains 1000. Both are printed to the
// terminal and to numbers.txt, then released.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use intvec::IntVector;
use numbers_demo::{DemoError, OUTPUT_FILE, run_vector_demo};

fn run() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut file = BufWriter::new(File::create(OUTPUT_FILE)?);

    let mut v1 = IntVector::new();
    let mut v2 = Some(IntVector::new_boxed().map_err(DemoError::InitialAllocation)?);

    let outcome = run_vector_demo(&mut v1, &mut v2, &mut out, &mut file)?;

    file.flush()?;

    if !outcome.is_complete() {
        eprintln!("vector-demo: some steps were skipped after allocation failures: {outcome:?}");
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vector-demo: {e}");
            ExitCode::from(1)
        }
    }
}
