//! Random curves CLI.
//!
//! Fills a list with random circles, ellipses and helixes, shares the circles
//! into a second list, prints the sum of their radii and sorts them.
//!
//! # Usage
//!
//! ```bash
//! curves
//! curves --seed 42 --count 20
//! RUST_LOG=debug curves
//! ```

use std::io::{self, Write};
use std::process;

use clap::Parser;
use curves_cli::{run, Options};

fn main() {
    env_logger::init();
    let options = Options::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&options, &mut out).and_then(|_| out.flush().map_err(Into::into));
    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
