//! Sales Ledger CLI
//!
//! Streams the sales transaction file `sprzedaz.csv` from the working
//! directory and prints one human-readable line per record.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to control logging verbosity

use log::debug;
use sales_ledger::{Result, SalesReader};
use std::process;

/// Fixed input path, relative to the working directory.
const INPUT_PATH: &str = "sprzedaz.csv";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    debug!("reading sales transactions from {}", INPUT_PATH);

    let mut count = 0usize;
    for result in SalesReader::open(INPUT_PATH)? {
        let transaction = result?;
        println!("{}", transaction);
        count += 1;
    }

    debug!("{} records read", count);
    Ok(())
}
