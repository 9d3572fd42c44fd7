//! # folder-dedup CLI
//!
//! Command-line interface for the duplicate image and folder scanner.
//!
//! ## Usage
//! ```bash
//! folder-dedup ~/Pictures
//! folder-dedup ~/Pictures --output pretty
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
