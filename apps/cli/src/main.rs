//! # wordify
//!
//! Entry point. Setup lives in `lib.rs` so it can be unit tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    wordify_cli::run()
}
