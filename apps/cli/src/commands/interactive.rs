//! # Interactive Command
//!
//! `wordify interactive`: one amount per line until EOF.
//!
//! ```text
//! > 1000
//! English: One Thousand Dollars Only
//! Chinese: 壹仟元整
//! > -3
//! error: Amount cannot be negative
//! > reset
//! Cleared.
//! ```
//!
//! Invalid lines are reported and the session continues; only output
//! failures end it early.

use std::io::{BufRead, Write};

use tracing::debug;

use super::convert::convert;
use super::OutputOptions;
use crate::clipboard::ClipboardSink;
use crate::error::{CliError, CliResult, ErrorCode};

/// Reads amounts from `input` and writes one result block per line.
pub fn session<R, W>(
    input: R,
    out: &mut W,
    options: &OutputOptions,
    clipboard: &mut dyn ClipboardSink,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut converted = 0usize;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "reset" | "clear" => writeln!(out, "Cleared.")?,
            "quit" | "exit" => break,
            raw => match convert(raw, options, clipboard, &mut *out) {
                Ok(()) => converted += 1,
                Err(err) if err.code == ErrorCode::InvalidAmount => {
                    report(out, &err, options.json)?;
                }
                Err(err) => return Err(err),
            },
        }
        out.flush()?;
    }

    debug!(converted, "session finished");
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &CliError, json: bool) -> CliResult<()> {
    if json {
        serde_json::to_writer(&mut *out, err)?;
        writeln!(out)?;
    } else {
        writeln!(out, "error: {}", err)?;
    }
    Ok(())
}
