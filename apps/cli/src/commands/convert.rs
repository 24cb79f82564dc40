//! # Convert Command
//!
//! `wordify convert 1234.56`
//!
//! ## Flow
//! ```text
//! "1234.56" ──► parse_amount ──► print renderings ──► copy (fire-and-forget)
//!     │
//!     └── invalid / negative ──► CliError (nothing printed, nothing copied)
//! ```

use std::io::Write;

use tracing::debug;
use wordify_core::parse_amount;

use super::{clipboard_text, renderings, write_renderings, OutputOptions};
use crate::clipboard::{copy_quietly, ClipboardSink};
use crate::error::CliResult;

/// Converts one raw amount and prints the result.
pub fn convert(
    raw: &str,
    options: &OutputOptions,
    clipboard: &mut dyn ClipboardSink,
    out: &mut dyn Write,
) -> CliResult<()> {
    let amount = parse_amount(raw).map_err(|err| {
        debug!(raw, %err, "rejected amount");
        err
    })?;
    debug!(%amount, selection = ?options.selection, "converting");

    let list = renderings(&amount, options);
    write_renderings(out, &list, options.json)?;

    if options.copy {
        if let Some(text) = clipboard_text(&amount, options, &list) {
            copy_quietly(clipboard, &text);
        }
    }

    Ok(())
}
