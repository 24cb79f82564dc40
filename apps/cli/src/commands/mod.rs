//! # Commands Module
//!
//! Everything the `wordify` binary can do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (shared output helpers)
//! ├── convert.rs      ◄─── `wordify convert <AMOUNT>`
//! ├── interactive.rs  ◄─── `wordify interactive` (one amount per line)
//! └── config.rs       ◄─── `wordify config`
//! ```
//!
//! ## How A Conversion Flows
//! ```text
//! raw text ──► parse_amount ──► Amount
//!                                 │
//!                                 ├──► render(English) ─┐
//!                                 └──► render(Chinese) ─┼──► stdout
//!                                                       │
//!                       clipboard_text() ───────────────┴──► clipboard
//! ```
//!
//! Commands write to any `Write` so they can be tested without a terminal.

pub mod config;
pub mod convert;
pub mod interactive;

use std::io::Write;

use wordify_core::{render, Amount, Casing, Register, Rendering};

use crate::config::Selection;
use crate::error::CliResult;

/// Resolved output settings (arguments merged over configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub selection: Selection,
    pub caps: bool,
    pub copy: bool,
    pub copy_caps: bool,
    pub json: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            selection: Selection::Both,
            caps: false,
            copy: false,
            copy_caps: true,
            json: false,
        }
    }
}

/// Renders `amount` in every selected register.
pub fn renderings(amount: &Amount, options: &OutputOptions) -> Vec<Rendering> {
    let casing = if options.caps {
        Casing::Upper
    } else {
        Casing::Normal
    };
    options
        .selection
        .registers()
        .into_iter()
        .map(|register| render(amount, register, casing))
        .collect()
}

/// Text to put on the clipboard after a successful conversion.
///
/// With `copy_caps` the ALL CAPS English words are copied whenever English
/// is selected; otherwise the first printed result is.
pub fn clipboard_text(
    amount: &Amount,
    options: &OutputOptions,
    renderings: &[Rendering],
) -> Option<String> {
    if options.copy_caps && options.selection.includes(Register::English) {
        return Some(render(amount, Register::English, Casing::Upper).text);
    }
    renderings.first().map(|rendering| rendering.text.clone())
}

/// Prints results: bare text for one register, labelled lines for several,
/// or a JSON array.
pub fn write_renderings(
    out: &mut dyn Write,
    renderings: &[Rendering],
    json: bool,
) -> CliResult<()> {
    if json {
        serde_json::to_writer(&mut *out, renderings)?;
        writeln!(out)?;
        return Ok(());
    }

    match renderings {
        [single] => writeln!(out, "{}", single.text)?,
        many => {
            for rendering in many {
                writeln!(out, "{}: {}", rendering.register, rendering.text)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::clipboard::{ClipboardError, ClipboardSink};

    /// Records copies instead of touching the system clipboard.
    #[derive(Debug, Default)]
    pub struct RecordingClipboard {
        pub copies: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.copies.push(text.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount() -> Amount {
        Amount::new(1000, 0).unwrap()
    }

    #[test]
    fn test_renderings_follow_selection() {
        let options = OutputOptions::default();
        let all = renderings(&amount(), &options);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].text, "One Thousand Dollars Only");
        assert_eq!(all[1].text, "壹仟元整");

        let chinese = OutputOptions {
            selection: Selection::Chinese,
            ..options
        };
        assert_eq!(renderings(&amount(), &chinese).len(), 1);
    }

    #[test]
    fn test_clipboard_prefers_caps_english() {
        let options = OutputOptions::default();
        let list = renderings(&amount(), &options);
        assert_eq!(
            clipboard_text(&amount(), &options, &list).as_deref(),
            Some("ONE THOUSAND DOLLARS ONLY")
        );
    }

    #[test]
    fn test_clipboard_falls_back_to_first_result() {
        let options = OutputOptions {
            selection: Selection::Chinese,
            ..OutputOptions::default()
        };
        let list = renderings(&amount(), &options);
        assert_eq!(
            clipboard_text(&amount(), &options, &list).as_deref(),
            Some("壹仟元整")
        );

        let options = OutputOptions {
            copy_caps: false,
            ..OutputOptions::default()
        };
        let list = renderings(&amount(), &options);
        assert_eq!(
            clipboard_text(&amount(), &options, &list).as_deref(),
            Some("One Thousand Dollars Only")
        );
    }

    #[test]
    fn test_write_labelled_lines() {
        let list = renderings(&amount(), &OutputOptions::default());
        let mut out = Vec::new();
        write_renderings(&mut out, &list, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "English: One Thousand Dollars Only\nChinese: 壹仟元整\n"
        );
    }

    #[test]
    fn test_write_json() {
        let options = OutputOptions {
            selection: Selection::English,
            ..OutputOptions::default()
        };
        let list = renderings(&amount(), &options);
        let mut out = Vec::new();
        write_renderings(&mut out, &list, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["register"], "english");
        assert_eq!(value[0]["text"], "One Thousand Dollars Only");
    }
}
