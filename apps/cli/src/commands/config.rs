//! # Config Command
//!
//! `wordify config`: prints the effective configuration as JSON.

use std::io::Write;

use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Writes the resolved configuration (defaults, file and environment
/// merged).
pub fn show(config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    debug!("config command");
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults() {
        let mut out = Vec::new();
        show(&CliConfig::default(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["default_register"], "both");
        assert_eq!(value["auto_copy"], true);
        assert_eq!(value["copy_caps"], true);
        assert_eq!(value["log_filter"], "warn,wordify=info");
    }
}
