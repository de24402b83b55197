//! Output formatting for collapsed prefixes.
//!
//! This module renders a [`Report`] for stdout:
//! - [`json`] - compact JSON object with stats (default)
//! - [`shell`] - bash `declare -a` array literals
//! - [`plain`] - newline-separated prefixes of the selected families

mod json;
mod plain;
mod shell;

use crate::error::Result;
use crate::processing::Report;
use clap::ValueEnum;

pub use json::render_json;
pub use plain::render_plain;
pub use shell::{render_bash, shell_quote};

/// Families printed by the plain list output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlainFamily {
    Ipv4,
    Ipv6,
    Both,
}

impl PlainFamily {
    pub fn includes_ipv4(self) -> bool {
        matches!(self, PlainFamily::Ipv4 | PlainFamily::Both)
    }

    pub fn includes_ipv6(self) -> bool {
        matches!(self, PlainFamily::Ipv6 | PlainFamily::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Json,
    Bash,
    Plain(PlainFamily),
}

/// Render `report` in `mode`; the result ends with a newline unless empty.
pub fn render(report: &Report, mode: OutputMode) -> Result<String> {
    log::debug!("render {mode:?}");
    match mode {
        OutputMode::Json => render_json(report),
        OutputMode::Bash => Ok(render_bash(report)),
        OutputMode::Plain(family) => Ok(render_plain(report, family)),
    }
}
