//! JSON output.

use crate::error::Result;
use crate::processing::Report;

/// Compact JSON: `{"ipv4":[..],"ipv6":[..],"stats":{..}}` plus a newline.
pub fn render_json(report: &Report) -> Result<String> {
    let mut out = serde_json::to_string(report)?;
    out.push('\n');
    Ok(out)
}
