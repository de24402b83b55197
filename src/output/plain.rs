//! Plain newline-separated output.

use super::PlainFamily;
use crate::processing::Report;

/// One prefix per line, IPv4 before IPv6 when both are selected.
pub fn render_plain(report: &Report, family: PlainFamily) -> String {
    let mut out = String::new();
    let mut selected = Vec::new();
    if family.includes_ipv4() {
        selected.push(&report.ipv4);
    }
    if family.includes_ipv6() {
        selected.push(&report.ipv6);
    }
    for network in selected.into_iter().flatten() {
        out.push_str(&network.to_string());
        out.push('\n');
    }
    out
}
