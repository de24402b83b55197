//! Bash array output.

use crate::models::PrefixSet;
use crate::processing::Report;
use itertools::Itertools;

/// Quote a value for a POSIX shell with single quotes.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn declare_array(name: &str, set: &PrefixSet) -> String {
    let items = set.iter().map(|n| shell_quote(&n.to_string())).join(" ");
    format!("declare -a {name}=({items})")
}

/// Two `declare -a` lines, `ipv4` then `ipv6`.
pub fn render_bash(report: &Report) -> String {
    format!(
        "{}\n{}\n",
        declare_array("ipv4", &report.ipv4),
        declare_array("ipv6", &report.ipv6)
    )
}
