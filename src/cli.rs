//! Command-line argument definitions.

use crate::models::Asn;
use crate::output::{OutputMode, PlainFamily};
use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  asn2prefix 15169                 # JSON, good for jq
  asn2prefix AS714 --bash          # two shell arrays: ipv4[], ipv6[]
  asn2prefix 714 --plain ipv6      # newline-separated IPv6 only";

/// Fetch an ASN's announced prefixes, collapse them, and print them as JSON
/// (default), bash arrays, or a plain list.
#[derive(Parser, Debug)]
#[command(name = "asn2prefix")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// ASN to look up: 714, AS714 or as714
    #[arg(value_name = "ASN")]
    pub asn: Asn,

    /// Output bash array literals
    #[arg(long = "bash", conflicts_with = "plain")]
    pub bash: bool,

    /// Newline list of one family (ipv4 / ipv6 / both)
    #[arg(long = "plain", value_enum, value_name = "FAMILY")]
    pub plain: Option<PlainFamily>,

    /// Log progress on stderr (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn output_mode(&self) -> OutputMode {
        match (self.bash, self.plain) {
            (true, _) => OutputMode::Bash,
            (false, Some(family)) => OutputMode::Plain(family),
            (false, None) => OutputMode::Json,
        }
    }
}
