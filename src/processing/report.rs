//! Collapse both families of a lookup result and keep the counts.

use super::collapse_prefixes;
use crate::error::Result;
use crate::models::{Family, PrefixSet};
use crate::source::RawPrefixes;
use serde::Serialize;

/// Prefix counts before and after collapsing.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub raw_v4: usize,
    pub raw_v6: usize,
    pub collapsed_v4: usize,
    pub collapsed_v6: usize,
}

/// Collapsed prefixes of one ASN, ready for rendering.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub ipv4: PrefixSet,
    pub ipv6: PrefixSet,
    pub stats: Stats,
}

/// Collapse the IPv4 and IPv6 lists separately and record the counts.
pub fn build_report(raw: &RawPrefixes) -> Result<Report> {
    let ipv4 = collapse_prefixes(Family::V4, raw.ipv4.as_slice())?;
    let ipv6 = collapse_prefixes(Family::V6, raw.ipv6.as_slice())?;
    let stats = Stats {
        raw_v4: raw.ipv4.len(),
        raw_v6: raw.ipv6.len(),
        collapsed_v4: ipv4.len(),
        collapsed_v6: ipv6.len(),
    };
    log::info!("{stats:?}");
    Ok(Report { ipv4, ipv6, stats })
}
