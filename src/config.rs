//! Compile-time settings.

use crate::models::Asn;

/// Root of the prefix lookup API.
pub const API_BASE: &str = "https://api.bgpview.io";

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// log4rs pattern for the stderr appender.
pub const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// URL of the announced-prefixes resource for `asn`.
pub fn prefixes_url(api_base: &str, asn: Asn) -> String {
    format!(
        "{base}/asn/{asn}/prefixes",
        base = api_base.trim_end_matches('/'),
        asn = asn.number()
    )
}
