//! Prefix data source.
//!
//! - [`bgpview`] - single HTTP lookup of the prefixes announced by an ASN

mod bgpview;

// Re-export public types and functions
pub use bgpview::{fetch_prefixes, fetch_prefixes_from, parse_prefixes_response, RawPrefixes};
