//! Domain models for ASN prefix lookups.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Asn`] - Autonomous System Number parsed from the command line
//! - [`IpNetwork`] and [`Family`] - normalized CIDR network of either family
//! - [`PrefixSet`] - sorted, collapsed networks of one family

mod asn;
mod network;
mod prefix_set;

// Re-export public types
pub use asn::Asn;
pub use network::{host_mask, network_mask, Family, IpNetwork};
pub use prefix_set::PrefixSet;
