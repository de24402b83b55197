//! IP network (CIDR) model for both address families.
//!
//! Provides [`IpNetwork`], a normalized base-address/prefix-length pair,
//! together with the mask helpers the collapser builds on.

use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family of a network.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of an address in bits, which is also the longest prefix length.
    pub const fn max_len(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// All address bits of the family set.
    pub const fn width_mask(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Mask of the host bits below a prefix of `len` bits.
///
/// `len` must not exceed `family.max_len()`.
pub fn host_mask(family: Family, len: u8) -> u128 {
    let host_bits = u32::from(family.max_len() - len);
    1u128
        .checked_shl(host_bits)
        .map_or(u128::MAX, |bit| bit - 1)
}

/// Convert a prefix length to a network mask within the family width.
///
/// # Examples
/// ```
/// use asn2prefix::models::{network_mask, Family};
/// assert_eq!(network_mask(Family::V4, 24), 0xFFFF_FF00);
/// ```
pub fn network_mask(family: Family, len: u8) -> u128 {
    family.width_mask() & !host_mask(family, len)
}

/// IP network in CIDR notation, always stored in canonical form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpNetwork {
    // Field order gives the (family, base, prefix length) ordering.
    family: Family,
    base: u128,
    prefix_len: u8,
}

impl IpNetwork {
    /// Build a network from a raw base address, clearing any host bits.
    pub fn new(family: Family, base: u128, prefix_len: u8) -> Result<IpNetwork> {
        if prefix_len > family.max_len() {
            return Err(Error::invalid_prefix(
                &format!("{base}/{prefix_len}"),
                format!("prefix length {prefix_len} exceeds {}", family.max_len()),
            ));
        }
        if base > family.width_mask() {
            return Err(Error::invalid_prefix(
                &format!("{base}/{prefix_len}"),
                format!("base address does not fit in {}", family),
            ));
        }
        Ok(IpNetwork {
            family,
            base: base & network_mask(family, prefix_len),
            prefix_len,
        })
    }

    pub fn from_addr(addr: IpAddr, prefix_len: u8) -> Result<IpNetwork> {
        let base = match addr {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        };
        IpNetwork::new(Family::of(&addr), base, prefix_len)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn base(&self) -> u128 {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The network address as a std address.
    pub fn addr(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.base as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.base)),
        }
    }

    /// Highest address covered by the network, as an integer.
    pub fn last(&self) -> u128 {
        self.base | host_mask(self.family, self.prefix_len)
    }

    /// True when `other` lies entirely inside this network.
    pub fn contains(&self, other: &IpNetwork) -> bool {
        self.family == other.family
            && other.prefix_len >= self.prefix_len
            && other.base & network_mask(self.family, self.prefix_len) == self.base
    }

    pub fn contains_addr(&self, addr: IpAddr) -> bool {
        match IpNetwork::from_addr(addr, Family::of(&addr).max_len()) {
            Ok(host) => self.contains(&host),
            Err(_) => false,
        }
    }

    /// The enclosing network one bit shorter, `None` for a /0.
    pub fn parent(&self) -> Option<IpNetwork> {
        let prefix_len = self.prefix_len.checked_sub(1)?;
        Some(IpNetwork {
            family: self.family,
            base: self.base & network_mask(self.family, prefix_len),
            prefix_len,
        })
    }

    /// Merge with the upper half of the same parent block.
    ///
    /// Returns the parent when `self` is the lower half and `upper` the upper
    /// half of one `/(p-1)` network, otherwise `None`.
    pub fn merge_sibling(&self, upper: &IpNetwork) -> Option<IpNetwork> {
        if self.family != upper.family || self.prefix_len != upper.prefix_len {
            return None;
        }
        let parent = self.parent()?;
        // The bit that tells the two halves apart.
        let half_bit = host_mask(self.family, parent.prefix_len) ^ host_mask(self.family, self.prefix_len);
        if self.base & half_bit == 0 && upper.base == self.base | half_bit {
            Some(parent)
        } else {
            None
        }
    }
}

impl FromStr for IpNetwork {
    type Err = Error;

    /// Parse `addr/len`, or a bare address as a host network.
    fn from_str(s: &str) -> Result<IpNetwork> {
        let (addr_part, len_part) = match s.split_once('/') {
            Some((addr, len)) => (addr, Some(len)),
            None => (s, None),
        };
        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| Error::invalid_prefix(s, format!("invalid address '{addr_part}'")))?;
        let family = Family::of(&addr);

        let prefix_len = match len_part {
            None => family.max_len(),
            Some(len) => {
                if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::invalid_prefix(
                        s,
                        format!("invalid prefix length '{len}'"),
                    ));
                }
                len.parse::<u8>()
                    .map_err(|_| Error::invalid_prefix(s, format!("invalid prefix length '{len}'")))?
            }
        };
        if prefix_len > family.max_len() {
            return Err(Error::invalid_prefix(
                s,
                format!("prefix length {prefix_len} exceeds {}", family.max_len()),
            ));
        }

        IpNetwork::from_addr(addr, prefix_len)
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix_len)
    }
}

impl Serialize for IpNetwork {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpNetwork {
    fn deserialize<D>(deserializer: D) -> std::result::Result<IpNetwork, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpNetwork::from_str(&s).map_err(de::Error::custom)
    }
}
