//! Collapsed, sorted set of networks of one family.

use super::{Family, IpNetwork};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Sorted, non-overlapping and fully merged list of networks.
///
/// Only [`crate::processing::collapse`] builds one, so the invariants hold
/// for every value in circulation.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PrefixSet {
    networks: Vec<IpNetwork>,
}

impl PrefixSet {
    pub(crate) fn from_collapsed(networks: Vec<IpNetwork>) -> PrefixSet {
        PrefixSet { networks }
    }

    /// Family of the members, `None` when empty.
    pub fn family(&self) -> Option<Family> {
        self.networks.first().map(IpNetwork::family)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpNetwork> {
        self.networks.iter()
    }

    pub fn as_slice(&self) -> &[IpNetwork] {
        &self.networks
    }

    /// True when any member covers `addr`.
    pub fn contains_addr(&self, addr: IpAddr) -> bool {
        self.networks.iter().any(|n| n.contains_addr(addr))
    }

    /// CIDR strings in set order.
    pub fn to_strings(&self) -> Vec<String> {
        self.networks.iter().map(|n| n.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a PrefixSet {
    type Item = &'a IpNetwork;
    type IntoIter = std::slice::Iter<'a, IpNetwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.networks.iter()
    }
}

impl IntoIterator for PrefixSet {
    type Item = IpNetwork;
    type IntoIter = std::vec::IntoIter<IpNetwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.networks.into_iter()
    }
}

impl fmt::Display for PrefixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cidrs = self.to_strings();
        write!(f, "[{}]", cidrs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(prefixes: &[&str]) -> PrefixSet {
        PrefixSet::from_collapsed(prefixes.iter().map(|p| p.parse().unwrap()).collect())
    }

    #[test]
    fn test_empty_set() {
        let s = PrefixSet::default();
        assert!(s.is_empty());
        assert_eq!(s.family(), None);
        assert_eq!(s.to_string(), "[]");
        assert_eq!(serde_json::to_string(&s).unwrap(), "[]");
    }

    #[test]
    fn test_set_serializes_as_string_array() {
        let s = set(&["1.1.0.0/23", "8.8.8.0/24"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.family(), Some(Family::V4));
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"["1.1.0.0/23","8.8.8.0/24"]"#
        );
        assert_eq!(s.to_string(), "[1.1.0.0/23, 8.8.8.0/24]");
    }

    #[test]
    fn test_contains_addr() {
        let s = set(&["10.0.0.0/24", "10.0.2.0/24"]);
        assert!(s.contains_addr("10.0.0.1".parse().unwrap()));
        assert!(!s.contains_addr("10.0.1.1".parse().unwrap()));
        assert!(s.contains_addr("10.0.2.255".parse().unwrap()));
    }
}
