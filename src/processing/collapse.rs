//! Prefix collapsing.
//!
//! Merges sibling networks and drops contained ones until the list is the
//! smallest set of CIDR blocks covering exactly the same addresses.

use crate::error::{Error, Result};
use crate::models::{Family, IpNetwork, PrefixSet};
use itertools::Itertools;

/// Collapse networks of a single family into a [`PrefixSet`].
///
/// # Arguments
/// * `networks` - Networks in any order, possibly overlapping or duplicated
///
/// # Returns
/// * `Ok(PrefixSet)` - Sorted, minimal covering set
/// * `Err(Error::MixedFamily)` - If the input mixes IPv4 and IPv6
pub fn collapse<I>(networks: I) -> Result<PrefixSet>
where
    I: IntoIterator<Item = IpNetwork>,
{
    let networks: Vec<IpNetwork> = networks.into_iter().collect();

    if let Some(first) = networks.first() {
        let expected = first.family();
        if let Some(other) = networks.iter().find(|n| n.family() != expected) {
            return Err(Error::MixedFamily {
                expected,
                prefix: other.to_string(),
            });
        }
    }

    let mut stack: Vec<IpNetwork> = Vec::with_capacity(networks.len());
    for network in networks.into_iter().sorted() {
        push_merged(&mut stack, network);
    }

    log::trace!("collapse() => {} networks", stack.len());
    Ok(PrefixSet::from_collapsed(stack))
}

/// Parse raw CIDR strings of `family` and collapse them.
///
/// Any string that does not parse fails the whole call, so a result is never
/// silently incomplete.
pub fn collapse_prefixes<S: AsRef<str>>(family: Family, raw: &[S]) -> Result<PrefixSet> {
    let networks = raw
        .iter()
        .map(|s| -> Result<IpNetwork> {
            let network: IpNetwork = s.as_ref().parse()?;
            if network.family() != family {
                return Err(Error::MixedFamily {
                    expected: family,
                    prefix: s.as_ref().to_string(),
                });
            }
            Ok(network)
        })
        .collect::<Result<Vec<_>>>()?;

    let collapsed = collapse(networks)?;
    log::debug!(
        "collapsed {} {} prefixes into {}",
        raw.len(),
        family,
        collapsed.len()
    );
    Ok(collapsed)
}

/// Push one network from the sorted input, merging with the stack top while possible.
fn push_merged(stack: &mut Vec<IpNetwork>, mut network: IpNetwork) {
    while let Some(top) = stack.last() {
        if top.contains(&network) {
            log::trace!("absorb {network} into {top}");
            return;
        }
        match top.merge_sibling(&network) {
            Some(parent) => {
                log::trace!("merge {top} + {network} => {parent}");
                stack.pop();
                network = parent;
            }
            None => break,
        }
    }
    stack.push(network);
}
