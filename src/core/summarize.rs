use crate::core::ip_version::IpVersion;
use crate::core::utils::ipnetwork::{bounds, from_bounds};
use ipnetwork::IpNetwork;
use log::trace;

/*-------------------------------------------------------------------------------------------------
  Summarize (Collapse) IP Networks
-------------------------------------------------------------------------------------------------*/

/// Collapse a set of networks into the minimal set of CIDR blocks covering exactly the same
/// addresses. Contained, overlapping and adjacent networks are merged. The result is sorted
/// ascending by network address, IPv4 networks before IPv6 networks.
///
/// ```
/// use hostingprefixes::ipnetwork::IpNetwork;
///
/// let networks: Vec<IpNetwork> = ["10.0.1.0/24", "10.0.0.0/24", "10.0.0.128/25"]
///     .iter()
///     .map(|network| network.parse().unwrap())
///     .collect();
///
/// let summarized = hostingprefixes::summarize(&networks);
/// assert_eq!(summarized, vec!["10.0.0.0/23".parse::<IpNetwork>().unwrap()]);
/// ```
pub fn summarize<'n, I>(networks: I) -> Vec<IpNetwork>
where
    I: IntoIterator<Item = &'n IpNetwork>,
{
    let mut v4_ranges: Vec<(u128, u128)> = Vec::new();
    let mut v6_ranges: Vec<(u128, u128)> = Vec::new();

    for network in networks {
        match IpVersion::of(network) {
            IpVersion::V4 => v4_ranges.push(bounds(network)),
            IpVersion::V6 => v6_ranges.push(bounds(network)),
        }
    }

    let mut summarized = collapse(IpVersion::V4, v4_ranges);
    summarized.extend(collapse(IpVersion::V6, v6_ranges));
    summarized
}

/*--------------------------------------------------------------------------------------
  Helper Functions
--------------------------------------------------------------------------------------*/

fn collapse(version: IpVersion, ranges: Vec<(u128, u128)>) -> Vec<IpNetwork> {
    merge_ranges(ranges)
        .into_iter()
        .flat_map(|(first, last)| range_to_networks(version, first, last))
        .collect()
}

/// Merge overlapping and adjacent `(first, last)` address ranges.
fn merge_ranges(mut ranges: Vec<(u128, u128)>) -> Vec<(u128, u128)> {
    ranges.sort_unstable();

    let mut merged: Vec<(u128, u128)> = Vec::with_capacity(ranges.len());
    for (first, last) in ranges {
        match merged.last_mut() {
            Some((_, current_last)) if first <= current_last.saturating_add(1) => {
                if last > *current_last {
                    *current_last = last;
                }
            }
            _ => merged.push((first, last)),
        }
    }
    merged
}

/// Split an inclusive address range into the fewest aligned CIDR blocks.
fn range_to_networks(version: IpVersion, mut first: u128, last: u128) -> Vec<IpNetwork> {
    let bits = version.bits() as u32;
    let mut networks = Vec::new();

    loop {
        // Largest block aligned on `first`
        let mut host_bits = if first == 0 {
            bits
        } else {
            first.trailing_zeros().min(bits)
        };
        // ...that does not run past `last`
        while host_bits > 0 && block_last(first, host_bits) > last {
            host_bits -= 1;
        }

        let network = from_bounds(version, first, (bits - host_bits) as u8);
        trace!("Range block: {network}");
        networks.push(network);

        let end = block_last(first, host_bits);
        if end >= last {
            break;
        }
        first = end + 1;
    }

    networks
}

fn block_last(first: u128, host_bits: u32) -> u128 {
    if host_bits >= 128 {
        u128::MAX
    } else {
        first | ((1u128 << host_bits) - 1)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
