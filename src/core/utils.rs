/*-------------------------------------------------------------------------------------------------
  Utilities
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Name Validation
--------------------------------------------------------------------------------------*/

/// True when `value` is non-empty and contains only ASCII letters, digits, hyphens and
/// underscores.
pub fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// True for dot-files and dot-directories.
pub fn is_hidden(file_name: &std::ffi::OsStr) -> bool {
    file_name.to_string_lossy().starts_with('.')
}

/*--------------------------------------------------------------------------------------
  IP Network Supplemental Functions
--------------------------------------------------------------------------------------*/

pub mod ipnetwork {
    use crate::core::errors::{InputError, Result};
    use crate::core::ip_version::IpVersion;
    use ::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
    use std::net::{Ipv4Addr, Ipv6Addr};

    /*
        Search targets and search queries are parsed leniently: a bare address
        is a host route (/32 or /128) and host bits may be set (`10.0.0.1/24`).
        Announced prefixes are parsed strictly: a prefix with host bits set is
        not a valid network and is rejected.
    */

    pub fn parse_network(value: &str) -> Result<IpNetwork> {
        let value = value.trim();
        value
            .parse::<IpNetwork>()
            .map_err(|_| InputError::InvalidNetwork(value.to_string()).into())
    }

    pub fn parse_strict_network(value: &str) -> Result<IpNetwork> {
        let network = parse_network(value)?;
        if network.ip() != network.network() {
            return Err(InputError::InvalidNetwork(value.trim().to_string()).into());
        }
        Ok(network)
    }

    /// First and last address of a network as integers (IPv4 values fit in the
    /// low 32 bits).
    pub fn bounds(ip_network: &IpNetwork) -> (u128, u128) {
        match ip_network {
            IpNetwork::V4(ipv4_network) => (
                u32::from(ipv4_network.network()) as u128,
                u32::from(ipv4_network.broadcast()) as u128,
            ),
            IpNetwork::V6(ipv6_network) => (
                u128::from(ipv6_network.network()),
                u128::from(ipv6_network.broadcast()),
            ),
        }
    }

    /// Build a network from an integer address and prefix length. The caller
    /// guarantees `prefix <= version.bits()`.
    pub(crate) fn from_bounds(version: IpVersion, address: u128, prefix: u8) -> IpNetwork {
        match version {
            IpVersion::V4 => IpNetwork::V4(
                Ipv4Network::new(Ipv4Addr::from(address as u32), prefix)
                    .expect("IPv4 prefix length is at most 32"),
            ),
            IpVersion::V6 => IpNetwork::V6(
                Ipv6Network::new(Ipv6Addr::from(address), prefix)
                    .expect("IPv6 prefix length is at most 128"),
            ),
        }
    }

    /*
        Two networks overlap when their address ranges share at least one
        address: one contains the other or they partially intersect. Networks
        of different families never overlap.
    */

    pub fn overlaps(a: &IpNetwork, b: &IpNetwork) -> bool {
        if IpVersion::of(a) != IpVersion::of(b) {
            return false;
        }
        let (a_first, a_last) = bounds(a);
        let (b_first, b_last) = bounds(b);
        a_first <= b_last && b_first <= a_last
    }

    #[cfg(test)]
    pub(crate) fn is_supernet_of(supernet: &IpNetwork, subnet: &IpNetwork) -> bool {
        if IpVersion::of(supernet) != IpVersion::of(subnet) {
            return false;
        }
        let (super_first, super_last) = bounds(supernet);
        let (sub_first, sub_last) = bounds(subnet);
        super_first <= sub_first && sub_last <= super_last
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::ipnetwork::*;
    use super::*;
    use ::ipnetwork::IpNetwork;
    use test_log::test;

    fn net(value: &str) -> IpNetwork {
        parse_network(value).unwrap()
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("acme"));
        assert!(is_valid_name("Acme_Hosting-2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("acme hosting"));
        assert!(!is_valid_name("acme.com"));
        assert!(!is_valid_name("acme'"));
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(std::ffi::OsStr::new(".git")));
        assert!(!is_hidden(std::ffi::OsStr::new("prefixes.txt")));
    }

    /*----------------------------------------------------------------------------------
      Parsing
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_parse_network_lenient() {
        assert_eq!(net("10.0.0.1"), "10.0.0.1/32".parse::<IpNetwork>().unwrap());
        assert_eq!(net("2001:db8::1"), "2001:db8::1/128".parse::<IpNetwork>().unwrap());
        assert_eq!(net(" 10.0.0.1/24 ").prefix(), 24);
        assert_eq!(net("10.0.0.0/255.255.255.0").prefix(), 24);
        assert!(parse_network("").is_err());
        assert!(parse_network("not-an-ip").is_err());
        assert!(parse_network("10.0.0.0/33").is_err());
    }

    #[test]
    fn test_parse_strict_network() {
        assert!(parse_strict_network("198.51.100.0/24").is_ok());
        assert!(parse_strict_network("2001:db8::/32").is_ok());
        assert!(parse_strict_network("198.51.100.1/24").is_err());
    }

    /*----------------------------------------------------------------------------------
      Overlap
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_overlaps_containment() {
        assert!(overlaps(&net("10.0.0.0/24"), &net("10.0.0.0/25")));
        assert!(overlaps(&net("10.0.0.0/25"), &net("10.0.0.0/24")));
        assert!(overlaps(&net("10.0.0.0/8"), &net("10.20.30.40")));
    }

    #[test]
    fn test_overlaps_disjoint() {
        assert!(!overlaps(&net("10.0.0.0/24"), &net("10.1.0.0/24")));
        assert!(!overlaps(&net("10.1.0.0/24"), &net("10.0.0.0/24")));
        assert!(!overlaps(&net("10.0.0.0/25"), &net("10.0.0.128/25")));
    }

    #[test]
    fn test_overlaps_host_bits_set() {
        // 10.0.0.77/24 covers 10.0.0.0 - 10.0.0.255
        assert!(overlaps(&net("10.0.0.77/24"), &net("10.0.0.200")));
    }

    #[test]
    fn test_overlaps_mixed_families() {
        assert!(!overlaps(&net("0.0.0.0/0"), &net("::/0")));
    }

    #[test]
    fn test_overlaps_ipv6() {
        assert!(overlaps(&net("2001:db8::/32"), &net("2001:db8:1::/48")));
        assert!(!overlaps(&net("2001:db8::/32"), &net("2001:db9::/32")));
        assert!(overlaps(&net("::/0"), &net("2001:db8::1")));
    }

    #[test]
    fn test_is_supernet_of() {
        assert!(is_supernet_of(&net("10.0.0.0/8"), &net("10.1.0.0/16")));
        assert!(!is_supernet_of(&net("10.1.0.0/16"), &net("10.0.0.0/8")));
        assert!(!is_supernet_of(&net("0.0.0.0/0"), &net("::1")));
    }
}
