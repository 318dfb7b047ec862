use ipnetwork::IpNetwork;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  IP Version
-------------------------------------------------------------------------------------------------*/

/// IP address family (IPv4 or IPv6) used to partition prefixes and name output files.
#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub const ALL: [IpVersion; 2] = [IpVersion::V4, IpVersion::V6];

    pub fn of(network: &IpNetwork) -> Self {
        match network {
            IpNetwork::V4(_) => IpVersion::V4,
            IpNetwork::V6(_) => IpVersion::V6,
        }
    }

    /// File-name label: `v4` or `v6`.
    pub fn label(&self) -> &'static str {
        match self {
            IpVersion::V4 => "v4",
            IpVersion::V6 => "v6",
        }
    }

    /// Address width in bits.
    pub fn bits(&self) -> u8 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_version_bits_and_labels() {
        assert_eq!(IpVersion::V4.bits(), 32);
        assert_eq!(IpVersion::V6.bits(), 128);
        assert_eq!(
            IpVersion::ALL.map(|version| version.label()),
            ["v4", "v6"]
        );
    }

    #[test]
    fn test_ip_version_of_network() {
        let v4: IpNetwork = "198.51.100.0/24".parse().unwrap();
        let v6: IpNetwork = "2001:db8::/32".parse().unwrap();
        assert_eq!(IpVersion::of(&v4), IpVersion::V4);
        assert_eq!(IpVersion::of(&v6), IpVersion::V6);
        assert_eq!(IpVersion::of(&v6).to_string(), "v6");
    }
}
