use crate::core::errors::{InputError, Result};
use crate::core::ip_version::IpVersion;
use crate::core::utils::is_valid_name;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Hosting Provider
-------------------------------------------------------------------------------------------------*/

/// A hosting provider identified by its Autonomous System (AS) number.
///
/// The name is restricted to ASCII letters, digits, hyphens and underscores so it can be
/// used verbatim in output file names. The AS number is strictly positive.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Provider {
    name: String,
    as_number: u32,
}

impl Provider {
    /// Create a validated [Provider].
    ///
    /// ```
    /// let provider = hostingprefixes::Provider::new("acme", 64500).unwrap();
    /// assert_eq!(provider.to_string(), "('acme', 64500)");
    ///
    /// assert!(hostingprefixes::Provider::new("acme hosting", 64500).is_err());
    /// assert!(hostingprefixes::Provider::new("acme", 0).is_err());
    /// ```
    pub fn new(name: &str, as_number: u32) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(InputError::InvalidName(name.to_string()).into());
        }
        if as_number == 0 {
            return Err(InputError::InvalidAsNumber(as_number.to_string()).into());
        }
        Ok(Self {
            name: name.to_string(),
            as_number,
        })
    }

    /// Create a validated [Provider] from command-line style string arguments.
    pub fn parse(name: &str, as_number: &str) -> Result<Self> {
        Self::new(name, parse_as_number(as_number)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_number(&self) -> u32 {
        self.as_number
    }

    /// Output file name for this provider's prefixes of one IP version:
    /// `<name>-AS<number>-<v4|v6>.txt`.
    pub fn file_name(&self, version: IpVersion) -> String {
        format!("{}-AS{}-{}.txt", self.name, self.as_number, version)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {})", self.name, self.as_number)
    }
}

/*--------------------------------------------------------------------------------------
  AS Number Parsing
--------------------------------------------------------------------------------------*/

/// Parse a strictly positive AS number.
pub fn parse_as_number(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(as_number) if as_number > 0 => Ok(as_number),
        _ => Err(InputError::InvalidAsNumber(value.to_string()).into()),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
