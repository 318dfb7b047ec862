//! Small tools for maintaining a list of hosting providers identified by Autonomous System
//! (AS) number, and for working with the IP prefixes those providers announce.
//!
//! - **Provider list**: [ProviderList] loads, validates, appends to and rewrites the
//!   `hosting-providers-source.txt` list of `(name, as_number)` records.
//! - **Subnet search**: [SubnetSearch] walks files and directories and reports lines whose
//!   IP address or subnet overlaps any of a set of search networks.
//! - **Prefix fetch**: [pipeline::run] concurrently queries the RIPEstat announced-prefixes
//!   API for every provider, drops the default routes, partitions prefixes into IPv4 and
//!   IPv6, optionally [summarize]s them and writes one file per provider and IP version.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> hostingprefixes::Result<()> {
//! let providers = hostingprefixes::pipeline::read_providers("hosting-providers-source.txt")?;
//! let client = hostingprefixes::RegistryClient::new()?;
//!
//! let mut config = hostingprefixes::PipelineConfig::new("prefixes");
//! config.summarize = true;
//!
//! let report = hostingprefixes::pipeline::run(&client, &providers, &config).await?;
//! for file in report.files() {
//!     println!("{}", file.display());
//! }
//! # Ok(())
//! # }
//! ```

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

pub mod cli;
mod core;

/*-------------------------------------------------------------------------------------------------
  Primary Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{ClientBuilder, RegistryClient};
pub use crate::core::errors::{as_input_error, Error, InputError, Result};
pub use crate::core::ip_version::IpVersion;
pub use crate::core::pipeline::{ExcludedPrefixes, PipelineConfig, PipelineReport, PrefixSet};
pub use crate::core::provider::{parse_as_number, Provider};
pub use crate::core::provider_list::{add_provider, ProviderList, DEFAULT_PROVIDER_LIST_FILE};
pub use crate::core::search::{parse_search_networks, SubnetSearch};
pub use crate::core::search_results::{SearchMatch, SearchResults};
pub use crate::core::summarize::summarize;
pub use crate::core::utils::ipnetwork::{overlaps, parse_network};

pub mod pipeline {
    //! Prefix fetch pipeline.
    pub use crate::core::pipeline::{
        combined_file_name, read_providers, run, write_prefix_file, ProviderReport,
    };
}

/*-------------------------------------------------------------------------------------------------
  Re-exports
-------------------------------------------------------------------------------------------------*/

pub use ipnetwork;
