use crate::core::client::RegistryClient;
use crate::core::errors::{Error, Result};
use crate::core::ip_version::IpVersion;
use crate::core::provider::Provider;
use crate::core::provider_list::ProviderList;
use crate::core::summarize::summarize;
use crate::core::utils::ipnetwork::{from_bounds, parse_strict_network};
use futures::future::join_all;
use ipnetwork::IpNetwork;
use log::{error, info, warn};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Excluded Prefixes
-------------------------------------------------------------------------------------------------*/

/// Prefixes dropped from every registry response. Defaults to the "announce everything"
/// routes `0.0.0.0/0` and `::/0`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExcludedPrefixes {
    prefixes: BTreeSet<IpNetwork>,
}

impl Default for ExcludedPrefixes {
    fn default() -> Self {
        Self::new([
            from_bounds(IpVersion::V4, 0, 0), // 0.0.0.0/0
            from_bounds(IpVersion::V6, 0, 0), // ::/0
        ])
    }
}

impl ExcludedPrefixes {
    pub fn new<I: IntoIterator<Item = IpNetwork>>(prefixes: I) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    pub fn contains(&self, prefix: &IpNetwork) -> bool {
        self.prefixes.contains(prefix)
    }
}

/*-------------------------------------------------------------------------------------------------
  Pipeline Configuration
-------------------------------------------------------------------------------------------------*/

/// Read-only configuration shared by every provider task.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Directory receiving the output files; created when missing.
    pub output_dir: PathBuf,

    /// Also write `combined-v4.txt` / `combined-v6.txt` across all providers.
    pub combined: bool,

    /// Collapse prefixes into their minimal covering set before writing. In combined mode
    /// only the combined files are summarized.
    pub summarize: bool,

    pub excluded: ExcludedPrefixes,
}

impl PipelineConfig {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            combined: false,
            summarize: false,
            excluded: ExcludedPrefixes::default(),
        }
    }

    fn summarize_per_provider(&self) -> bool {
        self.summarize && !self.combined
    }
}

/*-------------------------------------------------------------------------------------------------
  Prefix Set
-------------------------------------------------------------------------------------------------*/

/// A provider's announced prefixes partitioned by IP version, in API order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixSet {
    pub v4: Vec<IpNetwork>,
    pub v6: Vec<IpNetwork>,
}

impl PrefixSet {
    /// Partition raw prefix strings. Excluded prefixes and strings that are not valid
    /// network prefixes (including prefixes with host bits set) are logged and dropped.
    pub fn partition<S: AsRef<str>>(
        provider: &Provider,
        prefixes: &[S],
        excluded: &ExcludedPrefixes,
    ) -> Self {
        let mut prefix_set = PrefixSet::default();

        for prefix in prefixes {
            let prefix = prefix.as_ref();
            let network = match parse_strict_network(prefix) {
                Ok(network) => network,
                Err(_) => {
                    warn!("Invalid IP prefix from AS{}: {}", provider.as_number(), prefix);
                    continue;
                }
            };

            if excluded.contains(&network) {
                warn!(
                    "Prefix {} is part of excluded prefixes for AS{}",
                    prefix,
                    provider.as_number()
                );
                continue;
            }

            match IpVersion::of(&network) {
                IpVersion::V4 => prefix_set.v4.push(network),
                IpVersion::V6 => prefix_set.v6.push(network),
            }
        }

        prefix_set
    }

    pub fn get(&self, version: IpVersion) -> &[IpNetwork] {
        match version {
            IpVersion::V4 => &self.v4,
            IpVersion::V6 => &self.v6,
        }
    }

    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    /// Append another set's prefixes after this set's, per IP version.
    pub fn extend(&mut self, other: &PrefixSet) {
        self.v4.extend_from_slice(&other.v4);
        self.v6.extend_from_slice(&other.v6);
    }
}

/*-------------------------------------------------------------------------------------------------
  Reports
-------------------------------------------------------------------------------------------------*/

/// Outcome of one provider's fetch.
#[derive(Clone, Debug)]
pub struct ProviderReport {
    pub provider: Provider,

    /// Prefixes kept after filtering, before any summarization.
    pub prefixes: PrefixSet,

    /// Files written for this provider, v4 before v6.
    pub files: Vec<PathBuf>,

    /// Set when the registry query failed and the provider degraded to no prefixes.
    pub fetch_error: Option<String>,
}

/// Outcome of a pipeline run, with providers in input order.
#[derive(Clone, Debug, Default)]
pub struct PipelineReport {
    pub providers: Vec<ProviderReport>,
    pub combined_files: Vec<PathBuf>,
}

impl PipelineReport {
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.providers
            .iter()
            .flat_map(|report| report.files.iter())
            .chain(self.combined_files.iter())
    }

    pub fn failed_providers(&self) -> usize {
        self.providers
            .iter()
            .filter(|report| report.fetch_error.is_some())
            .count()
    }
}

/*-------------------------------------------------------------------------------------------------
  Pipeline
-------------------------------------------------------------------------------------------------*/

/// Read the provider list consumed by the pipeline. Unlike the editor, a missing file is
/// an error.
pub fn read_providers<P: AsRef<Path>>(path: P) -> Result<Vec<Provider>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|error| Error::from(format!("Unable to read {}: {}", path.display(), error)))?;
    Ok(ProviderList::parse(&content)?.into_providers())
}

/// Fetch, filter, partition and write the announced prefixes of every provider.
///
/// All providers are queried concurrently through the shared client. A provider whose
/// query fails yields no prefixes and does not affect the others. The combined files are
/// written once every provider has finished.
///
/// File-system errors are fatal. Such an error is only returned after every provider task
/// has finished, so the output directory may already hold files written by other providers.
pub async fn run(
    client: &RegistryClient,
    providers: &[Provider],
    config: &PipelineConfig,
) -> Result<PipelineReport> {
    fs::create_dir_all(&config.output_dir)?;

    let start_time = client.start_time();
    info!(
        "Fetching prefixes for {} provider(s) announced since {}",
        providers.len(),
        start_time
    );

    let tasks = providers
        .iter()
        .map(|provider| process_provider(client, provider, &start_time, config));
    let reports: Vec<ProviderReport> = join_all(tasks)
        .await
        .into_iter()
        .collect::<Result<_>>()?;

    let mut report = PipelineReport {
        providers: reports,
        combined_files: Vec::new(),
    };

    if config.combined {
        let mut combined = PrefixSet::default();
        for provider_report in &report.providers {
            combined.extend(&provider_report.prefixes);
        }

        for version in IpVersion::ALL {
            let networks = combined.get(version);
            if networks.is_empty() {
                continue;
            }
            let path = config.output_dir.join(combined_file_name(version));
            write_prefix_file(&path, networks, config.summarize)?;
            report.combined_files.push(path);
        }
    }

    Ok(report)
}

/// `combined-<v4|v6>.txt`
pub fn combined_file_name(version: IpVersion) -> String {
    format!("combined-{}.txt", version)
}

/// Write one network per line (no trailing newline), optionally summarized first.
/// Returns the number of networks written.
pub fn write_prefix_file<P: AsRef<Path>>(
    path: P,
    networks: &[IpNetwork],
    summarize_networks: bool,
) -> Result<usize> {
    let path = path.as_ref();
    let original_count = networks.len();

    let networks: Vec<IpNetwork> = if summarize_networks {
        summarize(networks)
    } else {
        networks.to_vec()
    };

    let content = networks
        .iter()
        .map(|network| network.to_string())
        .collect::<Vec<String>>()
        .join("\n");
    fs::write(path, content)
        .map_err(|error| Error::from(format!("Unable to write {}: {}", path.display(), error)))?;

    if summarize_networks {
        info!(
            "Summarized {} from {} to {} prefixes",
            path.display(),
            original_count,
            networks.len()
        );
    } else {
        info!("Created {} with {} prefixes", path.display(), original_count);
    }

    Ok(networks.len())
}

/*--------------------------------------------------------------------------------------
  Per-Provider Task
--------------------------------------------------------------------------------------*/

async fn process_provider(
    client: &RegistryClient,
    provider: &Provider,
    start_time: &str,
    config: &PipelineConfig,
) -> Result<ProviderReport> {
    info!("Processing {} (AS{})", provider.name(), provider.as_number());

    let (raw_prefixes, fetch_error) = match client.get_prefixes(provider, start_time).await {
        Ok(raw_prefixes) => (raw_prefixes, None),
        Err(fetch_error) => {
            error!(
                "Error fetching data for {} (AS{}): {}",
                provider.name(),
                provider.as_number(),
                fetch_error
            );
            (Vec::new(), Some(fetch_error.to_string()))
        }
    };

    let prefixes = PrefixSet::partition(provider, &raw_prefixes, &config.excluded);
    let mut files = Vec::new();

    if prefixes.is_empty() {
        info!(
            "No prefixes found for {} (AS{})",
            provider.name(),
            provider.as_number()
        );
    }

    for version in IpVersion::ALL {
        let networks = prefixes.get(version);
        if networks.is_empty() {
            continue;
        }
        let path = config.output_dir.join(provider.file_name(version));
        write_prefix_file(&path, networks, config.summarize_per_provider())?;
        files.push(path);
    }

    Ok(ProviderReport {
        provider: provider.clone(),
        prefixes,
        files,
        fetch_error,
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
