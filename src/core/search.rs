use crate::core::errors::Result;
use crate::core::search_results::{SearchMatch, SearchResults};
use crate::core::utils::ipnetwork::{overlaps, parse_network};
use crate::core::utils::is_hidden;
use ipnetwork::IpNetwork;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Parse Search Networks
-------------------------------------------------------------------------------------------------*/

/// Parse a comma-separated list of IP addresses and/or subnets. Every entry must be valid.
///
/// ```
/// let networks = hostingprefixes::parse_search_networks("10.0.0.1,2001:db8::/32").unwrap();
/// assert_eq!(networks.len(), 2);
///
/// assert!(hostingprefixes::parse_search_networks("10.0.0.1,bogus").is_err());
/// ```
pub fn parse_search_networks(list: &str) -> Result<Vec<IpNetwork>> {
    list.split(',').map(parse_network).collect()
}

/*-------------------------------------------------------------------------------------------------
  Subnet Search
-------------------------------------------------------------------------------------------------*/

/// Searches files for lines whose IP network overlaps any of a set of search networks.
#[derive(Clone, Debug)]
pub struct SubnetSearch {
    search_networks: Vec<IpNetwork>,
}

impl SubnetSearch {
    pub fn new(search_networks: Vec<IpNetwork>) -> Self {
        Self { search_networks }
    }

    /// Build a search from a comma-separated list of networks.
    pub fn from_list(list: &str) -> Result<Self> {
        Ok(Self::new(parse_search_networks(list)?))
    }

    /// The first search network overlapping `network`, if any.
    pub fn matching_network(&self, network: &IpNetwork) -> Option<&IpNetwork> {
        self.search_networks
            .iter()
            .find(|search_network| overlaps(search_network, network))
    }

    /*-------------------------------------------------------------------------
      Search Targets
    -------------------------------------------------------------------------*/

    /// Search a single file. An unreadable file is logged and counted as skipped.
    pub fn search_file<P: AsRef<Path>>(&self, path: P) -> SearchResults {
        let mut results = SearchResults::default();
        self.search_file_into(path.as_ref(), &mut results);
        results
    }

    /// Search every non-hidden file below `directory`. Within each directory, files are
    /// searched in name order before descending into subdirectories, also in name order.
    /// Hidden subdirectories and symbolic links to directories are not visited.
    pub fn search_directory<P: AsRef<Path>>(&self, directory: P) -> SearchResults {
        let mut results = SearchResults::default();
        self.walk_directory(directory.as_ref(), &mut results);
        results
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn walk_directory(&self, directory: &Path, results: &mut SearchResults) {
        info!("Searching directory: {}", directory.display());

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(error) => {
                warn!("Error reading directory {}: {}", directory.display(), error);
                results.paths_skipped += 1;
                return;
            }
        };

        let mut files: Vec<PathBuf> = Vec::new();
        let mut subdirectories: Vec<PathBuf> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!("Error reading directory {}: {}", directory.display(), error);
                    continue;
                }
            };

            let path = entry.path();
            if is_hidden(&entry.file_name()) {
                debug!("Skipping hidden path: {}", path.display());
                continue;
            }

            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => subdirectories.push(path),
                Ok(file_type) if file_type.is_file() => files.push(path),
                Ok(file_type) if file_type.is_symlink() => {
                    if fs::metadata(&path).is_ok_and(|metadata| metadata.is_file()) {
                        files.push(path);
                    } else {
                        debug!("Not following symbolic link: {}", path.display());
                    }
                }
                Ok(_) => debug!("Skipping special file: {}", path.display()),
                Err(error) => warn!("Error reading {}: {}", path.display(), error),
            }
        }

        files.sort();
        subdirectories.sort();

        for file in &files {
            self.search_file_into(file, results);
        }
        for subdirectory in &subdirectories {
            self.walk_directory(subdirectory, results);
        }
    }

    fn search_file_into(&self, path: &Path, results: &mut SearchResults) {
        info!("Searching file: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                warn!("Error processing file {}: {}", path.display(), error);
                results.paths_skipped += 1;
                return;
            }
        };
        results.files_searched += 1;

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let entry = line.trim();

            let network = match parse_network(entry) {
                Ok(network) => network,
                Err(_) => {
                    info!("Skipping invalid entry on line {line_number}: {entry}");
                    results.invalid_lines += 1;
                    continue;
                }
            };

            // At most one result per line, even when several search networks match
            if let Some(search_network) = self.matching_network(&network) {
                results.matches.push(SearchMatch {
                    path: path.to_path_buf(),
                    line_number,
                    entry: entry.to_string(),
                    search_network: *search_network,
                });
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
