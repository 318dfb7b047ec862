use ipnetwork::IpNetwork;
use std::fmt;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Search Match
-------------------------------------------------------------------------------------------------*/

/// A line of a searched file whose network overlaps one of the search networks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchMatch {
    /// Path of the file, as reached from the search target.
    pub path: PathBuf,

    /// 1-based line number.
    pub line_number: usize,

    /// The line's text with surrounding whitespace removed.
    pub entry: String,

    /// The first search network that overlaps the entry.
    pub search_network: IpNetwork,
}

impl SearchMatch {
    /// Directory part of the path; `.` when the path has no parent.
    pub fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl fmt::Display for SearchMatch {
    /// `<directory>/<file>: line <n>: <entry>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        write!(
            f,
            "{}/{}: line {}: {}",
            self.directory().display(),
            file_name,
            self.line_number,
            self.entry
        )
    }
}

/*-------------------------------------------------------------------------------------------------
  Search Results
-------------------------------------------------------------------------------------------------*/

/// Search results containing the matching lines, in visiting order, and counters for what
/// was searched and skipped.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchResults {
    /// Matching lines, at most one per line of input.
    pub matches: Vec<SearchMatch>,

    /// Number of files read and searched.
    pub files_searched: usize,

    /// Number of files or directories that could not be read.
    pub paths_skipped: usize,

    /// Number of lines that did not parse as an IP address or subnet.
    pub invalid_lines: usize,
}

impl SearchResults {
    /// Append another set of results after this one.
    pub fn extend(&mut self, other: SearchResults) {
        self.matches.extend(other.matches);
        self.files_searched += other.files_searched;
        self.paths_skipped += other.paths_skipped;
        self.invalid_lines += other.invalid_lines;
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
