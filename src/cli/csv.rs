use crate::core::errors::Result;
use crate::core::search_results::SearchResults;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Search Matches to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save<P: AsRef<Path>>(search_results: &SearchResults, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.write_record(["File", "Line", "Entry", "Matched Search Network"])?;

    // Write match records
    for search_match in &search_results.matches {
        let record = (
            search_match.path.display().to_string(),
            search_match.line_number,
            &search_match.entry,
            search_match.search_network.to_string(),
        );
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
