use crate::cli::{FetchPrefixesArgs, FindIpSubnetArgs};
use crate::core::errors::Result;
use crate::core::pipeline::PipelineConfig;
use crate::core::search::SubnetSearch;
use crate::core::search_results::SearchResults;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Run Subnet Search from CLI arguments
--------------------------------------------------------------------------------------*/

/// Validate the search networks, then search the directory (if any) followed by the file
/// (if any).
pub fn run_search(args: &FindIpSubnetArgs) -> Result<SearchResults> {
    let search = SubnetSearch::from_list(&args.search)?;

    let mut results = SearchResults::default();
    if let Some(directory) = &args.directory {
        results.extend(search.search_directory(directory));
    }
    if let Some(file) = &args.file {
        results.extend(search.search_file(file));
    }

    Ok(results)
}

/*--------------------------------------------------------------------------------------
  Build Pipeline Configuration from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_pipeline_config(args: &FetchPrefixesArgs) -> PipelineConfig {
    let mut config = PipelineConfig::new(&args.output_dir);
    config.combined = args.combined;
    config.summarize = args.summarize;
    config
}
