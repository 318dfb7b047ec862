use crate::core::errors::Result;
use crate::core::pipeline::PipelineReport;
use crate::core::search_results::SearchResults;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{info, warn, LevelFilter};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Initialize Logging
--------------------------------------------------------------------------------------*/

/// Log to stderr at the level selected by `-v` / `-q` (warnings by default).
pub fn init(verbose: &Verbosity<WarnLevel>) -> Result<()> {
    let level = verbose.log_level_filter();

    stderrlog::new()
        .module("hostingprefixes")
        .quiet(level == LevelFilter::Off)
        // stderrlog counts from 0 = error
        .verbosity((level as usize).saturating_sub(1))
        .init()?;

    Ok(())
}

/*--------------------------------------------------------------------------------------
  Search Results
--------------------------------------------------------------------------------------*/

pub fn search_results(search_results: &SearchResults) {
    info!(
        "Searched {} file(s); found {} matching line(s)",
        search_results.files_searched,
        search_results.matches.len()
    );

    if search_results.invalid_lines > 0 {
        info!(
            "Skipped {} line(s) that are not IP addresses or subnets",
            search_results.invalid_lines
        );
    }

    if search_results.paths_skipped > 0 {
        warn!(
            "Unable to read {} file(s) or directory(ies)",
            search_results.paths_skipped
        );
    }
}

/*--------------------------------------------------------------------------------------
  Pipeline Report
--------------------------------------------------------------------------------------*/

pub fn pipeline_report(report: &PipelineReport) {
    let failed = report.failed_providers();
    if failed > 0 {
        warn!(
            "Fetching prefixes failed for {} of {} provider(s)",
            failed,
            report.providers.len()
        );
    }
}
