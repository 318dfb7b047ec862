use crate::core::pipeline::PipelineReport;
use crate::core::provider::Provider;
use crate::core::provider_list::ProviderList;
use crate::core::search_results::SearchResults;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Provider Added
--------------------------------------------------------------------------------------*/

pub fn provider_added(provider: &Provider, path: &Path, provider_list: &ProviderList) {
    println!(
        "Successfully added ({}, {}) to {}",
        provider.name(),
        provider.as_number(),
        path.display()
    );
    println!("Total entries in the list: {}", provider_list.len());
}

/*--------------------------------------------------------------------------------------
  Search Matches
--------------------------------------------------------------------------------------*/

pub fn search_matches(search_results: &SearchResults) {
    for search_match in &search_results.matches {
        println!("{search_match}");
    }
}

/*--------------------------------------------------------------------------------------
  Pipeline Report Table
--------------------------------------------------------------------------------------*/

pub fn pipeline_table(report: &PipelineReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Provider")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("AS Number")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("IPv4 Prefixes")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("IPv6 Prefixes")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Files")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for provider_report in &report.providers {
        let files = if provider_report.fetch_error.is_some() {
            "fetch failed".to_string()
        } else {
            provider_report
                .files
                .iter()
                .map(|file| file.display().to_string())
                .collect::<Vec<String>>()
                .join("\n")
        };

        table.add_row(vec![
            Cell::new(provider_report.provider.name()).add_attribute(Attribute::Bold),
            Cell::new(provider_report.provider.as_number()),
            Cell::new(provider_report.prefixes.v4.len()),
            Cell::new(provider_report.prefixes.v6.len()),
            Cell::new(files),
        ]);
    }

    // Right-align the count columns
    for index in 1..=3 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");

    // Print report summary
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![
        Cell::new(report.providers.len()),
        Cell::new("Providers"),
    ]);
    summary_table.add_row(vec![
        Cell::new(report.files().count()),
        Cell::new("Files written"),
    ]);
    for combined_file in &report.combined_files {
        summary_table.add_row(vec![
            Cell::new(""),
            Cell::new(combined_file.display()),
        ]);
    }

    if let Some(summary_numbers_column) = summary_table.column_mut(0) {
        summary_numbers_column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{summary_table}");
}
