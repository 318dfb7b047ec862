use clap::Parser;
use hostingprefixes::cli::{self, FetchPrefixesArgs};
use hostingprefixes::{pipeline, RegistryClient, Result};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = FetchPrefixesArgs::parse();

    if let Err(error) = cli::log::init(&args.verbose) {
        eprintln!("Unable to initialize logging: {error}");
    }

    match fetch_prefixes(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn fetch_prefixes(args: &FetchPrefixesArgs) -> Result<()> {
    // Validate the provider list before any network activity
    let providers = pipeline::read_providers(&args.input_file)?;

    let client = RegistryClient::new()?;
    let config = cli::build_pipeline_config(args);
    let report = pipeline::run(&client, &providers, &config).await?;

    cli::log::pipeline_report(&report);
    cli::output::pipeline_table(&report);

    Ok(())
}
