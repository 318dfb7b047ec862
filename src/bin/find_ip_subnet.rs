use clap::Parser;
use hostingprefixes::cli::{self, FindIpSubnetArgs};
use hostingprefixes::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = FindIpSubnetArgs::parse();

    if let Err(error) = cli::log::init(&args.verbose) {
        eprintln!("Unable to initialize logging: {error}");
    }

    match find_ip_subnet(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn find_ip_subnet(args: &FindIpSubnetArgs) -> Result<()> {
    let search_results = cli::run_search(args)?;

    cli::log::search_results(&search_results);
    cli::output::search_matches(&search_results);

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&search_results, csv_file)?;
        println!("Results saved to {}", csv_file.display());
    }

    Ok(())
}
