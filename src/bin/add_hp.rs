use clap::Parser;
use hostingprefixes::cli::{self, AddHpArgs};
use hostingprefixes::{add_provider, Provider, Result};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = AddHpArgs::parse();

    if let Err(error) = cli::log::init(&args.verbose) {
        eprintln!("Unable to initialize logging: {error}");
    }

    match add_hp(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn add_hp(args: &AddHpArgs) -> Result<()> {
    let provider = Provider::parse(&args.name, &args.as_number)?;
    let provider_list = add_provider(&args.file, provider.clone())?;

    cli::output::provider_added(&provider, &args.file, &provider_list);

    Ok(())
}
