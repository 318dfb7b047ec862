use crate::core::provider_list::DEFAULT_PROVIDER_LIST_FILE;
use clap::{ArgGroup, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  add-hp
--------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    name = "add-hp",
    author,
    version,
    about = "Add a hosting provider to the provider list.",
    long_about = None,
    allow_negative_numbers = true
)]
pub struct AddHpArgs {
    /// Name of the hosting provider (letters, digits, hyphens and underscores)
    pub name: String,

    /// Autonomous System number (positive integer)
    #[arg(value_name = "AS")]
    pub as_number: String,

    /// Provider list file
    #[arg(short, long, default_value = DEFAULT_PROVIDER_LIST_FILE)]
    pub file: PathBuf,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/*--------------------------------------------------------------------------------------
  find-ip-subnet
--------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    name = "find-ip-subnet",
    author,
    version,
    about = "Search for IP addresses and subnets in files and directories.",
    long_about = None
)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["directory", "file"])
))]
pub struct FindIpSubnetArgs {
    /// Directory to search (recursively, skipping hidden files and directories)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// File to search
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Comma-separated list of IP addresses and/or subnets to search for
    #[arg(long)]
    pub search: String,

    /// Save the matches to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/*--------------------------------------------------------------------------------------
  fetch-prefixes
--------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    name = "fetch-prefixes",
    author,
    version,
    about = "Fetch and categorize the IP prefixes announced by hosting providers.",
    long_about = None
)]
pub struct FetchPrefixesArgs {
    /// Input file containing the provider list
    #[arg(long = "if", value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output directory for prefix files
    #[arg(long = "od", value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Also create combined-v4.txt and combined-v6.txt across all providers
    #[arg(long)]
    pub combined: bool,

    /// Summarize (collapse) the prefixes; with --combined only the combined files
    #[arg(long)]
    pub summarize: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
