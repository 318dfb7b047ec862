/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Modules
-------------------------------------------------------------------------------------------------*/

mod args;
mod core;

pub mod csv;
pub mod log;
pub mod output;

/*--------------------------------------------------------------------------------------
  CLI Module Interface
--------------------------------------------------------------------------------------*/

pub use args::{AddHpArgs, FetchPrefixesArgs, FindIpSubnetArgs};
pub use core::{build_pipeline_config, run_search};
