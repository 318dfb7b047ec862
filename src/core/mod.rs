/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod datetime;
pub mod errors;
pub mod ip_version;
pub mod json;
pub mod pipeline;
pub mod provider;
pub mod provider_list;
pub mod search;
pub mod search_results;
pub mod summarize;
pub mod utils;
