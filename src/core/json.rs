use crate::core::errors::Result;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonAnnouncedPrefixes> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Announced Prefixes Response
--------------------------------------------------------------------------------------*/

/// Response body of the RIPEstat `announced-prefixes` data call. Only the fields used by
/// this crate are modelled; a missing `data` object or `prefixes` array is treated as an
/// empty prefix list.
#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonAnnouncedPrefixes {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub data: JsonData,
}

#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonData {
    #[serde(default)]
    pub prefixes: Vec<JsonPrefix>,

    #[serde(default)]
    pub resource: Option<String>,

    #[serde(default)]
    pub query_starttime: Option<String>,
}

/*--------------------------------------------------------------------------------------
  JSON Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonPrefix {
    pub prefix: String,
}

impl JsonAnnouncedPrefixes {
    /// Announced prefix strings in API order.
    pub fn prefixes(&self) -> Vec<String> {
        self.data
            .prefixes
            .iter()
            .map(|prefix| prefix.prefix.clone())
            .collect()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
