use crate::core::datetime;
use crate::core::errors::{Error, Result};
use crate::core::json;
use crate::core::provider::Provider;
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::StatusCode;
use std::env;
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Defaults
-------------------------------------------------------------------------------------------------*/

pub const DEFAULT_API_URL: &str = "https://stat.ripe.net/data/announced-prefixes/data.json";
pub const DEFAULT_LOOKBACK_HOURS: u32 = 6;

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [RegistryClient] struct that allows you to customize the client
/// configuration.
///
/// ```
/// let client = hostingprefixes::ClientBuilder::new()
///     .url("http://127.0.0.1:8080/data/announced-prefixes/data.json")
///     .lookback_hours(12)
///     .timeout(5000) // 5 seconds
///     .build()
///     .unwrap();
///
/// assert_eq!(client.lookback_hours(), 12);
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
/// Use [ClientBuilder::default] to ignore the environment.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    lookback_hours: u32,
    timeout: Option<u64>,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = hostingprefixes::ClientBuilder::default().build().unwrap();
    ///
    /// assert_eq!(client.url(), "https://stat.ripe.net/data/announced-prefixes/data.json");
    /// assert_eq!(client.lookback_hours(), 6);
    /// assert_eq!(client.timeout(), None);
    /// ```
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            lookback_hours: DEFAULT_LOOKBACK_HOURS,
            timeout: None, // reqwest default
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment
    /// variables are not set.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `HOSTINGPREFIXES_API_URL`
    /// - `HOSTINGPREFIXES_LOOKBACK_HOURS`
    /// - `HOSTINGPREFIXES_TIMEOUT`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("HOSTINGPREFIXES_API_URL", default.url),
            lookback_hours: get_env_var("HOSTINGPREFIXES_LOOKBACK_HOURS", default.lookback_hours),
            // 0 (or unset) keeps the client default
            timeout: match get_env_var("HOSTINGPREFIXES_TIMEOUT", 0u64) {
                0 => default.timeout,
                timeout => Some(timeout),
            },
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL of the announced-prefixes data call; defaults to
    /// `https://stat.ripe.net/data/announced-prefixes/data.json`.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    /// Set how far back (in hours) the query window starts; defaults to `6`.
    pub fn lookback_hours(&mut self, lookback_hours: u32) -> &mut Self {
        self.lookback_hours = lookback_hours;
        self
    }

    /// Set a total request timeout in milliseconds. No timeout is configured
    /// by default.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Result<RegistryClient> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(Duration::from_millis(timeout));
        }

        Ok(RegistryClient {
            url: self.url.clone(),
            lookback_hours: self.lookback_hours,
            timeout: self.timeout,
            http: http.build()?,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Registry Client
-------------------------------------------------------------------------------------------------*/

/// A client for the announced-prefixes registry API. A single client (and its connection
/// pool) is shared by every concurrent provider query. Failed requests are not retried.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    url: String,
    lookback_hours: u32,
    timeout: Option<u64>,
    http: reqwest::Client,
}

/*--------------------------------------------------------------------------------------
  Registry Client Implementation
--------------------------------------------------------------------------------------*/

impl RegistryClient {
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn lookback_hours(&self) -> u32 {
        self.lookback_hours
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    /// Start of the query window, computed from the current time.
    pub fn start_time(&self) -> String {
        datetime::start_time(Utc::now(), self.lookback_hours)
    }

    /*-------------------------------------------------------------------------
      Get Prefixes
    -------------------------------------------------------------------------*/

    /// Query the prefixes announced by a provider's AS number since `start_time`.
    /// Returns the prefix strings in API order. Non-success HTTP statuses,
    /// transport errors and unparsable bodies are returned as errors.
    pub async fn get_prefixes(&self, provider: &Provider, start_time: &str) -> Result<Vec<String>> {
        let resource = provider.as_number().to_string();
        info!(
            "GET {} resource={} starttime={}",
            self.url, resource, start_time
        );

        let response = self
            .http
            .get(&self.url)
            .query(&[("resource", resource.as_str()), ("starttime", start_time)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from(format!(
                "HTTP {}; response content: {}",
                status,
                body.trim()
            )));
        }

        let body = response.text().await?;
        let prefixes = json::parse(&body)?.prefixes();
        debug!(
            "{} (AS{}): {} announced prefix(es)",
            provider.name(),
            provider.as_number(),
            prefixes.len()
        );
        Ok(prefixes)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use env::VarError;
    use test_log::test;

    /*-------------------------------------------------------------------------
      Test Environment Variable Configuration
    -------------------------------------------------------------------------*/

    /// ENV_VAR: HOSTINGPREFIXES_API_URL
    /// ENV_VAR: HOSTINGPREFIXES_LOOKBACK_HOURS
    /// ENV_VAR: HOSTINGPREFIXES_TIMEOUT
    #[test]
    fn test_environment_variable_configuration() {
        let test_env_vars = [
            ("HOSTINGPREFIXES_API_URL", "http://127.0.0.1:9/data.json"),
            ("HOSTINGPREFIXES_LOOKBACK_HOURS", "12"),
            ("HOSTINGPREFIXES_TIMEOUT", "1500"),
        ];

        let default = ClientBuilder::default().build().unwrap();

        // Store environment variable values
        let stored_env_vars: Vec<(String, std::result::Result<String, VarError>)> = test_env_vars
            .iter()
            .map(|(env_var, _)| (env_var.to_string(), env::var(env_var)))
            .collect();

        // Unset all environment variables
        test_env_vars
            .iter()
            .for_each(|(env_var, _)| env::remove_var(env_var));

        // Test default cases
        let new = RegistryClient::new().unwrap();
        assert_eq!(new.url(), default.url());
        assert_eq!(new.lookback_hours(), default.lookback_hours());
        assert_eq!(new.timeout(), default.timeout());

        // Set all environment variables
        for (env_var, value) in test_env_vars.iter() {
            env::set_var(env_var, value);
        }

        // Test environment variable configuration
        let env_config = RegistryClient::new().unwrap();
        assert_eq!(env_config.url(), "http://127.0.0.1:9/data.json");
        assert_eq!(env_config.lookback_hours(), 12);
        assert_eq!(env_config.timeout(), Some(1500));

        // Invalid values fall back to the defaults
        env::set_var("HOSTINGPREFIXES_LOOKBACK_HOURS", "six");
        assert_eq!(
            RegistryClient::new().unwrap().lookback_hours(),
            DEFAULT_LOOKBACK_HOURS
        );

        // Reset environment variables
        for (env_var, value) in stored_env_vars {
            match value {
                Ok(value) => env::set_var(env_var, value),
                Err(VarError::NotPresent) => env::remove_var(env_var),
                Err(VarError::NotUnicode(value)) => env::set_var(env_var, value),
            }
        }
    }

    /*-------------------------------------------------------------------------
      Test Getter and Setter Methods
    -------------------------------------------------------------------------*/

    #[test]
    fn test_getter_and_setter_methods() {
        let client = ClientBuilder::default()
            .url("http://127.0.0.1:9/data.json")
            .lookback_hours(24)
            .timeout(250)
            .build()
            .unwrap();

        assert_eq!(client.url(), "http://127.0.0.1:9/data.json");
        assert_eq!(client.lookback_hours(), 24);
        assert_eq!(client.timeout(), Some(250));
        assert_eq!(client.start_time().len(), "2024-09-15T06:00".len());
    }
}
