use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Model used when callers do not pick one explicitly.
pub const DEFAULT_MODEL: &str = "anthropic::2023-06-01::claude-3.5-sonnet";

/// Environment variables read by [`CodaConfig::from_env`].
pub const ENDPOINT_VAR: &str = "CODA_ENDPOINT";
pub const ACCESS_TOKEN_VAR: &str = "CODA_ACCESS_TOKEN";

pub(crate) const CLIENT_NAME: &str = "coda-rs";
pub(crate) const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const API_VERSION: &str = "1";

/// Connection settings for [`crate::CodaClient`].
///
/// Always passed in explicitly; the client never reads ambient process
/// state, so tests can construct configs pointing at local servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodaConfig {
    /// Base URL of the API, without a trailing slash.
    pub endpoint: String,
    pub access_token: String,
    /// Emit one marker per received chunk on stderr while a search stream
    /// is being buffered.
    #[serde(default)]
    pub show_progress: bool,
}

impl CodaConfig {
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            show_progress: false,
        }
    }

    /// Read the endpoint and access token from `CODA_ENDPOINT` and
    /// `CODA_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_VAR).map_err(|_| Error::Config(ENDPOINT_VAR))?;
        let access_token =
            std::env::var(ACCESS_TOKEN_VAR).map_err(|_| Error::Config(ACCESS_TOKEN_VAR))?;
        Ok(Self::new(endpoint, access_token))
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = CodaConfig::new("https://coda.example.com/", "tok");
        assert_eq!(config.endpoint, "https://coda.example.com");
    }

    #[test]
    fn test_with_progress() {
        let config = CodaConfig::new("https://coda.example.com", "tok").with_progress(true);
        assert!(config.show_progress);
    }

    #[test]
    fn test_from_env_missing_vars() {
        std::env::remove_var(ENDPOINT_VAR);
        std::env::remove_var(ACCESS_TOKEN_VAR);
        assert!(matches!(
            CodaConfig::from_env(),
            Err(Error::Config(ENDPOINT_VAR))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = CodaConfig::new("https://coda.example.com", "tok");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CodaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.endpoint, deserialized.endpoint);
    }
}
