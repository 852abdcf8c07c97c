use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use reqwest::Url;

use crate::chart::parser::MissingChangePolicy;

/// Everything a single run needs, assembled once in `main` and passed into the
/// stages explicitly.
#[derive(Debug)]
pub struct Config {
    pub chart_url: Url,
    pub output_path: PathBuf,
    pub missing_change: MissingChangePolicy,
    pub enrichment: Option<EnrichmentConfig>,
}

#[derive(Debug)]
pub struct EnrichmentConfig {
    pub mode: EnrichMode,
    /// Pause between consecutive video lookups.
    pub delay: Duration,
}

#[derive(Debug)]
pub enum EnrichMode {
    Api {
        api_key: ApiKey,
        fetch_details: bool,
    },
    Scrape,
}

#[derive(Clone, Debug, derive_more::From, derive_more::Display)]
pub struct ApiKey(String);

impl ApiKey {
    pub const ENV_VAR: &'static str = "YOUTUBE_API_KEY";

    /// The key must be present before the run does anything else; emitting a
    /// snapshot where every record silently failed enrichment is worse than
    /// failing loudly.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(env::var(Self::ENV_VAR)
            .with_context(|| format!("environment variable {} is not set", Self::ENV_VAR))?
            .into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::ApiKey;

    #[test]
    fn api_key_from_env() {
        std::env::remove_var(ApiKey::ENV_VAR);
        let err = ApiKey::from_env().unwrap_err();
        assert!(err.to_string().contains(ApiKey::ENV_VAR));

        std::env::set_var(ApiKey::ENV_VAR, "test-key");
        assert_eq!(ApiKey::from_env().unwrap().as_str(), "test-key");
        std::env::remove_var(ApiKey::ENV_VAR);
    }
}
