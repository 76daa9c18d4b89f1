//! Runtime configuration resolved from `.env`, the environment and CLI flags.

use incomeview::{DataError, FmpProvider, Result, Symbol};

use crate::cli::Cli;

/// Environment variable holding the FMP credential.
pub(crate) const API_KEY_VAR: &str = "FMP_API_KEY";

/// Resolved settings for one dashboard session.
#[derive(Clone)]
pub(crate) struct Config {
    pub(crate) symbol: Symbol,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("symbol", &self.symbol)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            symbol: Symbol::new(cli.symbol.as_str()),
            api_key: non_blank(cli.api_key.as_deref()),
            base_url: non_blank(cli.base_url.as_deref()),
        }
    }

    /// Build the FMP provider, or explain why it cannot be built.
    pub(crate) fn provider(&self) -> Result<FmpProvider> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DataError::ProviderNotConfigured(format!("{API_KEY_VAR} is not set"))
        })?;
        let provider = FmpProvider::new(api_key);
        Ok(match &self.base_url {
            Some(url) => provider.with_base_url(url.as_str()),
            None => provider,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
