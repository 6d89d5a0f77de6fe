//! Money configuration management.

use serde::Deserialize;

use crate::currency::Currency;
use crate::error::MoneyResult;

/// Money configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// Currency used when a caller does not name one explicitly.
    #[serde(default = "default_currency")]
    pub default_currency: Currency,
}

fn default_currency() -> Currency {
    Currency::Usd
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

impl MoneyConfig {
    /// Loads configuration from the optional `config/tally` file and
    /// `TALLY__*` environment variables, the latter taking precedence.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Config` if a source cannot be read or a value
    /// does not deserialize (e.g. an unsupported currency code).
    pub fn load() -> MoneyResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/tally").required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Like [`MoneyConfig::load`], but reads a `.env` file first if present.
    ///
    /// # Errors
    ///
    /// See [`MoneyConfig::load`].
    pub fn load_with_dotenv() -> MoneyResult<Self> {
        dotenvy::dotenv().ok();
        Self::load()
    }
}
