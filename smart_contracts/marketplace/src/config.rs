//! Configuration of the marketplace registry, parsed from a TOML file.
use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::payment::PaymentPolicy;

/// The name of the marketplace config file on disk.
pub const CONFIG_NAME: &str = "marketplace.toml";

/// Default maximum length in bytes of store and product names.
pub const DEFAULT_MAX_NAME_LENGTH: u32 = 64;

/// Errors while loading a [`MarketplaceConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to load marketplace config from {path}: {error}")]
    FailedToLoad {
        /// Path that failed to be read.
        path: PathBuf,
        /// The underlying OS error.
        error: io::Error,
    },
    /// The file is not a valid config.
    #[error("failed to parse marketplace config: {0}")]
    FailedToParse(#[from] toml::de::Error),
    /// The config parsed but holds invalid values.
    #[error("invalid marketplace config")]
    Validation,
}

/// Limits and switches of the registry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum length in bytes of store and product names.
    pub max_name_length: u32,
    /// Rejects calls carrying named arguments the entry point does not declare.
    pub strict_argument_checking: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            strict_argument_checking: true,
        }
    }
}

/// Payment handling of purchases.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    /// How attached value is reconciled against the price.
    pub policy: PaymentPolicy,
}

/// This struct can be parsed from a TOML-encoded `marketplace.toml` file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct MarketplaceConfig {
    /// Registry limits.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Payment handling.
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl MarketplaceConfig {
    /// Reads and validates the config at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|error| ConfigError::FailedToLoad {
            path: path.to_path_buf(),
            error,
        })?;
        contents.parse()
    }

    /// Returns a copy of this config using `policy` for purchases.
    pub fn with_payment_policy(mut self, policy: PaymentPolicy) -> Self {
        self.payment.policy = policy;
        self
    }

    /// Returns a copy of this config with strict argument checking switched on or off.
    pub fn with_strict_argument_checking(mut self, strict: bool) -> Self {
        self.registry.strict_argument_checking = strict;
        self
    }

    fn is_valid(&self) -> bool {
        if self.registry.max_name_length == 0 {
            error!("max_name_length must be greater than zero");
            return false;
        }
        true
    }
}

impl FromStr for MarketplaceConfig {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let config: MarketplaceConfig = toml::from_str(input)?;
        if !config.is_valid() {
            return Err(ConfigError::Validation);
        }
        Ok(config)
    }
}
