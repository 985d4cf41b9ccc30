//! Cart configuration.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_PATH` - File backing the key-value store (default: cart-storage.json)
//! - `CART_STORAGE_KEY` - Key the products are stored under (default: @GoMarketplace:products)
//! - `CART_ON_CORRUPT` - `discard` or `fail` when the stored payload does not decode (default: discard)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::Error;

/// Key the products payload is persisted under.
pub const STORAGE_KEY: &str = "@GoMarketplace:products";

const DEFAULT_STORAGE_PATH: &str = "cart-storage.json";

/// What to do when the persisted payload is not a valid products array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptPayload {
    /// Start with an empty cart and log a warning.
    #[default]
    Discard,
    /// Fail store initialization with [`Error::Decode`].
    Fail,
}

impl FromStr for CorruptPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(Self::Discard),
            "fail" => Ok(Self::Fail),
            other => Err(Error::Config(format!(
                "CART_ON_CORRUPT must be `discard` or `fail`, got `{}`",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub storage_key: String,
    pub on_corrupt: CorruptPayload,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            on_corrupt: CorruptPayload::Discard,
        }
    }
}

impl CartConfig {
    /// Builds the cart configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::default();
        if let Ok(key) = env::var("CART_STORAGE_KEY") {
            if key.is_empty() {
                return Err(Error::Config("CART_STORAGE_KEY must not be empty".into()));
            }
            config.storage_key = key;
        }
        if let Ok(policy) = env::var("CART_ON_CORRUPT") {
            config.on_corrupt = policy.parse()?;
        }
        Ok(config)
    }
}

/// Path of the file backing [`crate::storage::FileStorage`] for the binary.
pub fn storage_path_from_env() -> PathBuf {
    env::var_os("CART_STORAGE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
}
