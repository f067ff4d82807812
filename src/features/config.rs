use crate::features::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
pub const STYLE_USER_VAR: &str = "MAPBOX_STYLE_USER";
pub const STYLE_ID_VAR: &str = "MAPBOX_STYLE_ID";

/// Credentials and style selection for the Mapbox Static Images API.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MapboxConfig {
    pub access_token: String,
    pub style_user: String,
    pub style_id: String,
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("access_token", &"<redacted>")
            .field("style_user", &self.style_user)
            .field("style_id", &self.style_id)
            .finish()
    }
}

impl MapboxConfig {
    /// Reads `MAPBOX_ACCESS_TOKEN`, `MAPBOX_STYLE_USER` and `MAPBOX_STYLE_ID` from the process
    /// environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingVar`] if any of the variables is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };
        Ok(Self {
            access_token: get(ACCESS_TOKEN_VAR)?,
            style_user: get(STYLE_USER_VAR)?,
            style_id: get(STYLE_ID_VAR)?,
        })
    }
}
