//! Application settings loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `PROJECT_NAME`: Display name of the API (default: `"Claynova Charm API"`)
//! - `API_V1_STR`: Path prefix routes are mounted under (default: `"/api/v1"`)
//! - `BACKEND_CORS_ORIGINS`: Comma-separated allowed origins
//!   (default: `http://localhost:5173,http://localhost:3000`)
//!
//! A variable that is unset, empty, or not valid Unicode leaves the default in
//! place. Loading never fails.

use serde::Serialize;
use std::env;
use tracing::{debug, warn};

use crate::cors::{DEFAULT_ALLOWED_ORIGINS, parse_origins};

pub const PROJECT_NAME_VAR: &str = "PROJECT_NAME";
pub const API_PREFIX_VAR: &str = "API_V1_STR";
pub const CORS_ORIGINS_VAR: &str = "BACKEND_CORS_ORIGINS";

pub const DEFAULT_PROJECT_NAME: &str = "Claynova Charm API";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Runtime settings shared by every component of the API.
///
/// Built once at startup and only read afterwards. Share it behind an `Arc`
/// (see `claynova::state::AppState`) rather than mutating it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Human-readable name of the API.
    pub project_name: String,

    /// URL path prefix for versioned API routes, e.g. `/api/v1`.
    pub api_prefix: String,

    /// Origins permitted by CORS, in the order they were configured.
    ///
    /// May contain empty strings when the override had stray commas.
    pub allowed_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Loads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Loads settings from an arbitrary variable lookup.
    ///
    /// `lookup` receives a variable name and returns its value, if any. Empty
    /// values are treated the same as missing ones.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use claynova_config::Settings;
    ///
    /// let vars = HashMap::from([("PROJECT_NAME", "My API")]);
    /// let settings = Settings::from_vars(|name| vars.get(name).map(|v| v.to_string()));
    ///
    /// assert_eq!(settings.project_name, "My API");
    /// assert_eq!(settings.api_prefix, "/api/v1");
    /// ```
    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut settings = Self::default();

        if let Some(project_name) = get(PROJECT_NAME_VAR) {
            debug!(var = PROJECT_NAME_VAR, value = %project_name, "Overriding project name");
            settings.project_name = project_name;
        }

        if let Some(api_prefix) = get(API_PREFIX_VAR) {
            debug!(var = API_PREFIX_VAR, value = %api_prefix, "Overriding API prefix");
            settings.api_prefix = api_prefix;
        }

        if let Some(raw) = get(CORS_ORIGINS_VAR) {
            let origins = parse_origins(&raw);
            debug!(
                var = CORS_ORIGINS_VAR,
                count = origins.len(),
                "Overriding allowed origins"
            );
            if origins.iter().any(String::is_empty) {
                warn!(
                    var = CORS_ORIGINS_VAR,
                    "Allowed origins contain an empty entry (stray comma?)"
                );
            }
            settings.allowed_origins = origins;
        }

        settings
    }

    /// Joins `path` onto the API prefix with exactly one `/` between them.
    ///
    /// ```
    /// use claynova_config::Settings;
    ///
    /// let settings = Settings::default();
    /// assert_eq!(settings.api_path("users"), "/api/v1/users");
    /// assert_eq!(settings.api_path("/users"), "/api/v1/users");
    /// ```
    #[must_use]
    pub fn api_path(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
