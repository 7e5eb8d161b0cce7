//! # Claynova Config
//!
//! Settings for the Claynova Charm API, loaded from environment variables.
//!
//! - [`settings`]: the [`Settings`] record and its loader
//! - [`cors`]: parsing and matching of allowed CORS origins
//!
//! # Example
//!
//! ```
//! use claynova_config::Settings;
//!
//! let settings = Settings::from_vars(|name| match name {
//!     "BACKEND_CORS_ORIGINS" => Some("https://a.com, https://b.com".to_string()),
//!     _ => None,
//! });
//!
//! assert_eq!(settings.project_name, "Claynova Charm API");
//! assert_eq!(settings.allowed_origins, ["https://a.com", "https://b.com"]);
//! ```

pub mod cors;
pub mod settings;

// Re-export commonly used items at crate root
pub use cors::{DEFAULT_ALLOWED_ORIGINS, parse_origins};
pub use settings::{
    API_PREFIX_VAR, CORS_ORIGINS_VAR, DEFAULT_API_PREFIX, DEFAULT_PROJECT_NAME, PROJECT_NAME_VAR,
    Settings,
};
