//! Configuration for the Claynova Charm API.
//!
//! Re-exports the [`claynova_config`] crate so the rest of the application can
//! refer to `crate::config::Settings`.
//!
//! # Environment Variables
//!
//! - `PROJECT_NAME`: Display name of the API
//! - `API_V1_STR`: Path prefix for versioned routes
//! - `BACKEND_CORS_ORIGINS`: Comma-separated allowed CORS origins
//!
//! See [`claynova_config::settings`] for defaults and parsing rules.

pub use claynova_config::*;
