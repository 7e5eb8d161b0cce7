//! # Claynova Charm API
//!
//! Runtime configuration for the Claynova Charm API backend.
//!
//! ## Overview
//!
//! The API is configured entirely through environment variables, read once at
//! startup into an immutable [`config::Settings`] record:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `PROJECT_NAME` | `project_name` | `Claynova Charm API` |
//! | `API_V1_STR` | `api_prefix` | `/api/v1` |
//! | `BACKEND_CORS_ORIGINS` | `allowed_origins` | `http://localhost:5173,http://localhost:3000` |
//!
//! Empty values are ignored. `BACKEND_CORS_ORIGINS` is split on every comma and
//! each entry trimmed; empty entries are kept.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── claynova-config/         # Settings record and environment loader
//! └── claynova-observability/  # Console logging
//! src/
//! ├── cli/                     # `claynova` command line
//! ├── config/                  # Re-export of claynova-config
//! └── state.rs                 # AppState shared with consumers
//! ```
//!
//! The settings are not a global. Build an [`state::AppState`] during startup
//! and pass it (or clones of it) to whatever needs configuration.
//!
//! ## Quick Start
//!
//! ```bash
//! PROJECT_NAME="My API" BACKEND_CORS_ORIGINS="https://a.com,https://b.com" \
//!     cargo run -- show-config --json
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line parsing and configuration rendering
//! - [`config`]: Application configuration
//! - [`state`]: Shared application state

pub mod cli;
pub mod config;
pub mod state;

// Re-export workspace crates for convenience
pub use claynova_config;
pub use claynova_observability;
