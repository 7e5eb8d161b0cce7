//! Claynova Observability
//!
//! Console logging for the Claynova Charm API, built on `tracing-subscriber`.
//!
//! # Examples
//!
//! ```no_run
//! use claynova_observability::init_console_logging;
//!
//! fn main() -> anyhow::Result<()> {
//!     init_console_logging()?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod basic_logging;

pub use basic_logging::{default_filter_directives, init_console_logging};
