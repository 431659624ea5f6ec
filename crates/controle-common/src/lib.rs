//! Controle Interno Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Ambient pieces shared by the Controle Interno workspace members.
//!
//! - **Logging**: `tracing` subscriber initialisation driven by environment variables
//! - **Error Handling**: the error type returned while setting those pieces up
//!
//! # Example
//!
//! ```no_run
//! use controle_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> controle_common::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{CommonError, Result};
