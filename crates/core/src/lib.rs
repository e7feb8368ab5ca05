//! Shared configuration and error types for geomatch
//!
//! - **Configuration**: TOML-based settings with defaults for every field
//! - **Error handling**: errors with codes and recovery suggestions
//!
//! # Example
//!
//! ```rust,no_run
//! use geomatch_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid config file");
//! println!("distances shown with {} decimals", config.schema.output.precision);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result};
