//! Terminal output helpers for geomatch
//!
//! - Status messages
//! - Match result formatting (text and JSON)

#![warn(missing_docs)]

pub mod output;
