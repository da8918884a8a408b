//! Tabular Translate - translate tabular data through a remote service
//!
//! This library sends detect/translate requests to a LibreTranslate-style
//! HTTP service and folds the answers back into the column names or the cell
//! values of a [`DataFrame`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod processors;

#[cfg(test)]
mod test_support;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::TranslatorConfig,
    errors::{ErrorKind, Result, TranslationError},
    frame::{Column, DataFrame},
    models::{TranslateOptions, TranslationRequest},
};

pub use crate::processors::csv_io::{read_csv, write_csv};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
