//! lexmetrics CLI library
//!
//! This library provides the command-line interface for computing sentiment
//! and readability metrics over a corpus of text documents.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
