//! Core library: scanning asset folders into a JSON manifest for the front-end.

pub mod config;
pub mod error;
pub mod label;
pub mod models;
pub mod pipeline;
pub mod scanner;

pub use error::{ManifestError, Result};
