//! Stockcast - Minimal product catalog and weather forecast HTTP API

pub mod config;
pub mod error;
pub mod types;

pub mod forecast;
pub mod random;
pub mod repo;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
