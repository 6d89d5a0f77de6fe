//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides the pieces every other crate builds on:
//! - The closed set of supported currencies and their minor-unit scale
//! - Money error types
//! - Configuration management

pub mod config;
pub mod currency;
pub mod error;

pub use config::MoneyConfig;
pub use currency::Currency;
pub use error::{MoneyError, MoneyResult};
