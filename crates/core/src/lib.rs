//! Core money logic for Tally.
//!
//! This crate contains pure value-type logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `money` - The `Money` value type, banker's rounding and
//!   largest-remainder allocation

pub mod money;

pub use money::{AllocationUtil, Money, RoundingService};
pub use tally_shared::{Currency, MoneyError, MoneyResult};
