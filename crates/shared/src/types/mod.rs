//! Common types used across the application.

pub mod id;
pub mod kind;
pub mod money;

pub use id::*;
pub use kind::{CarryoverMode, TransactionKind};
pub use money::{Dollars, floor_at_zero, percent_of};
