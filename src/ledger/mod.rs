//! Ledger module containing account opening and the bank registry

pub mod account;
pub mod core;

pub use account::*;
pub use self::core::*;
