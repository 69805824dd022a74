//! # Banking Core
//!
//! Customer and account ledger for a small console bank.
//!
//! ## Features
//!
//! - **Account variants**: Checking (minimum opening deposit 199) and Savings (59)
//! - **Opening policy**: case-insensitive account type tokens, pluggable deposit validation
//! - **Bank registry**: ordered, index-addressable customers for the process lifetime
//! - **Storage abstraction**: the registry sits behind the `CustomerStorage` trait
//!
//! ## Quick Start
//!
//! ```rust
//! use banking_core::{Bank, BankError};
//! use bigdecimal::BigDecimal;
//!
//! let mut bank = Bank::new();
//! let index = bank
//!     .open_customer(
//!         "Ada".to_string(),
//!         "Lovelace".to_string(),
//!         "123-45-6789".to_string(),
//!         "Checking",
//!         BigDecimal::from(199),
//!     )
//!     .unwrap();
//!
//! bank.deposit(index, &BigDecimal::from(50)).unwrap();
//! assert_eq!(bank.balance(index).unwrap(), &BigDecimal::from(249));
//!
//! let err = bank.withdraw(index, &BigDecimal::from(300)).unwrap_err();
//! assert!(matches!(err, BankError::InsufficientFunds { .. }));
//! ```

pub mod config;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::BankConfig;
pub use ledger::*;
pub use traits::*;
pub use types::*;
