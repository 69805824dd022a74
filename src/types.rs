//! Core types and data structures for the banking system

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::traits::{AccountValidator, DefaultAccountValidator};

/// Account variants offered by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Everyday account, requires a larger opening deposit
    Checking,
    /// Savings account
    Savings,
}

impl AccountKind {
    /// Every variant, in the order they are offered to customers
    pub const ALL: [AccountKind; 2] = [AccountKind::Checking, AccountKind::Savings];

    /// Smallest initial deposit this variant accepts when opened
    pub fn minimum_deposit(&self) -> BigDecimal {
        match self {
            AccountKind::Checking => BigDecimal::from(199),
            AccountKind::Savings => BigDecimal::from(59),
        }
    }

    /// Lowercase token used to select this variant
    pub fn token(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Checking => write!(f, "Checking"),
            AccountKind::Savings => write!(f, "Savings"),
        }
    }
}

impl FromStr for AccountKind {
    type Err = BankError;

    /// Case-insensitive match against the variant tokens
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountKind::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| BankError::InvalidAccountType(s.to_string()))
    }
}

/// A funded account owned by a single customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccountSnapshot")]
pub struct Account {
    /// Account number
    pub id: Uuid,
    /// Checking or savings
    pub kind: AccountKind,
    balance: BigDecimal,
    /// When the account was opened
    pub opened_at: NaiveDateTime,
    /// When the balance last changed
    pub updated_at: NaiveDateTime,
}

/// Wire form of [`Account`], checked before it becomes one
#[derive(Deserialize)]
struct AccountSnapshot {
    id: Uuid,
    kind: AccountKind,
    balance: BigDecimal,
    opened_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<AccountSnapshot> for Account {
    type Error = BankError;

    /// Restored balances may sit below the opening minimum after withdrawals,
    /// but never below zero.
    fn try_from(snapshot: AccountSnapshot) -> Result<Self, Self::Error> {
        if snapshot.balance < BigDecimal::from(0) {
            return Err(BankError::Validation(format!(
                "account {} has a negative balance of {}",
                snapshot.id, snapshot.balance
            )));
        }

        Ok(Self {
            id: snapshot.id,
            kind: snapshot.kind,
            balance: snapshot.balance,
            opened_at: snapshot.opened_at,
            updated_at: snapshot.updated_at,
        })
    }
}

/// Render an amount with two decimals, rounding half up
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

impl Account {
    /// Open an account of the given kind, enforcing its minimum deposit
    pub fn open(kind: AccountKind, initial_deposit: BigDecimal) -> BankResult<Self> {
        DefaultAccountValidator.validate_opening(kind, &initial_deposit)?;
        Ok(Self::funded(kind, initial_deposit))
    }

    /// Build an account without running any opening policy
    pub(crate) fn funded(kind: AccountKind, initial_deposit: BigDecimal) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4(),
            kind,
            balance: initial_deposit,
            opened_at: now,
            updated_at: now,
        }
    }

    /// Current balance
    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Add funds to the account.
    ///
    /// Zero or negative amounts leave the balance untouched.
    pub fn deposit(&mut self, amount: &BigDecimal) {
        if *amount <= BigDecimal::from(0) {
            tracing::debug!(account = %self.id, %amount, "ignoring non-positive deposit");
            return;
        }
        self.balance += amount;
        self.updated_at = chrono::Utc::now().naive_utc();
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "deposit applied");
    }

    /// Take funds out of the account.
    ///
    /// Fails without touching the balance when `amount` exceeds it.
    pub fn withdraw(&mut self, amount: &BigDecimal) -> BankResult<()> {
        if *amount <= BigDecimal::from(0) {
            tracing::debug!(account = %self.id, %amount, "ignoring non-positive withdrawal");
            return Ok(());
        }
        if *amount > self.balance {
            tracing::warn!(account = %self.id, %amount, balance = %self.balance, "withdrawal rejected");
            return Err(BankError::InsufficientFunds {
                requested: amount.clone(),
                available: self.balance.clone(),
            });
        }
        self.balance -= amount;
        self.updated_at = chrono::Utc::now().naive_utc();
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Type: {}", self.kind)?;
        writeln!(f, "Account Number: {}", self.id)?;
        write!(f, "Balance: ${}", format_amount(&self.balance))
    }
}

/// Identity record that owns exactly one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    first_name: String,
    last_name: String,
    social_id: String,
    account: Account,
}

impl Customer {
    /// Create a new customer
    pub fn new(
        first_name: String,
        last_name: String,
        social_id: String,
        account: Account,
    ) -> Self {
        Self {
            first_name,
            last_name,
            social_id,
            account,
        }
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Social identifier, stored exactly as entered
    pub fn social_id(&self) -> &str {
        &self.social_id
    }

    /// The customer's account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Mutable access for deposits and withdrawals
    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    /// Short descriptor used in selection lists
    pub fn summary(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}", self.summary())?;
        writeln!(f, "Social ID: {}", self.social_id)?;
        write!(f, "{}", self.account)
    }
}

/// Errors that can occur in the banking core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BankError {
    #[error("Invalid account type: '{0}' (expected checking or savings)")]
    InvalidAccountType(String),
    #[error("Invalid deposit: a {kind} account requires a minimum of ${minimum}, got ${amount}")]
    InvalidDeposit {
        kind: AccountKind,
        minimum: BigDecimal,
        amount: BigDecimal,
    },
    #[error("Insufficient funds: requested ${requested}, available ${available}")]
    InsufficientFunds {
        requested: BigDecimal,
        available: BigDecimal,
    },
    #[error("Customer index {index} out of range (bank has {count} customers)")]
    IndexOutOfRange { index: i64, count: usize },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for banking operations
pub type BankResult<T> = Result<T, BankError>;
