//! Bank aggregate that owns the customer registry

use bigdecimal::BigDecimal;

use crate::ledger::AccountOpener;
use crate::traits::*;
use crate::types::*;
use crate::utils::MemoryStorage;

/// Ordered registry of customers, addressed by position
pub struct Bank<S: CustomerStorage = MemoryStorage> {
    storage: S,
    opener: AccountOpener,
}

impl Bank<MemoryStorage> {
    /// Create an empty bank backed by in-memory storage
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }
}

impl Default for Bank<MemoryStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CustomerStorage> Bank<S> {
    /// Create a bank over the given storage backend
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            opener: AccountOpener::new(),
        }
    }

    /// Create a bank with a custom account opening policy
    pub fn with_opener(storage: S, opener: AccountOpener) -> Self {
        Self { storage, opener }
    }

    // Registry operations
    /// Register a customer, returning their 0-based index
    pub fn add_customer(&mut self, customer: Customer) -> usize {
        let summary = customer.summary();
        let index = self.storage.push_customer(customer);
        tracing::info!(index, customer = %summary, "customer registered");
        index
    }

    /// Get the customer at a 0-based index
    pub fn customer_at(&self, index: usize) -> BankResult<&Customer> {
        self.storage
            .get_customer(index)
            .ok_or_else(|| self.out_of_range(index as i64))
    }

    /// Get the customer at a 0-based index for mutation
    pub fn customer_at_mut(&mut self, index: usize) -> BankResult<&mut Customer> {
        let count = self.storage.len();
        self.storage
            .get_customer_mut(index)
            .ok_or(BankError::IndexOutOfRange {
                index: index as i64,
                count,
            })
    }

    /// All customers, in the order they were added
    pub fn customers(&self) -> &[Customer] {
        self.storage.customers()
    }

    pub fn count(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Convert a 1-based menu selection into a 0-based index
    pub fn select(&self, selection: i64) -> BankResult<usize> {
        let index = selection.saturating_sub(1);
        if index < 0 || index >= self.count() as i64 {
            return Err(self.out_of_range(index));
        }
        Ok(index as usize)
    }

    // Account operations
    /// Open an account and register its owner in one step.
    ///
    /// Nothing is registered if the account type or deposit is rejected.
    pub fn open_customer(
        &mut self,
        first_name: String,
        last_name: String,
        social_id: String,
        account_type: &str,
        initial_deposit: BigDecimal,
    ) -> BankResult<usize> {
        let account = self.opener.open(account_type, initial_deposit)?;
        let customer = Customer::new(first_name, last_name, social_id, account);
        Ok(self.add_customer(customer))
    }

    /// Deposit into the account of the customer at `index`
    pub fn deposit(&mut self, index: usize, amount: &BigDecimal) -> BankResult<()> {
        self.customer_at_mut(index)?.account_mut().deposit(amount);
        Ok(())
    }

    /// Withdraw from the account of the customer at `index`
    pub fn withdraw(&mut self, index: usize, amount: &BigDecimal) -> BankResult<()> {
        self.customer_at_mut(index)?.account_mut().withdraw(amount)
    }

    /// Balance of the account of the customer at `index`
    pub fn balance(&self, index: usize) -> BankResult<&BigDecimal> {
        Ok(self.customer_at(index)?.account().balance())
    }

    fn out_of_range(&self, index: i64) -> BankError {
        BankError::IndexOutOfRange {
            index,
            count: self.count(),
        }
    }
}
