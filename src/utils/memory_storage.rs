//! In-memory storage implementation

use crate::traits::*;
use crate::types::*;

/// Vec-backed customer storage, lives for the process lifetime
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    customers: Vec<Customer>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStorage for MemoryStorage {
    fn push_customer(&mut self, customer: Customer) -> usize {
        self.customers.push(customer);
        self.customers.len() - 1
    }

    fn get_customer(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    fn get_customer_mut(&mut self, index: usize) -> Option<&mut Customer> {
        self.customers.get_mut(index)
    }

    fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn customer(first: &str) -> Customer {
        Customer::new(
            first.to_string(),
            "Tester".to_string(),
            "000-00-0000".to_string(),
            Account::open(AccountKind::Savings, BigDecimal::from(59)).unwrap(),
        )
    }

    #[test]
    fn test_push_returns_positions() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.push_customer(customer("a")), 0);
        assert_eq!(storage.push_customer(customer("b")), 1);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get_customer(1).unwrap().first_name(), "b");
        assert!(storage.get_customer(2).is_none());
    }
}
