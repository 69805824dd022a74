//! Traits for storage abstraction and extensibility

use bigdecimal::BigDecimal;

use crate::types::*;

/// Storage abstraction for the customer registry
///
/// Implementations must keep customers in insertion order and never
/// reorder or drop them, since callers address customers by position.
pub trait CustomerStorage {
    /// Append a customer, returning its 0-based position
    fn push_customer(&mut self, customer: Customer) -> usize;

    /// Get a customer by position
    fn get_customer(&self, index: usize) -> Option<&Customer>;

    /// Get a customer by position for mutation
    fn get_customer_mut(&mut self, index: usize) -> Option<&mut Customer>;

    /// All customers, in insertion order
    fn customers(&self) -> &[Customer];

    /// Number of stored customers
    fn len(&self) -> usize {
        self.customers().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for implementing account opening rules
pub trait AccountValidator {
    /// Validate the initial deposit for a new account of the given kind
    fn validate_opening(&self, kind: AccountKind, initial_deposit: &BigDecimal) -> BankResult<()>;
}

/// Default validator: checking needs 199, savings needs 59
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_opening(&self, kind: AccountKind, initial_deposit: &BigDecimal) -> BankResult<()> {
        let minimum = kind.minimum_deposit();
        if *initial_deposit < minimum {
            return Err(BankError::InvalidDeposit {
                kind,
                minimum,
                amount: initial_deposit.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validator_boundaries() {
        let validator = DefaultAccountValidator;
        assert!(validator
            .validate_opening(AccountKind::Checking, &BigDecimal::from(199))
            .is_ok());
        assert!(validator
            .validate_opening(AccountKind::Checking, &"198.99".parse().unwrap())
            .is_err());
        assert!(validator
            .validate_opening(AccountKind::Savings, &BigDecimal::from(59))
            .is_ok());

        let err = validator
            .validate_opening(AccountKind::Savings, &BigDecimal::from(58))
            .unwrap_err();
        assert_eq!(
            err,
            BankError::InvalidDeposit {
                kind: AccountKind::Savings,
                minimum: BigDecimal::from(59),
                amount: BigDecimal::from(58),
            }
        );
    }
}
