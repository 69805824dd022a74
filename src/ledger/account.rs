//! Account opening policy

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Resolves account types and gates initial deposits before construction
pub struct AccountOpener {
    validator: Box<dyn AccountValidator>,
}

impl AccountOpener {
    /// Create an opener with the standard minimum-deposit rules
    pub fn new() -> Self {
        Self {
            validator: Box::new(DefaultAccountValidator),
        }
    }

    /// Create an opener with a custom validator
    pub fn with_validator(validator: Box<dyn AccountValidator>) -> Self {
        Self { validator }
    }

    /// Open an account from a type token such as `"checking"` or `"Savings"`
    pub fn open(&self, account_type: &str, initial_deposit: BigDecimal) -> BankResult<Account> {
        let kind: AccountKind = account_type.parse().inspect_err(|_| {
            tracing::warn!(account_type, "unknown account type");
        })?;
        self.open_kind(kind, initial_deposit)
    }

    /// Open an account of an already resolved kind
    pub fn open_kind(&self, kind: AccountKind, initial_deposit: BigDecimal) -> BankResult<Account> {
        if let Err(err) = self.validator.validate_opening(kind, &initial_deposit) {
            tracing::warn!(%kind, amount = %initial_deposit, "opening deposit rejected");
            return Err(err);
        }

        let account = Account::funded(kind, initial_deposit);
        tracing::debug!(account = %account.id, %kind, balance = %account.balance(), "account opened");
        Ok(account)
    }
}

impl Default for AccountOpener {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an account using the standard rules
pub fn open_account(account_type: &str, initial_deposit: BigDecimal) -> BankResult<Account> {
    AccountOpener::new().open(account_type, initial_deposit)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoMinimum;

    impl AccountValidator for NoMinimum {
        fn validate_opening(&self, _kind: AccountKind, _deposit: &BigDecimal) -> BankResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_open_account_at_minimums() {
        let checking = open_account("checking", BigDecimal::from(199)).unwrap();
        assert_eq!(checking.kind, AccountKind::Checking);
        assert_eq!(checking.balance(), &BigDecimal::from(199));

        let savings = open_account("savings", BigDecimal::from(59)).unwrap();
        assert_eq!(savings.kind, AccountKind::Savings);
        assert_eq!(savings.balance(), &BigDecimal::from(59));
    }

    #[test]
    fn test_open_account_below_minimum() {
        let err = open_account("Checking", BigDecimal::from(198)).unwrap_err();
        assert!(matches!(
            err,
            BankError::InvalidDeposit {
                kind: AccountKind::Checking,
                ..
            }
        ));
    }

    #[test]
    fn test_type_checked_before_deposit() {
        let err = open_account("money-market", BigDecimal::from(0)).unwrap_err();
        assert_eq!(err, BankError::InvalidAccountType("money-market".to_string()));
    }

    #[test]
    fn test_custom_validator() {
        let opener = AccountOpener::with_validator(Box::new(NoMinimum));
        let account = opener.open("savings", BigDecimal::from(1)).unwrap();
        assert_eq!(account.balance(), &BigDecimal::from(1));
        assert!(opener.open("loan", BigDecimal::from(1)).is_err());
    }
}
