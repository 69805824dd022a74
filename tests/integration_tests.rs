//! Integration tests for banking-core

use banking_core::{
    open_account, utils::parse_amount, Account, AccountKind, Bank, BankError, Customer,
};
use bigdecimal::BigDecimal;

fn customer(first: &str, last: &str, account: Account) -> Customer {
    Customer::new(
        first.to_string(),
        last.to_string(),
        "555-55-5555".to_string(),
        account,
    )
}

#[test]
fn test_checking_account_lifecycle() {
    let mut account = open_account("checking", BigDecimal::from(199)).unwrap();
    assert_eq!(account.balance(), &BigDecimal::from(199));

    account.deposit(&BigDecimal::from(50));
    assert_eq!(account.balance(), &BigDecimal::from(249));

    let err = account.withdraw(&BigDecimal::from(300)).unwrap_err();
    assert!(matches!(err, BankError::InsufficientFunds { .. }));
    assert_eq!(account.balance(), &BigDecimal::from(249));

    account.withdraw(&BigDecimal::from(249)).unwrap();
    assert_eq!(account.balance(), &BigDecimal::from(0));
}

#[test]
fn test_savings_minimum_deposit() {
    let err = open_account("savings", BigDecimal::from(58)).unwrap_err();
    assert_eq!(
        err,
        BankError::InvalidDeposit {
            kind: AccountKind::Savings,
            minimum: BigDecimal::from(59),
            amount: BigDecimal::from(58),
        }
    );

    let account = open_account("savings", BigDecimal::from(59)).unwrap();
    assert_eq!(account.balance(), &BigDecimal::from(59));
}

#[test]
fn test_type_token_is_case_insensitive() {
    let upper = open_account("CHECKING", BigDecimal::from(199)).unwrap();
    let lower = open_account("checking", BigDecimal::from(199)).unwrap();
    assert_eq!(upper.kind, lower.kind);
    assert_eq!(upper.balance(), lower.balance());
}

#[test]
fn test_unknown_account_types() {
    for token in ["", "check", "savings account", "cd", "Chequing"] {
        let err = open_account(token, BigDecimal::from(10_000)).unwrap_err();
        assert_eq!(err, BankError::InvalidAccountType(token.to_string()));
    }
}

#[test]
fn test_open_balance_equals_deposit() {
    for kind in AccountKind::ALL {
        let minimum = kind.minimum_deposit();
        for extra in ["0", "0.01", "1", "1000.75"] {
            let deposit = &minimum + extra.parse::<BigDecimal>().unwrap();
            let account = open_account(kind.token(), deposit.clone()).unwrap();
            assert_eq!(account.balance(), &deposit);
        }
        let below = &minimum - "0.01".parse::<BigDecimal>().unwrap();
        assert!(matches!(
            open_account(kind.token(), below),
            Err(BankError::InvalidDeposit { .. })
        ));
    }
}

#[test]
fn test_deposits_compose() {
    let mut split = open_account("savings", BigDecimal::from(59)).unwrap();
    let mut combined = open_account("savings", BigDecimal::from(59)).unwrap();

    split.deposit(&"12.30".parse().unwrap());
    split.deposit(&"7.70".parse().unwrap());
    combined.deposit(&BigDecimal::from(20));

    assert_eq!(split.balance(), combined.balance());
}

#[test]
fn test_malformed_amount_deposits_nothing() {
    let mut account = open_account("savings", BigDecimal::from(80)).unwrap();
    account.deposit(&parse_amount("not a number"));
    account.deposit(&parse_amount("-10"));
    assert_eq!(account.balance(), &BigDecimal::from(80));
}

#[test]
fn test_out_of_range_amount_deposits_nothing() {
    let mut account = open_account("savings", "80.25".parse().unwrap()).unwrap();
    account.deposit(&parse_amount("1e200000000"));
    assert_eq!(account.balance(), &"80.25".parse::<BigDecimal>().unwrap());
    assert!(account.to_string().ends_with("Balance: $80.25"));
}

#[test]
fn test_bank_preserves_insertion_order() {
    let mut bank = Bank::new();
    let added: Vec<Customer> = vec![
        customer("Ann", "Lee", Account::open(AccountKind::Checking, BigDecimal::from(500)).unwrap()),
        customer("Bo", "Kim", Account::open(AccountKind::Savings, BigDecimal::from(60)).unwrap()),
        customer("Cy", "Ng", Account::open(AccountKind::Savings, BigDecimal::from(70)).unwrap()),
    ];

    for (i, c) in added.iter().enumerate() {
        assert_eq!(bank.add_customer(c.clone()), i);
    }

    assert_eq!(bank.count(), added.len());
    assert_eq!(bank.customers(), added.as_slice());
    for (i, c) in added.iter().enumerate() {
        assert_eq!(bank.customer_at(i).unwrap(), c);
    }
}

#[test]
fn test_bank_lookup_out_of_range() {
    let mut bank = Bank::new();
    assert!(matches!(
        bank.customer_at(0),
        Err(BankError::IndexOutOfRange { index: 0, count: 0 })
    ));

    bank.add_customer(customer(
        "Ann",
        "Lee",
        Account::open(AccountKind::Savings, BigDecimal::from(59)).unwrap(),
    ));
    let count = bank.count();
    assert!(bank.customer_at(count).is_err());
    assert!(matches!(
        bank.select(-1),
        Err(BankError::IndexOutOfRange { index: -2, count: 1 })
    ));
}

#[test]
fn test_bank_workflow() {
    let mut bank = Bank::new();
    let ada = bank
        .open_customer(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "123-45-6789".to_string(),
            "Checking",
            BigDecimal::from(199),
        )
        .unwrap();
    let alan = bank
        .open_customer(
            "Alan".to_string(),
            "Turing".to_string(),
            "987-65-4321".to_string(),
            "SAVINGS",
            BigDecimal::from(1000),
        )
        .unwrap();

    assert!(bank
        .open_customer(
            "Grace".to_string(),
            "Hopper".to_string(),
            "111-11-1111".to_string(),
            "brokerage",
            BigDecimal::from(1000),
        )
        .is_err());
    assert_eq!(bank.count(), 2);

    let selected = bank.select(2).unwrap();
    assert_eq!(selected, alan);
    bank.withdraw(selected, &BigDecimal::from(400)).unwrap();
    bank.deposit(ada, &BigDecimal::from(1)).unwrap();

    assert_eq!(bank.balance(ada).unwrap(), &BigDecimal::from(200));
    assert_eq!(bank.balance(alan).unwrap(), &BigDecimal::from(600));

    let summaries: Vec<String> = bank.customers().iter().map(Customer::summary).collect();
    assert_eq!(summaries, vec!["Ada Lovelace", "Alan Turing"]);
}

#[test]
fn test_customer_serializes_to_json() {
    let account = open_account("checking", BigDecimal::from(250)).unwrap();
    let ada = customer("Ada", "Lovelace", account);

    let json = serde_json::to_value(&ada).unwrap();
    assert_eq!(json["first_name"], "Ada");
    assert_eq!(json["account"]["kind"], "Checking");

    let restored: Customer = serde_json::from_value(json).unwrap();
    assert_eq!(restored, ada);
}
