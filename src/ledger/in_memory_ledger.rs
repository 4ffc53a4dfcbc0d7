use std::collections::{HashMap, hash_map::Entry};

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::account::{Account, AccountId};

use super::{Ledger, LedgerError};

#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for InMemoryLedger {
    fn create_account(
        &mut self,
        name: String,
        id: AccountId,
        initial_balance: Decimal,
    ) -> Result<&Account, LedgerError> {
        let entry = match self.accounts.entry(id) {
            Entry::Occupied(entry) => {
                debug!(account = %entry.key(), "rejected duplicate account number");
                return Err(LedgerError::DuplicateIdentifier {
                    id: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => entry,
        };
        if initial_balance < Decimal::ZERO {
            debug!(account = %entry.key(), %initial_balance, "rejected negative initial balance");
            return Err(LedgerError::NegativeInitialBalance { initial_balance });
        }
        info!(account = %entry.key(), %initial_balance, "account created");
        let id = entry.key().clone();
        Ok(entry.insert(Account::new(name, id, initial_balance)))
    }

    fn get_account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    fn get_account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use crate::account::{AccountError, Action};

    use super::*;

    fn dec(value: u32) -> Decimal {
        Decimal::from_u32(value).unwrap()
    }

    #[test]
    fn create_deposit_withdraw() {
        let mut ledger = InMemoryLedger::new();
        let acc = ledger
            .create_account("Alice".to_string(), "A1".to_string(), dec(100))
            .unwrap();
        assert_eq!(acc.id(), "A1");
        assert_eq!(acc.balance(), dec(100));

        assert_eq!(ledger.deposit("A1", dec(50)).unwrap(), dec(150));
        assert_eq!(ledger.withdraw("A1", dec(30)).unwrap(), dec(120));
        assert_eq!(ledger.get_account("A1").unwrap().balance(), dec(120));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn duplicate_identifier_keeps_existing_account() {
        let mut ledger = InMemoryLedger::new();
        ledger
            .create_account("Alice".to_string(), "001".to_string(), dec(100))
            .unwrap();
        let err = ledger
            .create_account("Mallory".to_string(), "001".to_string(), dec(5))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::DuplicateIdentifier {
                id: "001".to_string()
            }
        );

        let acc = ledger.get_account("001").unwrap();
        assert_eq!(acc.name(), "Alice");
        assert_eq!(acc.balance(), dec(100));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn duplicate_is_checked_before_negative_balance() {
        let mut ledger = InMemoryLedger::new();
        ledger
            .create_account("Alice".to_string(), "001".to_string(), dec(1))
            .unwrap();
        let err = ledger
            .create_account("Bob".to_string(), "001".to_string(), Decimal::NEGATIVE_ONE)
            .unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn negative_initial_balance_inserts_nothing() {
        let mut ledger = InMemoryLedger::new();
        let err = ledger
            .create_account("Bob".to_string(), "002".to_string(), Decimal::new(-100, 1))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::NegativeInitialBalance {
                initial_balance: Decimal::new(-100, 1)
            }
        );
        assert!(ledger.is_empty());
        assert!(ledger.get_account("002").is_none());
    }

    #[test]
    fn zero_initial_balance_is_allowed() {
        let mut ledger = InMemoryLedger::new();
        let acc = ledger
            .create_account("Zed".to_string(), "000".to_string(), Decimal::ZERO)
            .unwrap();
        assert_eq!(acc.balance(), Decimal::ZERO);
    }

    #[test]
    fn alice_scenario() {
        let mut ledger = InMemoryLedger::new();
        ledger
            .create_account("Alice".to_string(), "001".to_string(), Decimal::new(1000, 1))
            .unwrap();
        assert_eq!(
            ledger.deposit("001", Decimal::new(500, 1)).unwrap(),
            Decimal::new(1500, 1)
        );

        let err = ledger.withdraw("001", Decimal::new(2000, 1)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AccountErr(AccountError::InsufficientFunds {
                balance: Decimal::new(1500, 1)
            })
        );
        assert_eq!(
            ledger.get_account("001").unwrap().balance(),
            Decimal::new(1500, 1)
        );
        assert!(ledger.get_account("002").is_none());

        let err = ledger
            .create_account("Bob".to_string(), "002".to_string(), Decimal::new(-100, 1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::NegativeInitialBalance { .. }));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn operations_on_unknown_account() {
        let mut ledger = InMemoryLedger::new();
        let err = ledger.deposit("404", dec(1)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AccountNotFound {
                id: "404".to_string()
            }
        );
        let err = ledger.withdraw("404", dec(1)).unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound { .. }));
    }

    #[test]
    fn invalid_amount_surfaces_account_error() {
        let mut ledger = InMemoryLedger::new();
        ledger
            .create_account("Alice".to_string(), "001".to_string(), dec(10))
            .unwrap();
        let err = ledger.withdraw("001", Decimal::ZERO).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AccountErr(AccountError::InvalidAmount {
                action: Action::Withdrawal
            })
        );
        assert_eq!(ledger.get_account("001").unwrap().balance(), dec(10));
    }

    #[test]
    fn mutable_lookup_keeps_balance_guards() {
        let mut ledger = InMemoryLedger::new();
        ledger
            .create_account("Dave".to_string(), "004".to_string(), dec(100))
            .unwrap();

        let acc = ledger.get_account_mut("004").unwrap();
        assert_eq!(acc.withdraw(dec(100)).unwrap(), Decimal::ZERO);
        let err = acc.withdraw(dec(100)).unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds { .. }));
        assert!(matches!(
            acc.deposit(Decimal::MAX).and_then(|_| acc.deposit(Decimal::ONE)),
            Err(AccountError::BalanceOverflow { .. })
        ));
        assert_eq!(ledger.get_account("004").unwrap().balance(), Decimal::MAX);
    }

    #[test]
    fn balance_never_negative_after_mixed_operations() {
        let mut ledger = InMemoryLedger::new();
        ledger
            .create_account("Carol".to_string(), "003".to_string(), dec(5))
            .unwrap();
        let ops: [(bool, i64); 8] = [
            (false, 3),
            (false, 4),
            (true, 10),
            (false, 12),
            (true, -2),
            (false, 0),
            (false, 1),
            (false, 100),
        ];
        for (is_deposit, amount) in ops {
            let amount = Decimal::from(amount);
            let _ = if is_deposit {
                ledger.deposit("003", amount)
            } else {
                ledger.withdraw("003", amount)
            };
            assert!(ledger.get_account("003").unwrap().balance() >= Decimal::ZERO);
        }
        assert_eq!(ledger.get_account("003").unwrap().balance(), Decimal::ZERO);
    }
}
