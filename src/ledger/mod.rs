use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::account::{Account, AccountError, AccountId};

pub mod in_memory_ledger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account number already exists. Please choose a different account number.")]
    DuplicateIdentifier { id: AccountId },
    #[error("Initial balance cannot be negative.")]
    NegativeInitialBalance { initial_balance: Decimal },
    #[error("Account not found.")]
    AccountNotFound { id: AccountId },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait Ledger {
    /// Inserts a new account. Fails if `id` is taken or `initial_balance` is negative,
    /// checked in that order.
    fn create_account(
        &mut self,
        name: String,
        id: AccountId,
        initial_balance: Decimal,
    ) -> Result<&Account, LedgerError>;

    fn get_account(&self, id: &str) -> Option<&Account>;

    fn get_account_mut(&mut self, id: &str) -> Option<&mut Account>;

    fn accounts(&self) -> impl Iterator<Item = &Account>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let acc = self
            .get_account_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.to_owned() })?;
        match acc.deposit(amount) {
            Ok(balance) => {
                info!(account = id, %amount, %balance, "deposit applied");
                Ok(balance)
            }
            Err(err) => {
                debug!(account = id, %amount, %err, "deposit rejected");
                Err(err.into())
            }
        }
    }

    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let acc = self
            .get_account_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.to_owned() })?;
        match acc.withdraw(amount) {
            Ok(balance) => {
                info!(account = id, %amount, %balance, "withdrawal applied");
                Ok(balance)
            }
            Err(err) => {
                debug!(account = id, %amount, %err, "withdrawal rejected");
                Err(err.into())
            }
        }
    }
}
