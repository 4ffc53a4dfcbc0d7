use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

pub type AccountId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdrawal,
}

#[derive(Debug, PartialEq, Eq)]
enum AccountEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug)]
struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{action:?} amount must be positive")]
    InvalidAmount { action: Action },
    #[error("Insufficient funds. Current Balance: {balance}")]
    InsufficientFunds { balance: Decimal },
    #[error("{action:?} would overflow the balance")]
    BalanceOverflow { action: Action },
}

/// Point-in-time view of an account, used both for the interactive
/// "Account Information" block and for CSV summary rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSnapshot {
    pub name: String,
    pub account_number: AccountId,
    pub balance: Decimal,
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Information:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Account Number: {}", self.account_number)?;
        write!(f, "Balance: {}", self.balance)
    }
}

#[derive(Debug)]
pub struct Account {
    name: String,
    id: AccountId,
    balance: Decimal,
}

impl Account {
    /// Only the ledger creates accounts, after it has checked the initial balance.
    pub(crate) fn new(name: String, id: AccountId, initial_balance: Decimal) -> Self {
        Self {
            name,
            id,
            balance: initial_balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn describe(&self) -> AccountSnapshot {
        AccountSnapshot {
            name: self.name.clone(),
            account_number: self.id.clone(),
            balance: self.balance,
        }
    }

    /// Adds `amount` and returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let evt = self.handle(Action::Deposit, amount)?;
        self.apply(&evt);
        Ok(self.balance)
    }

    /// Subtracts `amount` and returns the new balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let evt = self.handle(Action::Withdrawal, amount)?;
        self.apply(&evt);
        Ok(self.balance)
    }

    fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn => {
                self.balance -= event.amount;
            }
        }
    }

    /// Validates against the current balance; the event must be applied before the balance changes again.
    fn handle(&self, action: Action, amount: Decimal) -> Result<AccountEvent, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount { action });
        }

        match action {
            Action::Deposit => {
                if self.balance.checked_add(amount).is_none() {
                    return Err(AccountError::BalanceOverflow { action });
                }
                Ok(AccountEvent {
                    amount,
                    kind: AccountEventKind::Deposited,
                })
            }
            Action::Withdrawal => {
                if amount > self.balance {
                    Err(AccountError::InsufficientFunds {
                        balance: self.balance,
                    })
                } else {
                    Ok(AccountEvent {
                        amount,
                        kind: AccountEventKind::Withdrawn,
                    })
                }
            }
        }
    }
}
