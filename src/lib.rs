/// A single balance-holding account. Deposits and withdrawals are validated
/// into events first, then applied to the balance.
pub mod account;

/// Parsing of menu choices and amounts typed at the prompt.
pub mod command;

/// Ledger interface, plus "in memory" implementation.
/// Owns every account and is the only way to create or reach one.
pub mod ledger;

/// Interactive menu loop over any reader and writer, and the CSV summary printer.
pub mod shell;
