use std::str::from_utf8;

use bank_ledger::{
    ledger::{Ledger, in_memory_ledger::InMemoryLedger},
    shell::{Shell, summary::print_accounts},
};
use rust_decimal::Decimal;

const SESSION: &str = include_str!("session.txt");

#[test]
fn scripted_session() {
    let mut ledger = InMemoryLedger::new();
    let mut output = Vec::new();
    let shell = Shell {
        input: SESSION.as_bytes(),
        output: &mut output,
        ledger: &mut ledger,
    };
    shell.run().unwrap();

    let out = from_utf8(&output).unwrap();
    assert!(out.contains("Account created successfully!"));
    assert!(out.contains("Deposit successful! Current Balance: 150.0"));
    assert!(out.contains("Error: Insufficient funds. Current Balance: 150.0"));
    assert!(out.contains("Error: Account not found."));
    assert!(out.contains("Error: Initial balance cannot be negative."));
    assert!(out.ends_with("Thank you for using the Banking System!\n"));

    // Bob was never inserted
    assert_eq!(ledger.len(), 1);
    assert_eq!(
        ledger.get_account("001").unwrap().balance(),
        Decimal::new(1500, 1)
    );

    let mut summary = Vec::new();
    print_accounts(&mut summary, ledger.accounts().map(|acc| acc.describe())).unwrap();
    let lines: Vec<&str> = from_utf8(&summary).unwrap().lines().collect();
    assert_eq!(lines, ["name,account_number,balance", "Alice,001,150.0"]);
}
