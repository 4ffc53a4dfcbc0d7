//! Interactive front end: a menu loop that reads lines from `input` and writes
//! prompts and results to `output`. All ledger state lives in the ledger passed in.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::{AccountError, AccountId, Action},
    command::{InputError, MenuChoice, parse_amount},
    ledger::{Ledger, LedgerError},
};

pub mod summary;

const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

enum Flow {
    Continue,
    Exit,
}

enum Lookup {
    Found(AccountId),
    Missing,
    InputClosed,
}

pub struct Shell<'a, R, W: 'a, L: 'a> {
    pub input: R,
    pub output: &'a mut W,
    pub ledger: &'a mut L,
}

impl<'a, R, W, L> Shell<'a, R, W, L>
where
    R: BufRead,
    W: Write + 'a,
    L: Ledger + 'a,
{
    /// Runs until the user picks "Exit" or the input is exhausted.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_choice()? else {
                debug!("input closed at menu");
                return Ok(());
            };
            let flow = match choice {
                MenuChoice::CreateAccount => self.create_account()?,
                MenuChoice::Deposit => self.transact(Action::Deposit)?,
                MenuChoice::Withdraw => self.transact(Action::Withdrawal)?,
                MenuChoice::CheckBalance => self.check_balance()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Thank you for using the Banking System!")?;
                    Flow::Exit
                }
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "==== Banking System Menu ====")?;
        writeln!(self.output, "1. Create Account")?;
        writeln!(self.output, "2. Deposit")?;
        writeln!(self.output, "3. Withdraw")?;
        writeln!(self.output, "4. Check Balance")?;
        writeln!(self.output, "5. Exit")?;
        self.prompt(CHOICE_PROMPT)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("Failed to flush output")
    }

    /// Returns `None` once the input is exhausted. Invalid UTF-8 is replaced
    /// rather than rejected, so it reaches the parsers as malformed text.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn read_choice(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<MenuChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err @ InputError::ChoiceOutOfRange { .. }) => {
                    debug!(%err, "menu choice rejected");
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1-5."
                    )?;
                    self.print_menu()?;
                }
                Err(err @ InputError::MalformedInput { .. }) => {
                    debug!(%err, "menu choice rejected");
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number between 1-5."
                    )?;
                    self.prompt(CHOICE_PROMPT)?;
                }
            }
        }
    }

    fn read_amount(&mut self, prompt: &str) -> Result<Option<Decimal>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_amount(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(err) => {
                    debug!(%err, "amount rejected");
                    writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                }
            }
        }
    }

    /// Prompts for an account number and checks it exists before anything else is asked.
    fn read_existing_account(&mut self) -> Result<Lookup> {
        self.prompt("Enter Account Number: ")?;
        let Some(id) = self.read_line()? else {
            return Ok(Lookup::InputClosed);
        };
        if self.ledger.get_account(&id).is_none() {
            self.report_error(&LedgerError::AccountNotFound { id })?;
            return Ok(Lookup::Missing);
        }
        Ok(Lookup::Found(id))
    }

    fn report_error(&mut self, err: &LedgerError) -> Result<()> {
        match err {
            LedgerError::AccountErr(AccountError::InvalidAmount { .. }) => {
                writeln!(self.output, "Error: {err}. Transaction cancelled.")?
            }
            _ => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn create_account(&mut self) -> Result<Flow> {
        self.prompt("Enter Name: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        self.prompt("Enter Account Number: ")?;
        let Some(id) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let Some(initial_balance) = self.read_amount("Enter Initial Balance: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.create_account(name, id, initial_balance) {
            Ok(acc) => {
                writeln!(self.output, "Account created successfully!")?;
                writeln!(self.output, "{}", acc.describe())?;
            }
            Err(err) => self.report_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn transact(&mut self, action: Action) -> Result<Flow> {
        let id = match self.read_existing_account()? {
            Lookup::Found(id) => id,
            Lookup::Missing => return Ok(Flow::Continue),
            Lookup::InputClosed => return Ok(Flow::Exit),
        };
        let prompt = match action {
            Action::Deposit => "Enter Deposit Amount: ",
            Action::Withdrawal => "Enter Withdrawal Amount: ",
        };
        let Some(amount) = self.read_amount(prompt)? else {
            return Ok(Flow::Exit);
        };

        let result = match action {
            Action::Deposit => self.ledger.deposit(&id, amount),
            Action::Withdrawal => self.ledger.withdraw(&id, amount),
        };
        match result {
            Ok(balance) => writeln!(
                self.output,
                "{action:?} successful! Current Balance: {balance}"
            )?,
            Err(err) => self.report_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> Result<Flow> {
        let id = match self.read_existing_account()? {
            Lookup::Found(id) => id,
            Lookup::Missing => return Ok(Flow::Continue),
            Lookup::InputClosed => return Ok(Flow::Exit),
        };
        if let Some(acc) = self.ledger.get_account(&id) {
            writeln!(self.output, "{}", acc.describe())?;
        }
        Ok(Flow::Continue)
    }
}
