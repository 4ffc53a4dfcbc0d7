use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("`{input}` is not a number")]
    MalformedInput { input: String },
    #[error("Choice {choice} is outside 1-5")]
    ChoiceOutOfRange { choice: i64 },
}

impl TryFrom<i64> for MenuChoice {
    type Error = InputError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Self::CreateAccount),
            2 => Ok(Self::Deposit),
            3 => Ok(Self::Withdraw),
            4 => Ok(Self::CheckBalance),
            5 => Ok(Self::Exit),
            _ => Err(InputError::ChoiceOutOfRange { choice }),
        }
    }
}

/// Parses a whole menu line. A number outside 1-5 is reported separately from
/// text that is not a number at all, since the shell reacts to them differently.
impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = parse_number::<i64>(s)?;
        Self::try_from(choice)
    }
}

pub fn parse_amount(s: &str) -> Result<Decimal, InputError> {
    parse_number(s)
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, InputError> {
    let trimmed = s.trim();
    trimmed.parse().map_err(|_| InputError::MalformedInput {
        input: trimmed.to_owned(),
    })
}
