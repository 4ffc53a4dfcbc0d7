use std::io::Write;

use anyhow::Context;
use csv::Writer;

use crate::account::AccountSnapshot;

/// Writes one CSV row per account, ordered by account number.
/// Nothing is written for an empty ledger, not even the header.
pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSnapshot>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut rows: Vec<AccountSnapshot> = accounts.collect();
    rows.sort_by(|a, b| a.account_number.cmp(&b.account_number));

    let mut writer = Writer::from_writer(output);
    for row in rows {
        writer
            .serialize(&row)
            .with_context(|| format!("Failed to write account `{}` to CSV", row.account_number))?;
    }
    // Ensure all data is flushed to the output
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
