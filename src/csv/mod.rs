use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{
    domain::category::Category,
    error::{Error, Result},
    store::{UserRecord, Users},
};

const COLUMNS: usize = 4;

#[derive(Debug, Deserialize)]
struct UserRow {
    username: String,
    password: String,
    account_type: Category,
    #[serde(deserialize_with = "amount")]
    balance: Decimal,
}

#[derive(Debug, Serialize)]
struct UserRowRef<'a> {
    username: &'a str,
    password: &'a str,
    account_type: Category,
    balance: Decimal,
}

/// Accepts plain decimals as well as exponent notation (`1e-05`), which
/// older store files may contain. `nan`, `inf` and values outside the
/// decimal range are rejected.
fn amount<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| de::Error::custom(format!("invalid balance `{raw}`")))
}

/// Parse user rows from a reader into `users`.
///
/// Rows have no header and exactly the columns
/// `username,password,account_type,balance`. Blank lines are skipped and a
/// later row for the same username replaces the earlier one.
/// Reading stops at the first malformed row, reported with its line; rows
/// read before it stay in `users`.
pub fn read(reader: impl Read, users: &mut Users) -> Result<()> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.len() != COLUMNS {
            return Err(Error::MalformedRow {
                line,
                reason: format!("expected {COLUMNS} columns, found {}", record.len()),
            });
        }

        let row: UserRow = record.deserialize(None).map_err(|err| Error::MalformedRow {
            line,
            reason: err.to_string(),
        })?;
        users.insert(
            row.username,
            UserRecord {
                password: row.password,
                category: row.account_type,
                balance: row.balance,
            },
        );
    }

    Ok(())
}

/// Write every user as one row, ordered by username.
pub fn write(users: &Users, writer: impl Write) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for (username, record) in users.iter().sorted_by_key(|(username, _)| *username) {
        writer.serialize(UserRowRef {
            username,
            password: &record.password,
            account_type: record.category,
            balance: record.balance,
        })?;
    }

    writer.flush()?;
    Ok(())
}
