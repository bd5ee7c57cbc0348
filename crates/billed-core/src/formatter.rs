use chrono::NaiveDate;
use thiserror::Error;

use crate::bill::{Bill, BillStatus, RawBill};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why one raw record could not be shaped. Per-record only: callers drop
/// the record and keep the rest of the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedBill {
    #[error("record has no date")]
    MissingDate,

    #[error("unparsable date: {0:?}")]
    UnparsableDate(String),
}

/// Shape a raw store record into a display-ready `Bill`.
///
/// The date is parsed as a calendar date and re-rendered through the
/// same format, so the output is always zero-padded `YYYY-MM-DD` and a
/// lexicographic comparison of two shaped dates is a chronological one.
/// Unknown or absent statuses fall back to `Pending`; all other fields
/// pass through untouched.
pub fn format_bill(raw: &RawBill) -> Result<Bill, MalformedBill> {
    let date = raw.date.as_deref().ok_or(MalformedBill::MissingDate)?;
    let parsed = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| MalformedBill::UnparsableDate(date.to_string()))?;

    let status = raw
        .status
        .as_deref()
        .and_then(BillStatus::parse_str)
        .unwrap_or_default();

    Ok(Bill {
        id: raw.id.clone(),
        expense_type: raw.expense_type.clone(),
        name: raw.name.clone(),
        date: parsed.format(DATE_FORMAT).to_string(),
        amount: raw.amount,
        vat: raw.vat,
        pct: raw.pct,
        commentary: raw.commentary.clone(),
        file_url: raw.file_url.clone(),
        file_name: raw.file_name.clone(),
        status,
        comment_admin: raw.comment_admin.clone(),
        email: raw.email.clone(),
    })
}
