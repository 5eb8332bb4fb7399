//! Classified trial balance export.

use std::io::Write;

use csv::WriterBuilder;
use mizan_core::ledger::{AccountType, ClassifiedAccount};
use mizan_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
struct MappingRow<'a> {
    account_code: &'a str,
    account_name: &'a str,
    period: &'a str,
    debit: Decimal,
    credit: Decimal,
    account_type: AccountType,
    ifrs_category: &'a str,
    ifrs_subcategory: &'a str,
    confidence_score: Decimal,
    reasoning: &'a str,
}

/// Writes classified accounts as CSV, one row per account and period.
pub fn write_mapping<W: Write>(accounts: &[ClassifiedAccount], writer: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    for account in accounts {
        wtr.serialize(MappingRow {
            account_code: &account.account_code,
            account_name: &account.account_name,
            period: &account.period,
            debit: account.debit,
            credit: account.credit,
            account_type: account.account_type,
            ifrs_category: &account.ifrs_category,
            ifrs_subcategory: &account.ifrs_subcategory,
            confidence_score: account.confidence_score,
            reasoning: &account.reasoning,
        })
        .map_err(|e| AppError::Internal(format!("mapping export: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppError::Internal(format!("mapping export: {e}")))
}
