//! Application of a classification template to trial balance entries.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::entry::{AccountType, Classification, ClassifiedAccount, LedgerEntry};

/// Category and subcategory given to entries with no classification.
pub const UNCLASSIFIED: &str = "Unclassified";

/// Reasoning given to entries with no classification.
pub const NO_CLASSIFICATION_REASON: &str = "No classification available for this account.";

/// Joins every ledger entry with the template row for its account code.
///
/// The template is keyed by account code and applies to all periods.
/// When the template holds several rows for one code, the first wins.
/// Entries without a row are kept as `Other` / `Unclassified` so they
/// remain visible downstream. Output order follows `entries`.
pub fn apply_mapping(
    entries: &[LedgerEntry],
    template: &[Classification],
) -> Vec<ClassifiedAccount> {
    let mut by_code: HashMap<&str, &Classification> = HashMap::with_capacity(template.len());
    for row in template {
        by_code.entry(row.account_code.as_str()).or_insert(row);
    }

    let mut unmapped = 0usize;
    let accounts: Vec<ClassifiedAccount> = entries
        .iter()
        .map(|entry| match by_code.get(entry.account_code.as_str()) {
            Some(classification) => ClassifiedAccount::new(entry, classification),
            None => {
                unmapped += 1;
                unclassified(entry)
            }
        })
        .collect();

    if unmapped > 0 {
        warn!(unmapped, total = entries.len(), "Entries without classification");
    }
    debug!(entries = accounts.len(), template = template.len(), "Applied mapping template");

    accounts
}

fn unclassified(entry: &LedgerEntry) -> ClassifiedAccount {
    ClassifiedAccount {
        account_code: entry.account_code.clone(),
        account_name: entry.account_name.clone(),
        period: entry.period.clone(),
        debit: entry.debit,
        credit: entry.credit,
        account_type: AccountType::Other,
        ifrs_category: UNCLASSIFIED.to_string(),
        ifrs_subcategory: UNCLASSIFIED.to_string(),
        confidence_score: Decimal::ZERO,
        reasoning: NO_CLASSIFICATION_REASON.to_string(),
        maturity: None,
        is_dividend: None,
    }
}
