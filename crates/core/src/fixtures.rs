//! Test fixtures shared by unit tests across modules.

use rust_decimal::Decimal;

use crate::ledger::{AccountType, ClassifiedAccount};

/// Builds a classified account with empty passthrough fields.
pub(crate) fn account(
    code: &str,
    name: &str,
    period: &str,
    account_type: AccountType,
    category: &str,
    debit: Decimal,
    credit: Decimal,
) -> ClassifiedAccount {
    ClassifiedAccount {
        account_code: code.to_string(),
        account_name: name.to_string(),
        period: period.to_string(),
        debit,
        credit,
        account_type,
        ifrs_category: category.to_string(),
        ifrs_subcategory: String::new(),
        confidence_score: Decimal::ZERO,
        reasoning: String::new(),
        maturity: None,
        is_dividend: None,
    }
}
