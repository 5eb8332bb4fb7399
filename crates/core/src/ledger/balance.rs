//! Account balance aggregation.
//!
//! Balances follow normal-balance conventions:
//! - Asset/Expense: balance += debit - credit (debit-normal)
//! - Liability/Equity/Revenue/Other: balance += credit - debit (credit-normal)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::ClassifiedAccount;

/// Side on which an account type normally carries its balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense).
    Debit,
    /// Credit-normal accounts (Liability, Equity, Revenue, Other).
    Credit,
}

impl NormalBalance {
    /// Calculates the signed balance contribution of a debit/credit pair.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// Sums the signed contributions of the given accounts.
///
/// Empty input yields zero.
pub fn sum_accounts<'a, I>(accounts: I) -> Decimal
where
    I: IntoIterator<Item = &'a ClassifiedAccount>,
{
    accounts.into_iter().map(ClassifiedAccount::balance).sum()
}

/// Returns the accounts whose IFRS category equals `category` exactly.
///
/// Category strings are canonical keys: no case folding, no trimming.
pub fn filter_by_category<'a>(
    accounts: &'a [ClassifiedAccount],
    category: &str,
) -> Vec<&'a ClassifiedAccount> {
    accounts
        .iter()
        .filter(|account| account.ifrs_category == category)
        .collect()
}

/// Sums the balance of every account in `category`.
pub fn category_total(accounts: &[ClassifiedAccount], category: &str) -> Decimal {
    sum_accounts(filter_by_category(accounts, category))
}

/// Sums the balance of every account whose category is one of `categories`.
pub fn categories_total(accounts: &[ClassifiedAccount], categories: &[&str]) -> Decimal {
    sum_accounts(
        accounts
            .iter()
            .filter(|account| categories.contains(&account.ifrs_category.as_str())),
    )
}
