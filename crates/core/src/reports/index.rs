//! Category balance lookups by period.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ledger::{ClassifiedAccount, sum_accounts};

/// Balance of `category` in `period`, recomputed from the full account set.
///
/// Absent categories resolve to zero.
pub fn category_balance(
    all_accounts: &[ClassifiedAccount],
    category: &str,
    period: &str,
) -> Decimal {
    sum_accounts(
        all_accounts
            .iter()
            .filter(|account| account.period == period)
            .filter(|account| account.ifrs_category == category),
    )
}

/// Precomputed `(period, category) -> balance` map.
///
/// Built once per derivation; gives the same answers as
/// [`category_balance`] without rescanning the accounts on every lookup.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    balances: HashMap<String, HashMap<String, Decimal>>,
}

impl CategoryIndex {
    /// Builds the index from every classified account.
    #[must_use]
    pub fn build(accounts: &[ClassifiedAccount]) -> Self {
        let mut balances: HashMap<String, HashMap<String, Decimal>> = HashMap::new();
        for account in accounts {
            *balances
                .entry(account.period.clone())
                .or_default()
                .entry(account.ifrs_category.clone())
                .or_default() += account.balance();
        }
        Self { balances }
    }

    /// Balance of `category` in `period`; zero when absent.
    #[must_use]
    pub fn balance(&self, period: &str, category: &str) -> Decimal {
        self.balances
            .get(period)
            .and_then(|categories| categories.get(category))
            .copied()
            .unwrap_or_default()
    }
}
