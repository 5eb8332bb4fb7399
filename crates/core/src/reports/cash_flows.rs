//! Statement of Cash Flows, indirect method.
//!
//! Working-capital movements and investing/financing flows are
//! reconstructed from the change in category balances between the
//! comparative period and the current period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::categories::{
    BORROWINGS, CASH_AND_CASH_EQUIVALENTS, DEPRECIATION_AND_AMORTIZATION, INVENTORIES,
    PROPERTY_PLANT_AND_EQUIPMENT, TRADE_AND_OTHER_PAYABLES, TRADE_AND_OTHER_RECEIVABLES,
};
use super::index::CategoryIndex;
use crate::ledger::{ClassifiedAccount, category_total, sum_accounts};

/// Dividends declared in a period: the summed balance of every account
/// identified as a dividend account.
pub fn dividends_declared(period_accounts: &[ClassifiedAccount]) -> Decimal {
    sum_accounts(period_accounts.iter().filter(|account| account.is_dividend()))
}

/// Cash flow figures between two consecutive periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlows {
    /// Profit for the current period.
    pub net_profit: Decimal,
    /// Depreciation and amortisation added back.
    pub depreciation: Decimal,
    /// Previous less current receivables.
    pub receivables_change: Decimal,
    /// Previous less current inventories.
    pub inventories_change: Decimal,
    /// Current less previous payables.
    pub payables_change: Decimal,
    /// Net cash from operating activities.
    pub operating: Decimal,
    /// Net cash from investing activities.
    pub investing: Decimal,
    /// Current less previous borrowings.
    pub borrowings_change: Decimal,
    /// Dividends declared in the current period.
    pub dividends: Decimal,
    /// Net cash from financing activities.
    pub financing: Decimal,
    /// Sum of the three activity totals.
    pub net_change: Decimal,
    /// Cash balance of the previous period.
    pub cash_at_beginning: Decimal,
    /// Cash balance of the current period.
    pub cash_at_end: Decimal,
}

impl CashFlows {
    /// Derives cash flows for `current` against `previous`.
    ///
    /// `period_accounts` are the accounts of `current`; `index` covers at
    /// least both periods.
    #[must_use]
    pub fn derive(
        index: &CategoryIndex,
        period_accounts: &[ClassifiedAccount],
        current: &str,
        previous: &str,
        net_profit: Decimal,
    ) -> Self {
        let movement = |category: &str| {
            index.balance(current, category) - index.balance(previous, category)
        };

        let depreciation = category_total(period_accounts, DEPRECIATION_AND_AMORTIZATION);
        let receivables_change = -movement(TRADE_AND_OTHER_RECEIVABLES);
        let inventories_change = -movement(INVENTORIES);
        let payables_change = movement(TRADE_AND_OTHER_PAYABLES);
        let operating =
            net_profit + depreciation + receivables_change + inventories_change + payables_change;

        let investing = -movement(PROPERTY_PLANT_AND_EQUIPMENT) - depreciation;

        let borrowings_change = movement(BORROWINGS);
        let dividends = dividends_declared(period_accounts);
        let financing = borrowings_change - dividends;

        Self {
            net_profit,
            depreciation,
            receivables_change,
            inventories_change,
            payables_change,
            operating,
            investing,
            borrowings_change,
            dividends,
            financing,
            net_change: operating + investing + financing,
            cash_at_beginning: index.balance(previous, CASH_AND_CASH_EQUIVALENTS),
            cash_at_end: index.balance(current, CASH_AND_CASH_EQUIVALENTS),
        }
    }

    /// Returns true if beginning cash plus the net change equals ending
    /// cash within `tolerance`.
    ///
    /// The two sides are computed independently, so source data that does
    /// not tie out makes this false.
    #[must_use]
    pub fn closing_reconciles(&self, tolerance: Decimal) -> bool {
        (self.cash_at_beginning + self.net_change - self.cash_at_end).abs() < tolerance
    }
}
