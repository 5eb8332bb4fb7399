//! Statement of Changes in Equity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::categories::{RETAINED_EARNINGS, SHARE_CAPITAL};
use super::index::CategoryIndex;

/// Equity movements between two consecutive periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityMovements {
    /// Share capital of the previous period.
    pub opening_share_capital: Decimal,
    /// Retained earnings of the previous period, before any profit fold.
    pub opening_retained_earnings: Decimal,
    /// Profit for the current period.
    pub net_profit: Decimal,
    /// Current less previous share capital.
    pub share_issue: Decimal,
    /// Dividends declared in the current period.
    pub dividends: Decimal,
    /// Share capital of the current period.
    pub closing_share_capital: Decimal,
    /// Opening retained earnings plus profit less dividends.
    pub closing_retained_earnings: Decimal,
}

impl EquityMovements {
    /// Derives equity movements for `current` against `previous`.
    #[must_use]
    pub fn derive(
        index: &CategoryIndex,
        current: &str,
        previous: &str,
        net_profit: Decimal,
        dividends: Decimal,
    ) -> Self {
        let opening_share_capital = index.balance(previous, SHARE_CAPITAL);
        let opening_retained_earnings = index.balance(previous, RETAINED_EARNINGS);
        let closing_share_capital = index.balance(current, SHARE_CAPITAL);

        Self {
            opening_share_capital,
            opening_retained_earnings,
            net_profit,
            share_issue: closing_share_capital - opening_share_capital,
            dividends,
            closing_share_capital,
            closing_retained_earnings: opening_retained_earnings + net_profit - dividends,
        }
    }

    /// Returns true if share capital moved by more than `tolerance`.
    #[must_use]
    pub fn has_share_issue(&self, tolerance: Decimal) -> bool {
        self.share_issue.abs() > tolerance
    }

    /// Returns true if any dividend was declared.
    #[must_use]
    pub fn has_dividends(&self) -> bool {
        self.dividends > Decimal::ZERO
    }

    /// Opening equity.
    #[must_use]
    pub fn opening_total(&self) -> Decimal {
        self.opening_share_capital + self.opening_retained_earnings
    }

    /// Closing equity.
    #[must_use]
    pub fn closing_total(&self) -> Decimal {
        self.closing_share_capital + self.closing_retained_earnings
    }
}
