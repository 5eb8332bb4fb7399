//! Statement of Financial Position.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::categories::{
    BORROWINGS, CASH_AND_CASH_EQUIVALENTS, INTANGIBLE_ASSETS, INVENTORIES,
    PROPERTY_PLANT_AND_EQUIPMENT, RETAINED_EARNINGS, SHARE_CAPITAL, TRADE_AND_OTHER_PAYABLES,
    TRADE_AND_OTHER_RECEIVABLES,
};
use crate::ledger::{ClassifiedAccount, category_total, filter_by_category, sum_accounts};

/// Financial position figures at the end of one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialPosition {
    /// Property, plant and equipment.
    pub property_plant_and_equipment: Decimal,
    /// Intangible assets.
    pub intangible_assets: Decimal,
    /// Total non-current assets.
    pub non_current_assets: Decimal,
    /// Inventories.
    pub inventories: Decimal,
    /// Trade and other receivables.
    pub receivables: Decimal,
    /// Cash and cash equivalents.
    pub cash: Decimal,
    /// Total current assets.
    pub current_assets: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Share capital.
    pub share_capital: Decimal,
    /// Retained earnings including the profit of the period.
    pub retained_earnings: Decimal,
    /// Total equity.
    pub total_equity: Decimal,
    /// Borrowings due after twelve months.
    pub non_current_liabilities: Decimal,
    /// Payables plus borrowings due within twelve months.
    pub current_liabilities: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity plus total liabilities.
    pub total_equity_and_liabilities: Decimal,
}

impl FinancialPosition {
    /// Builds the statement from the accounts of one period.
    ///
    /// `net_profit` is folded into retained earnings; this is the link
    /// between profit or loss and the financial position.
    #[must_use]
    pub fn from_accounts(accounts: &[ClassifiedAccount], net_profit: Decimal) -> Self {
        let property_plant_and_equipment = category_total(accounts, PROPERTY_PLANT_AND_EQUIPMENT);
        let intangible_assets = category_total(accounts, INTANGIBLE_ASSETS);
        let non_current_assets = property_plant_and_equipment + intangible_assets;

        let inventories = category_total(accounts, INVENTORIES);
        let receivables = category_total(accounts, TRADE_AND_OTHER_RECEIVABLES);
        let cash = category_total(accounts, CASH_AND_CASH_EQUIVALENTS);
        let current_assets = inventories + receivables + cash;

        let total_assets = non_current_assets + current_assets;

        let share_capital = category_total(accounts, SHARE_CAPITAL);
        let retained_earnings = category_total(accounts, RETAINED_EARNINGS) + net_profit;
        let total_equity = share_capital + retained_earnings;

        let (long_term, short_term): (Vec<_>, Vec<_>) = filter_by_category(accounts, BORROWINGS)
            .into_iter()
            .partition(|account| account.is_non_current());
        let non_current_liabilities = sum_accounts(long_term);
        let current_liabilities =
            category_total(accounts, TRADE_AND_OTHER_PAYABLES) + sum_accounts(short_term);
        let total_liabilities = non_current_liabilities + current_liabilities;

        Self {
            property_plant_and_equipment,
            intangible_assets,
            non_current_assets,
            inventories,
            receivables,
            cash,
            current_assets,
            total_assets,
            share_capital,
            retained_earnings,
            total_equity,
            non_current_liabilities,
            current_liabilities,
            total_liabilities,
            total_equity_and_liabilities: total_equity + total_liabilities,
        }
    }

    /// Total assets less total equity and liabilities.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_assets - self.total_equity_and_liabilities
    }

    /// Returns true if both sides agree within `tolerance`.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.difference().abs() < tolerance
    }
}
