//! Statement of Profit or Loss.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::categories::{COST_OF_SALES, FINANCE_COSTS, OPERATING_EXPENSES, REVENUE};
use crate::ledger::{ClassifiedAccount, categories_total, category_total};

/// Profit or loss figures for one set of accounts.
///
/// Expense figures are positive amounts; the presentation layer shows
/// them as reductions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitOrLoss {
    /// Revenue from contracts with customers.
    pub revenue: Decimal,
    /// Cost of sales.
    pub cost_of_sales: Decimal,
    /// Revenue less cost of sales.
    pub gross_profit: Decimal,
    /// Administrative, selling, depreciation and impairment charges.
    pub operating_expenses: Decimal,
    /// Gross profit less operating expenses.
    pub operating_profit: Decimal,
    /// Finance costs.
    pub finance_costs: Decimal,
    /// Operating profit less finance costs.
    pub profit_before_tax: Decimal,
    /// Zakat and income tax. Not computed; always zero.
    pub tax_expense: Decimal,
    /// Profit for the period.
    pub net_profit: Decimal,
}

impl ProfitOrLoss {
    /// Builds the statement from the accounts of one period.
    #[must_use]
    pub fn from_accounts(accounts: &[ClassifiedAccount]) -> Self {
        let revenue = category_total(accounts, REVENUE);
        let cost_of_sales = category_total(accounts, COST_OF_SALES);
        let gross_profit = revenue - cost_of_sales;

        let operating_expenses = categories_total(accounts, &OPERATING_EXPENSES);
        let operating_profit = gross_profit - operating_expenses;

        let finance_costs = category_total(accounts, FINANCE_COSTS);
        let profit_before_tax = operating_profit - finance_costs;

        let tax_expense = Decimal::ZERO;
        let net_profit = profit_before_tax - tax_expense;

        Self {
            revenue,
            cost_of_sales,
            gross_profit,
            operating_expenses,
            operating_profit,
            finance_costs,
            profit_before_tax,
            tax_expense,
            net_profit,
        }
    }
}
