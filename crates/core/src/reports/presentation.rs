//! Projection of statement figures into presentation lines.
//!
//! Builders compute figures only; this module owns captions, ordering,
//! section headings and indentation.

use rust_decimal::Decimal;

use super::cash_flows::CashFlows;
use super::changes_in_equity::EquityMovements;
use super::financial_position::FinancialPosition;
use super::profit_or_loss::ProfitOrLoss;
use super::types::{ChangesInEquity, EquityRow, FinancialPositionLines, LineItem};

/// Column headers of the Statement of Changes in Equity.
pub const EQUITY_HEADERS: [&str; 4] = [
    "Description",
    "Share Capital",
    "Retained Earnings",
    "Total Equity",
];

/// Statement of Profit or Loss lines.
#[must_use]
pub fn profit_or_loss_lines(pl: &ProfitOrLoss) -> Vec<LineItem> {
    vec![
        LineItem::line("Revenue", pl.revenue),
        LineItem::line("Cost of Sales", -pl.cost_of_sales),
        LineItem::subtotal("Gross Profit", pl.gross_profit),
        LineItem::line("Operating Expenses", -pl.operating_expenses),
        LineItem::subtotal("Operating Profit", pl.operating_profit),
        LineItem::line("Finance Costs", -pl.finance_costs),
        LineItem::subtotal("Profit Before Zakat and Tax", pl.profit_before_tax),
        LineItem::line("Zakat and Tax Expense", -pl.tax_expense),
        LineItem::total("Net Profit for the Year", pl.net_profit),
    ]
}

/// Statement of Financial Position lines.
#[must_use]
pub fn financial_position_lines(fp: &FinancialPosition) -> FinancialPositionLines {
    let assets = vec![
        LineItem::heading("Non-current Assets"),
        LineItem::line(
            "Property, Plant and Equipment",
            fp.property_plant_and_equipment,
        )
        .indented(1),
        LineItem::line("Intangible Assets", fp.intangible_assets).indented(1),
        LineItem::subtotal("Total Non-current Assets", fp.non_current_assets),
        LineItem::heading("Current Assets"),
        LineItem::line("Inventories", fp.inventories).indented(1),
        LineItem::line("Trade and Other Receivables", fp.receivables).indented(1),
        LineItem::line("Cash and Cash Equivalents", fp.cash).indented(1),
        LineItem::subtotal("Total Current Assets", fp.current_assets),
        LineItem::total("Total Assets", fp.total_assets),
    ];

    let equity_and_liabilities = vec![
        LineItem::heading("Equity"),
        LineItem::line("Share Capital", fp.share_capital).indented(1),
        LineItem::line("Retained Earnings", fp.retained_earnings).indented(1),
        LineItem::subtotal("Total Equity", fp.total_equity),
        LineItem::heading("Liabilities"),
        LineItem::line("Non-current Liabilities", fp.non_current_liabilities).indented(1),
        LineItem::line("Current Liabilities", fp.current_liabilities).indented(1),
        LineItem::subtotal("Total Liabilities", fp.total_liabilities),
        LineItem::total("Total Equity and Liabilities", fp.total_equity_and_liabilities),
    ];

    FinancialPositionLines {
        assets,
        equity_and_liabilities,
    }
}

/// Statement of Cash Flows lines. `None` yields an empty statement.
#[must_use]
pub fn cash_flow_lines(cf: Option<&CashFlows>) -> Vec<LineItem> {
    let Some(cf) = cf else {
        return Vec::new();
    };

    vec![
        LineItem::heading("Cash flows from operating activities"),
        LineItem::line("Net Profit", cf.net_profit).indented(1),
        LineItem::line("Adjustments for non-cash items:", Decimal::ZERO).indented(1),
        LineItem::line("Depreciation and amortization", cf.depreciation).indented(2),
        LineItem::line("Changes in working capital:", Decimal::ZERO).indented(1),
        LineItem::line("Decrease/(Increase) in receivables", cf.receivables_change).indented(2),
        LineItem::line("Decrease/(Increase) in inventories", cf.inventories_change).indented(2),
        LineItem::line("Increase/(Decrease) in payables", cf.payables_change).indented(2),
        LineItem::subtotal("Net cash from operating activities", cf.operating),
        LineItem::heading("Cash flows from investing activities"),
        LineItem::line("Purchase of Property, Plant and Equipment", cf.investing).indented(1),
        LineItem::subtotal("Net cash used in investing activities", cf.investing),
        LineItem::heading("Cash flows from financing activities"),
        LineItem::line("Proceeds from borrowings", cf.borrowings_change).indented(1),
        LineItem::line("Dividends paid", -cf.dividends).indented(1),
        LineItem::subtotal("Net cash from financing activities", cf.financing),
        LineItem::subtotal("Net increase/(decrease) in cash", cf.net_change),
        LineItem::line("Cash at beginning of period", cf.cash_at_beginning),
        LineItem::total("Cash at end of period", cf.cash_at_end),
    ]
}

/// Statement of Changes in Equity. `None` yields an empty statement.
#[must_use]
pub fn changes_in_equity_rows(
    movements: Option<&EquityMovements>,
    tolerance: Decimal,
) -> ChangesInEquity {
    let Some(m) = movements else {
        return ChangesInEquity::default();
    };

    let mut rows = vec![
        EquityRow::new("Opening Balance", m.opening_share_capital, m.opening_retained_earnings),
        EquityRow::new("Net Profit for the Year", Decimal::ZERO, m.net_profit),
    ];
    if m.has_share_issue(tolerance) {
        rows.push(EquityRow::new("Issue of Share Capital", m.share_issue, Decimal::ZERO));
    }
    if m.has_dividends() {
        rows.push(EquityRow::new("Dividends", Decimal::ZERO, -m.dividends));
    }
    rows.push(EquityRow::new(
        "Closing Balance",
        m.closing_share_capital,
        m.closing_retained_earnings,
    ));

    ChangesInEquity {
        headers: EQUITY_HEADERS.iter().map(ToString::to_string).collect(),
        rows,
    }
}
