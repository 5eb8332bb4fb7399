//! Statement output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One presentation line of a statement.
///
/// Order within a statement is meaningful: presentation order is
/// computation order. Negative values denote reductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line caption.
    pub name: String,
    /// Line amount.
    pub value: Decimal,
    /// Final figure of the statement.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_total: bool,
    /// Intermediate roll-up or section heading.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_subtotal: bool,
    /// Nesting level under the enclosing heading.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub indent: u8,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(indent: &u8) -> bool {
    *indent == 0
}

impl LineItem {
    /// Plain line. Negative zero is shown as zero.
    #[must_use]
    pub fn line(name: &str, value: Decimal) -> Self {
        Self {
            name: name.to_string(),
            value: value.normalize(),
            is_total: false,
            is_subtotal: false,
            indent: 0,
        }
    }

    /// Intermediate roll-up.
    #[must_use]
    pub fn subtotal(name: &str, value: Decimal) -> Self {
        Self {
            is_subtotal: true,
            ..Self::line(name, value)
        }
    }

    /// Zero-valued section heading.
    #[must_use]
    pub fn heading(name: &str) -> Self {
        Self::subtotal(name, Decimal::ZERO)
    }

    /// Final figure.
    #[must_use]
    pub fn total(name: &str, value: Decimal) -> Self {
        Self {
            is_total: true,
            ..Self::line(name, value)
        }
    }

    /// Returns the line nested `indent` levels deep.
    #[must_use]
    pub fn indented(self, indent: u8) -> Self {
        Self { indent, ..self }
    }
}

/// Statement of Financial Position lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPositionLines {
    /// Asset side.
    pub assets: Vec<LineItem>,
    /// Equity and liabilities side.
    pub equity_and_liabilities: Vec<LineItem>,
}

/// One row of the Statement of Changes in Equity.
///
/// Serialises as `[description, share capital, retained earnings, total]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityRow(pub String, pub Decimal, pub Decimal, pub Decimal);

impl EquityRow {
    /// Builds a row; the total column is the sum of the two components.
    #[must_use]
    pub fn new(description: &str, share_capital: Decimal, retained_earnings: Decimal) -> Self {
        Self(
            description.to_string(),
            share_capital.normalize(),
            retained_earnings.normalize(),
            (share_capital + retained_earnings).normalize(),
        )
    }

    /// Row caption.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0
    }

    /// Share capital column.
    #[must_use]
    pub fn share_capital(&self) -> Decimal {
        self.1
    }

    /// Retained earnings column.
    #[must_use]
    pub fn retained_earnings(&self) -> Decimal {
        self.2
    }

    /// Total equity column.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.3
    }
}

/// Statement of Changes in Equity as a header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangesInEquity {
    /// Column headers; empty when no comparative period exists.
    pub headers: Vec<String>,
    /// Data rows in presentation order.
    pub rows: Vec<EquityRow>,
}

impl ChangesInEquity {
    /// Returns true when the statement has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The full set of statements for one selected period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSet {
    /// Statement of Financial Position.
    pub financial_position: FinancialPositionLines,
    /// Statement of Profit or Loss.
    pub profit_or_loss: Vec<LineItem>,
    /// Statement of Cash Flows; empty without a comparative period.
    pub cash_flows: Vec<LineItem>,
    /// Statement of Changes in Equity; empty without a comparative period.
    pub changes_in_equity: ChangesInEquity,
}

impl StatementSet {
    /// Total assets as presented.
    #[must_use]
    pub fn total_assets(&self) -> Decimal {
        final_total(&self.financial_position.assets)
    }

    /// Total equity and liabilities as presented.
    #[must_use]
    pub fn total_equity_and_liabilities(&self) -> Decimal {
        final_total(&self.financial_position.equity_and_liabilities)
    }

    /// Returns true if both sides of the financial position agree within
    /// `tolerance`. Source data errors can make this false; statement
    /// generation does not enforce it.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        (self.total_assets() - self.total_equity_and_liabilities()).abs() < tolerance
    }
}

fn final_total(lines: &[LineItem]) -> Decimal {
    lines
        .iter()
        .rev()
        .find(|line| line.is_total)
        .map_or(Decimal::ZERO, |line| line.value)
}

/// Statements derived for one period during a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatements {
    /// Selected period.
    pub period: String,
    /// Comparative period, if one was found.
    pub previous_period: Option<String>,
    /// Derived statements.
    pub statements: StatementSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_line_item_serialization_skips_unset_markers() {
        let plain = serde_json::to_value(LineItem::line("Revenue", dec!(1000))).unwrap();
        assert_eq!(plain, json!({ "name": "Revenue", "value": "1000" }));

        let nested =
            serde_json::to_value(LineItem::line("Inventories", dec!(5)).indented(1)).unwrap();
        assert_eq!(nested, json!({ "name": "Inventories", "value": "5", "indent": 1 }));

        let total = serde_json::to_value(LineItem::total("Total Assets", dec!(7))).unwrap();
        assert_eq!(total, json!({ "name": "Total Assets", "value": "7", "isTotal": true }));

        let heading = serde_json::to_value(LineItem::heading("Equity")).unwrap();
        assert_eq!(heading, json!({ "name": "Equity", "value": "0", "isSubtotal": true }));
    }

    #[test]
    fn test_equity_row_serializes_as_array() {
        let row = EquityRow::new("Opening Balance", dec!(1000), dec!(200));
        assert_eq!(row.total(), dec!(1200));
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!(["Opening Balance", "1000", "200", "1200"])
        );
    }

    #[test]
    fn test_statement_set_keys() {
        let value = serde_json::to_value(StatementSet::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "financialPosition": { "assets": [], "equityAndLiabilities": [] },
                "profitOrLoss": [],
                "cashFlows": [],
                "changesInEquity": { "headers": [], "rows": [] }
            })
        );
    }

    #[test]
    fn test_is_balanced_uses_final_totals() {
        let set = StatementSet {
            financial_position: FinancialPositionLines {
                assets: vec![
                    LineItem::subtotal("Total Current Assets", dec!(10)),
                    LineItem::total("Total Assets", dec!(100)),
                ],
                equity_and_liabilities: vec![LineItem::total(
                    "Total Equity and Liabilities",
                    dec!(100.004),
                )],
            },
            ..StatementSet::default()
        };

        assert_eq!(set.total_assets(), dec!(100));
        assert!(set.is_balanced(dec!(0.01)));
        assert!(!set.is_balanced(dec!(0.001)));
    }
}
