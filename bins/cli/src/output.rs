//! Rendering of command results.

use std::str::FromStr;

use clap::ValueEnum;
use mizan_core::ledger::TrialBalanceCheck;
use mizan_core::reports::{ChangesInEquity, LineItem, PeriodStatements};
use mizan_shared::{AppError, AppResult};
use serde::Serialize;
use tabled::{Table, builder::Builder};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Plain-text tables.
    Table,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| AppError::Config(format!("unknown output format '{s}'")))
    }
}

/// Serialises `value` as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}

/// Renders one period's statements as tables.
pub fn statements_table(derived: &PeriodStatements) -> String {
    let set = &derived.statements;
    let mut out = format!("Period: {}", derived.period);
    if let Some(previous) = &derived.previous_period {
        out.push_str(&format!(" (comparative: {previous})"));
    }
    out.push('\n');

    let sections = [
        ("Statement of Financial Position: Assets", &set.financial_position.assets),
        (
            "Statement of Financial Position: Equity and Liabilities",
            &set.financial_position.equity_and_liabilities,
        ),
        ("Statement of Profit or Loss", &set.profit_or_loss),
        ("Statement of Cash Flows", &set.cash_flows),
    ];
    for (title, lines) in sections {
        out.push_str(&format!("\n{title}\n"));
        if lines.is_empty() {
            out.push_str("(no comparative period)\n");
        } else {
            out.push_str(&format!("{}\n", lines_table(lines)));
        }
    }

    out.push_str("\nStatement of Changes in Equity\n");
    if set.changes_in_equity.is_empty() {
        out.push_str("(no comparative period)\n");
    } else {
        out.push_str(&format!("{}\n", equity_table(&set.changes_in_equity)));
    }
    out
}

fn lines_table(lines: &[LineItem]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Line", "Amount"]);
    for line in lines {
        let pad = "  ".repeat(usize::from(line.indent));
        let name = if line.is_total {
            line.name.to_uppercase()
        } else {
            line.name.clone()
        };
        builder.push_record([format!("{pad}{name}"), line.value.round_dp(2).to_string()]);
    }
    Table::from(builder)
}

fn equity_table(soce: &ChangesInEquity) -> Table {
    let mut builder = Builder::default();
    builder.push_record(soce.headers.clone());
    for row in &soce.rows {
        builder.push_record([
            row.description().to_string(),
            row.share_capital().round_dp(2).to_string(),
            row.retained_earnings().round_dp(2).to_string(),
            row.total().round_dp(2).to_string(),
        ]);
    }
    Table::from(builder)
}

/// Renders the selectable periods.
pub fn periods_table(periods: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Period"]);
    for (idx, period) in periods.iter().enumerate() {
        builder.push_record([(idx + 1).to_string(), period.clone()]);
    }
    Table::from(builder).to_string()
}

/// Renders a trial balance check.
pub fn check_table(period: &str, check: &TrialBalanceCheck) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Period".to_string(), period.to_string()]);
    builder.push_record(["Entries".to_string(), check.entry_count.to_string()]);
    builder.push_record(["Total Debit".to_string(), check.total_debit.to_string()]);
    builder.push_record(["Total Credit".to_string(), check.total_credit.to_string()]);
    builder.push_record(["Difference".to_string(), check.difference.to_string()]);
    builder.push_record(["Balanced".to_string(), check.is_balanced.to_string()]);
    Table::from(builder).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_core::reports::{EquityRow, StatementSet};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_from_config_string() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!(matches!("xml".parse::<OutputFormat>(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_statements_table() {
        let derived = PeriodStatements {
            period: "2024".into(),
            previous_period: Some("2023".into()),
            statements: StatementSet {
                profit_or_loss: vec![
                    LineItem::line("Revenue", dec!(1000)),
                    LineItem::total("Net Profit for the Year", dec!(1000)),
                ],
                changes_in_equity: ChangesInEquity {
                    headers: vec![
                        "Description".into(),
                        "Share Capital".into(),
                        "Retained Earnings".into(),
                        "Total Equity".into(),
                    ],
                    rows: vec![EquityRow::new("Opening Balance", dec!(10), dec!(5))],
                },
                ..StatementSet::default()
            },
        };

        let text = statements_table(&derived);

        assert!(text.contains("Period: 2024 (comparative: 2023)"));
        assert!(text.contains("NET PROFIT FOR THE YEAR"));
        assert!(text.contains("Opening Balance"));
        assert!(text.contains("(no comparative period)"));
    }

    #[test]
    fn test_periods_table() {
        let text = periods_table(&["Combined".into(), "2024".into()]);
        assert!(text.contains("Combined"));
        assert!(text.contains("2024"));
    }
}
