//! Statement assembly service.

use std::collections::BTreeSet;

use mizan_shared::EngineConfig;
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use super::cash_flows::CashFlows;
use super::changes_in_equity::EquityMovements;
use super::error::ReportError;
use super::financial_position::FinancialPosition;
use super::index::CategoryIndex;
use super::presentation::{
    cash_flow_lines, changes_in_equity_rows, financial_position_lines, profit_or_loss_lines,
};
use super::profit_or_loss::ProfitOrLoss;
use super::types::{PeriodStatements, StatementSet};
use crate::fiscal::{
    COMBINED, PeriodOrdering, available_periods, default_period, latest_period, previous_period,
};
use crate::ledger::{ClassifiedAccount, DEFAULT_TOLERANCE};

/// Options controlling a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// How period labels are ordered.
    pub period_ordering: PeriodOrdering,
    /// Rounding guard for threshold comparisons.
    pub tolerance: Decimal,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            period_ordering: PeriodOrdering::Lexical,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl From<&EngineConfig> for EngineOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            period_ordering: PeriodOrdering::from_sequence(config.period_order.clone()),
            tolerance: config.tolerance,
        }
    }
}

/// Statement figures for one selected period, before presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Selected period.
    pub period: String,
    /// Comparative period, if one was found.
    pub previous_period: Option<String>,
    /// Profit or loss of the selection.
    pub profit_or_loss: ProfitOrLoss,
    /// Financial position at the end of the selection.
    pub financial_position: FinancialPosition,
    /// Cash flows; present only with a comparative period.
    pub cash_flows: Option<CashFlows>,
    /// Equity movements; present only with a comparative period.
    pub changes_in_equity: Option<EquityMovements>,
}

impl Derivation {
    /// Projects the figures into presentation lines.
    #[must_use]
    pub fn statements(&self, tolerance: Decimal) -> StatementSet {
        StatementSet {
            financial_position: financial_position_lines(&self.financial_position),
            profit_or_loss: profit_or_loss_lines(&self.profit_or_loss),
            cash_flows: cash_flow_lines(self.cash_flows.as_ref()),
            changes_in_equity: changes_in_equity_rows(self.changes_in_equity.as_ref(), tolerance),
        }
    }
}

/// Service for deriving financial statements.
pub struct StatementService;

impl StatementService {
    /// Derives statement figures for `selected_period`.
    ///
    /// A period absent from the data yields zero figures and no
    /// comparatives.
    #[must_use]
    pub fn derive(
        accounts: &[ClassifiedAccount],
        selected_period: &str,
        options: &EngineOptions,
    ) -> Derivation {
        let periods = distinct_periods(accounts);

        if selected_period == COMBINED {
            return Self::derive_combined(accounts, &periods, options);
        }

        let period_accounts = accounts_in(accounts, selected_period);
        let profit_or_loss = ProfitOrLoss::from_accounts(&period_accounts);
        let financial_position =
            FinancialPosition::from_accounts(&period_accounts, profit_or_loss.net_profit);

        let previous = previous_period(&periods, selected_period, &options.period_ordering);
        let (cash_flows, changes_in_equity) = match previous.as_deref() {
            Some(prev) => {
                let index = CategoryIndex::build(accounts);
                let cash_flows = CashFlows::derive(
                    &index,
                    &period_accounts,
                    selected_period,
                    prev,
                    profit_or_loss.net_profit,
                );
                let movements = EquityMovements::derive(
                    &index,
                    selected_period,
                    prev,
                    profit_or_loss.net_profit,
                    cash_flows.dividends,
                );
                (Some(cash_flows), Some(movements))
            }
            None => {
                debug!(
                    period = %selected_period,
                    "No comparative period, skipping cash flows and equity"
                );
                (None, None)
            }
        };

        debug!(
            period = %selected_period,
            previous = ?previous,
            accounts = period_accounts.len(),
            net_profit = %profit_or_loss.net_profit,
            "Derived statements"
        );

        Derivation {
            period: selected_period.to_string(),
            previous_period: previous,
            profit_or_loss,
            financial_position,
            cash_flows,
            changes_in_equity,
        }
    }

    fn derive_combined(
        accounts: &[ClassifiedAccount],
        periods: &[&str],
        options: &EngineOptions,
    ) -> Derivation {
        let pl_accounts: Vec<ClassifiedAccount> = accounts
            .iter()
            .filter(|account| account.account_type.is_profit_or_loss())
            .cloned()
            .collect();
        let profit_or_loss = ProfitOrLoss::from_accounts(&pl_accounts);

        // The balance sheet is a point-in-time view of the latest period.
        let latest = latest_period(periods, &options.period_ordering);
        let latest_accounts = latest
            .as_deref()
            .map(|period| accounts_in(accounts, period))
            .unwrap_or_default();
        let latest_profit = ProfitOrLoss::from_accounts(&latest_accounts).net_profit;
        let financial_position = FinancialPosition::from_accounts(&latest_accounts, latest_profit);

        debug!(
            periods = periods.len(),
            latest = ?latest,
            net_profit = %profit_or_loss.net_profit,
            "Derived combined statements"
        );

        Derivation {
            period: COMBINED.to_string(),
            previous_period: None,
            profit_or_loss,
            financial_position,
            cash_flows: None,
            changes_in_equity: None,
        }
    }

    /// Generates the statement set for `selected_period`.
    #[must_use]
    pub fn generate(
        accounts: &[ClassifiedAccount],
        selected_period: &str,
        options: &EngineOptions,
    ) -> StatementSet {
        Self::derive(accounts, selected_period, options).statements(options.tolerance)
    }

    /// Generates statements for every selectable period in parallel.
    ///
    /// Output follows [`available_periods`] order, newest first with the
    /// combined view leading.
    #[must_use]
    pub fn generate_all(
        accounts: &[ClassifiedAccount],
        options: &EngineOptions,
    ) -> Vec<PeriodStatements> {
        let periods = available_periods(&distinct_periods(accounts), &options.period_ordering);
        debug!(periods = periods.len(), "Generating statements for all periods");

        periods
            .par_iter()
            .map(|period| {
                let derivation = Self::derive(accounts, period, options);
                PeriodStatements {
                    period: derivation.period.clone(),
                    previous_period: derivation.previous_period.clone(),
                    statements: derivation.statements(options.tolerance),
                }
            })
            .collect()
    }

    /// Resolves the period a caller asked for.
    ///
    /// With no request, the default selection applies.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoDataFound`] for an empty account set and
    /// [`ReportError::PeriodNotFound`] for a period the data does not offer.
    pub fn resolve_period(
        accounts: &[ClassifiedAccount],
        requested: Option<&str>,
        options: &EngineOptions,
    ) -> Result<String, ReportError> {
        let periods = distinct_periods(accounts);
        if periods.is_empty() {
            return Err(ReportError::NoDataFound);
        }

        match requested {
            Some(period) => {
                if available_periods(&periods, &options.period_ordering)
                    .iter()
                    .any(|p| p == period)
                {
                    Ok(period.to_string())
                } else {
                    Err(ReportError::PeriodNotFound(period.to_string()))
                }
            }
            None => {
                default_period(&periods, &options.period_ordering).ok_or(ReportError::NoDataFound)
            }
        }
    }
}

/// Generates the statement set for `selected_period` with default options.
#[must_use]
pub fn generate_statements(accounts: &[ClassifiedAccount], selected_period: &str) -> StatementSet {
    StatementService::generate(accounts, selected_period, &EngineOptions::default())
}

fn distinct_periods(accounts: &[ClassifiedAccount]) -> Vec<&str> {
    accounts
        .iter()
        .map(|account| account.period.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn accounts_in(accounts: &[ClassifiedAccount], period: &str) -> Vec<ClassifiedAccount> {
    accounts
        .iter()
        .filter(|account| account.period == period)
        .cloned()
        .collect()
}
