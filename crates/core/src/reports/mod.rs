//! Financial statement derivation.
//!
//! This module turns classified accounts into IFRS statements:
//! - Statement of Profit or Loss
//! - Statement of Financial Position
//! - Statement of Cash Flows (indirect method)
//! - Statement of Changes in Equity
//!
//! Builders compute figures; [`presentation`] lays them out as lines.

pub mod cash_flows;
pub mod categories;
pub mod changes_in_equity;
pub mod error;
pub mod financial_position;
pub mod index;
pub mod presentation;
pub mod profit_or_loss;
pub mod service;
pub mod types;


pub use cash_flows::{CashFlows, dividends_declared};
pub use changes_in_equity::EquityMovements;
pub use error::ReportError;
pub use financial_position::FinancialPosition;
pub use index::{CategoryIndex, category_balance};
pub use profit_or_loss::ProfitOrLoss;
pub use service::{Derivation, EngineOptions, StatementService, generate_statements};
pub use types::*;
