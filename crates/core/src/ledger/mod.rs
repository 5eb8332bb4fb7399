//! Trial balance ledger logic.
//!
//! This module implements the ledger side of statement derivation:
//! - Trial balance entries and their classifications
//! - Normal-balance aggregation by IFRS category
//! - Application of a classification template across periods
//! - Debit/credit balance checks and the combined-period view
//! - Error types for ledger input

pub mod balance;
pub mod entry;
pub mod error;
pub mod mapping;
pub mod trial_balance;

pub use balance::{
    NormalBalance, categories_total, category_total, filter_by_category, sum_accounts,
};
pub use entry::{AccountType, Classification, ClassifiedAccount, LedgerEntry, Maturity};
pub use error::LedgerError;
pub use mapping::{UNCLASSIFIED, apply_mapping};
pub use trial_balance::{
    DEFAULT_TOLERANCE, TrialBalanceCheck, check_trial_balance, combine_periods, entries_for_period,
};
