//! Ledger error types.

use thiserror::Error;

/// Errors that can occur while interpreting ledger input.
///
/// Statement derivation itself never fails; these errors only arise when
/// raw labels from a collaborator are converted into domain types.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Account type label is not one of the known types.
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),
}
