//! Trial balance entry and classification domain types.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::balance::NormalBalance;
use super::error::LedgerError;

/// Account type assigned during classification.
///
/// Determines the sign convention used when the account is aggregated.
/// Labels deserialize case-insensitively through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountType {
    /// Resources controlled by the entity (debit-normal).
    Asset,
    /// Present obligations (credit-normal).
    Liability,
    /// Residual interest (credit-normal).
    Equity,
    /// Income from ordinary activities (credit-normal).
    Revenue,
    /// Consumption of economic benefits (debit-normal).
    Expense,
    /// Anything the classifier could not place (credit-normal).
    Other,
}

impl AccountType {
    /// Returns the normal balance side for this account type.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue | Self::Other => NormalBalance::Credit,
        }
    }

    /// Returns true for types that flow through profit or loss.
    #[must_use]
    pub const fn is_profit_or_loss(self) -> bool {
        matches!(self, Self::Revenue | Self::Expense | Self::Other)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            "other" => Ok(Self::Other),
            _ => Err(LedgerError::UnknownAccountType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Maturity bucket for liabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maturity {
    /// Due within twelve months.
    Current,
    /// Due after twelve months.
    NonCurrent,
}

/// One account's trial balance within one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Account code from the chart of accounts.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Reporting period label (e.g. "2024", "2024-Q3").
    pub period: String,
    /// Total debits, non-negative.
    pub debit: Decimal,
    /// Total credits, non-negative.
    pub credit: Decimal,
}

/// Classification of one account code, as produced by the classifier.
///
/// A set of these forms the mapping template that is applied to every
/// period of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Account code this classification applies to.
    pub account_code: String,
    /// Account name as seen by the classifier.
    #[serde(default)]
    pub account_name: String,
    /// Account type.
    pub account_type: AccountType,
    /// IFRS category, the grouping key for every statement.
    pub ifrs_category: String,
    /// IFRS subcategory.
    #[serde(default)]
    pub ifrs_subcategory: String,
    /// Classifier confidence, 0-100. Not used in computation.
    #[serde(default)]
    pub confidence_score: Decimal,
    /// Classifier reasoning. Not used in computation.
    #[serde(default)]
    pub reasoning: String,
    /// Explicit maturity tag for borrowings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    /// Explicit dividend flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dividend: Option<bool>,
}

/// A ledger entry enriched with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAccount {
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Reporting period label.
    pub period: String,
    /// Total debits.
    pub debit: Decimal,
    /// Total credits.
    pub credit: Decimal,
    /// Account type.
    pub account_type: AccountType,
    /// IFRS category.
    pub ifrs_category: String,
    /// IFRS subcategory.
    #[serde(default)]
    pub ifrs_subcategory: String,
    /// Classifier confidence, passthrough.
    #[serde(default)]
    pub confidence_score: Decimal,
    /// Classifier reasoning, passthrough.
    #[serde(default)]
    pub reasoning: String,
    /// Explicit maturity tag; falls back to the account name when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    /// Explicit dividend flag; falls back to the account name when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dividend: Option<bool>,
}

impl ClassifiedAccount {
    /// Joins a ledger entry with its classification.
    #[must_use]
    pub fn new(entry: &LedgerEntry, classification: &Classification) -> Self {
        Self {
            account_code: entry.account_code.clone(),
            account_name: entry.account_name.clone(),
            period: entry.period.clone(),
            debit: entry.debit,
            credit: entry.credit,
            account_type: classification.account_type,
            ifrs_category: classification.ifrs_category.clone(),
            ifrs_subcategory: classification.ifrs_subcategory.clone(),
            confidence_score: classification.confidence_score,
            reasoning: classification.reasoning.clone(),
            maturity: classification.maturity,
            is_dividend: classification.is_dividend,
        }
    }

    /// Signed contribution of this account under its normal balance.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.account_type
            .normal_balance()
            .balance_change(self.debit, self.credit)
    }

    /// Returns true if this account is due after twelve months.
    ///
    /// Uses the explicit maturity tag when present, otherwise a
    /// case-insensitive "long-term" match on the account name.
    #[must_use]
    pub fn is_non_current(&self) -> bool {
        match self.maturity {
            Some(maturity) => maturity == Maturity::NonCurrent,
            None => name_contains(&self.account_name, "long-term"),
        }
    }

    /// Returns true if this account records dividends.
    ///
    /// Uses the explicit flag when present, otherwise a case-insensitive
    /// "dividend" match on the account name.
    #[must_use]
    pub fn is_dividend(&self) -> bool {
        self.is_dividend
            .unwrap_or_else(|| name_contains(&self.account_name, "dividend"))
    }
}

fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}
