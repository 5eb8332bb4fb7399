//! IFRS category keys recognised by the statement builders.
//!
//! These are the canonical labels the classifier assigns; matching is exact.

/// Revenue (IFRS 15).
pub const REVENUE: &str = "Revenue from Contracts with Customers";
/// Cost of sales.
pub const COST_OF_SALES: &str = "Cost of Sales";
/// Administrative expenses.
pub const ADMINISTRATIVE_EXPENSES: &str = "Administrative Expenses";
/// Selling and distribution expenses.
pub const SELLING_AND_DISTRIBUTION_EXPENSES: &str = "Selling and Distribution Expenses";
/// Depreciation and amortisation charge.
pub const DEPRECIATION_AND_AMORTIZATION: &str = "Depreciation and Amortization";
/// Impairment losses.
pub const IMPAIRMENT_LOSSES: &str = "Impairment Losses";
/// Finance costs.
pub const FINANCE_COSTS: &str = "Finance Costs";

/// Categories rolled up into operating expenses.
pub const OPERATING_EXPENSES: [&str; 4] = [
    ADMINISTRATIVE_EXPENSES,
    SELLING_AND_DISTRIBUTION_EXPENSES,
    DEPRECIATION_AND_AMORTIZATION,
    IMPAIRMENT_LOSSES,
];

/// Property, plant and equipment (IAS 16).
pub const PROPERTY_PLANT_AND_EQUIPMENT: &str = "Property Plant and Equipment";
/// Intangible assets (IAS 38).
pub const INTANGIBLE_ASSETS: &str = "Intangible Assets";
/// Inventories (IAS 2).
pub const INVENTORIES: &str = "Inventories";
/// Trade and other receivables.
pub const TRADE_AND_OTHER_RECEIVABLES: &str = "Trade and Other Receivables";
/// Cash and cash equivalents.
pub const CASH_AND_CASH_EQUIVALENTS: &str = "Cash and Cash Equivalents";

/// Share capital.
pub const SHARE_CAPITAL: &str = "Share Capital";
/// Retained earnings.
pub const RETAINED_EARNINGS: &str = "Retained Earnings";

/// Borrowings, split by maturity on the financial position.
pub const BORROWINGS: &str = "Borrowings";
/// Trade and other payables.
pub const TRADE_AND_OTHER_PAYABLES: &str = "Trade and Other Payables";
