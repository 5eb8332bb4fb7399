//! Trial balance checks and the combined-period view of raw entries.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;
use crate::fiscal::COMBINED;

/// Default tolerance for the debit/credit comparison.
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Result of comparing total debits with total credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceCheck {
    /// Number of entries checked.
    pub entry_count: usize,
    /// Total debits.
    pub total_debit: Decimal,
    /// Total credits.
    pub total_credit: Decimal,
    /// Debits minus credits.
    pub difference: Decimal,
    /// Whether |difference| is below the tolerance.
    pub is_balanced: bool,
}

/// Checks that total debits equal total credits within `tolerance`.
///
/// An empty set is trivially balanced; callers can tell it apart by
/// `entry_count == 0`.
pub fn check_trial_balance(entries: &[LedgerEntry], tolerance: Decimal) -> TrialBalanceCheck {
    let total_debit: Decimal = entries.iter().map(|e| e.debit).sum();
    let total_credit: Decimal = entries.iter().map(|e| e.credit).sum();
    let difference = total_debit - total_credit;

    TrialBalanceCheck {
        entry_count: entries.len(),
        total_debit,
        total_credit,
        difference,
        is_balanced: difference.abs() < tolerance,
    }
}

/// Collapses entries across periods into one row per account code.
///
/// Debits and credits are summed; name and position come from the first
/// occurrence of each code, and the period becomes [`COMBINED`].
pub fn combine_periods(entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut combined: Vec<LedgerEntry> = Vec::new();

    for entry in entries {
        if let Some(&idx) = position.get(entry.account_code.as_str()) {
            combined[idx].debit += entry.debit;
            combined[idx].credit += entry.credit;
        } else {
            position.insert(entry.account_code.as_str(), combined.len());
            combined.push(LedgerEntry {
                period: COMBINED.to_string(),
                ..entry.clone()
            });
        }
    }

    combined
}

/// Returns the entries relevant to `period`, combining all periods when
/// `period` is [`COMBINED`].
pub fn entries_for_period(entries: &[LedgerEntry], period: &str) -> Vec<LedgerEntry> {
    if period == COMBINED {
        combine_periods(entries)
    } else {
        entries.iter().filter(|e| e.period == period).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn entry(code: &str, period: &str, debit: Decimal, credit: Decimal) -> LedgerEntry {
        LedgerEntry {
            account_code: code.to_string(),
            account_name: format!("Account {code}"),
            period: period.to_string(),
            debit,
            credit,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Combining never changes the grand totals.
        #[test]
        fn prop_combine_preserves_totals(
            rows in prop::collection::vec((0u8..6, 0u8..3, 0i64..1_000_000, 0i64..1_000_000), 0..40),
        ) {
            let entries: Vec<LedgerEntry> = rows
                .iter()
                .map(|(code, period, d, c)| {
                    entry(
                        &format!("{code}"),
                        &format!("202{period}"),
                        Decimal::new(*d, 2),
                        Decimal::new(*c, 2),
                    )
                })
                .collect();

            let before = check_trial_balance(&entries, DEFAULT_TOLERANCE);
            let after = check_trial_balance(&combine_periods(&entries), DEFAULT_TOLERANCE);

            prop_assert_eq!(before.total_debit, after.total_debit);
            prop_assert_eq!(before.total_credit, after.total_credit);
            prop_assert_eq!(before.is_balanced, after.is_balanced);
        }
    }

    #[test]
    fn test_balanced_trial_balance() {
        let entries = vec![
            entry("1000", "2024", dec!(500), dec!(0)),
            entry("3000", "2024", dec!(0), dec!(499.995)),
        ];

        let check = check_trial_balance(&entries, DEFAULT_TOLERANCE);

        assert_eq!(check.entry_count, 2);
        assert_eq!(check.total_debit, dec!(500));
        assert_eq!(check.total_credit, dec!(499.995));
        assert_eq!(check.difference, dec!(0.005));
        assert!(check.is_balanced);
    }

    #[test]
    fn test_unbalanced_trial_balance() {
        let entries = vec![
            entry("1000", "2024", dec!(500), dec!(0)),
            entry("3000", "2024", dec!(0), dec!(400)),
        ];

        let check = check_trial_balance(&entries, DEFAULT_TOLERANCE);

        assert_eq!(check.difference, dec!(100));
        assert!(!check.is_balanced);
    }

    #[test]
    fn test_tolerance_boundary_is_exclusive() {
        let entries = vec![entry("1000", "2024", dec!(10.01), dec!(10))];
        assert!(!check_trial_balance(&entries, DEFAULT_TOLERANCE).is_balanced);
        assert!(check_trial_balance(&entries, dec!(0.02)).is_balanced);
    }

    #[test]
    fn test_empty_trial_balance() {
        let check = check_trial_balance(&[], DEFAULT_TOLERANCE);
        assert_eq!(check.entry_count, 0);
        assert_eq!(check.difference, Decimal::ZERO);
        assert!(check.is_balanced);
    }

    #[test]
    fn test_combine_periods_sums_by_code() {
        let entries = vec![
            entry("1000", "2023", dec!(100), dec!(10)),
            entry("4000", "2023", dec!(0), dec!(300)),
            entry("1000", "2024", dec!(50), dec!(5)),
        ];

        let combined = combine_periods(&entries);

        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].account_code, "1000");
        assert_eq!(combined[0].debit, dec!(150));
        assert_eq!(combined[0].credit, dec!(15));
        assert_eq!(combined[0].period, COMBINED);
        assert_eq!(combined[1].account_code, "4000");
        assert_eq!(combined[1].credit, dec!(300));
    }

    #[test]
    fn test_entries_for_period() {
        let entries = vec![
            entry("1000", "2023", dec!(100), dec!(0)),
            entry("1000", "2024", dec!(50), dec!(0)),
        ];

        let only_2024 = entries_for_period(&entries, "2024");
        assert_eq!(only_2024.len(), 1);
        assert_eq!(only_2024[0].debit, dec!(50));

        let combined = entries_for_period(&entries, COMBINED);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].debit, dec!(150));

        assert!(entries_for_period(&entries, "2022").is_empty());
    }
}
