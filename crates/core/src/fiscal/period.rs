//! Reporting period resolution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Label of the synthetic period that aggregates every reporting period.
pub const COMBINED: &str = "Combined";

/// How reporting period labels are put in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodOrdering {
    /// Labels sort as strings ("2023" < "2024", "2024-Q1" < "2024-Q2").
    #[default]
    Lexical,
    /// Caller-supplied sequence, oldest first.
    ///
    /// Periods missing from the sequence have no predecessor and are
    /// never the latest period.
    Explicit(Vec<String>),
}

impl PeriodOrdering {
    /// Builds an ordering from an optional explicit sequence.
    #[must_use]
    pub fn from_sequence(sequence: Option<Vec<String>>) -> Self {
        sequence.map_or(Self::Lexical, Self::Explicit)
    }

    /// Returns the distinct real periods in chronological order.
    ///
    /// [`COMBINED`] is always excluded.
    #[must_use]
    pub fn chronological<S: AsRef<str>>(&self, periods: &[S]) -> Vec<String> {
        let present: BTreeSet<&str> = periods
            .iter()
            .map(AsRef::as_ref)
            .filter(|p| *p != COMBINED)
            .collect();

        match self {
            Self::Lexical => present.into_iter().map(str::to_string).collect(),
            Self::Explicit(sequence) => {
                let mut seen = BTreeSet::new();
                sequence
                    .iter()
                    .filter(|p| present.contains(p.as_str()) && seen.insert(p.as_str()))
                    .cloned()
                    .collect()
            }
        }
    }
}

/// Returns the period immediately preceding `current`.
///
/// Returns `None` when `current` is the first period, is absent from
/// `all_periods`, or is [`COMBINED`].
pub fn previous_period<S: AsRef<str>>(
    all_periods: &[S],
    current: &str,
    ordering: &PeriodOrdering,
) -> Option<String> {
    if current == COMBINED {
        return None;
    }
    let sorted = ordering.chronological(all_periods);
    let idx = sorted.iter().position(|p| p == current)?;
    idx.checked_sub(1).map(|prev| sorted[prev].clone())
}

/// Returns the most recent real period, if any.
pub fn latest_period<S: AsRef<str>>(
    all_periods: &[S],
    ordering: &PeriodOrdering,
) -> Option<String> {
    ordering.chronological(all_periods).pop()
}

/// Returns the periods a caller can select, newest first.
///
/// [`COMBINED`] is offered first whenever more than one real period
/// exists. With an explicit ordering, periods it does not list follow the
/// ordered ones so they stay selectable.
pub fn available_periods<S: AsRef<str>>(
    all_periods: &[S],
    ordering: &PeriodOrdering,
) -> Vec<String> {
    let mut ordered = ordering.chronological(all_periods);
    ordered.reverse();

    let unlisted: BTreeSet<&str> = all_periods
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| *p != COMBINED && !ordered.iter().any(|o| o.as_str() == *p))
        .collect();
    ordered.extend(unlisted.into_iter().rev().map(str::to_string));

    if ordered.len() > 1 {
        ordered.insert(0, COMBINED.to_string());
    }
    ordered
}

/// Returns the period selected when the caller has not chosen one.
pub fn default_period<S: AsRef<str>>(
    all_periods: &[S],
    ordering: &PeriodOrdering,
) -> Option<String> {
    available_periods(all_periods, ordering).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn explicit(seq: &[&str]) -> PeriodOrdering {
        PeriodOrdering::Explicit(seq.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_previous_period_lexical() {
        let periods = ["2023", "2024", "2025"];
        let ordering = PeriodOrdering::Lexical;

        assert_eq!(previous_period(&periods, "2024", &ordering), Some("2023".to_string()));
        assert_eq!(previous_period(&periods, "2025", &ordering), Some("2024".to_string()));
        assert_eq!(previous_period(&periods, "2023", &ordering), None);
        assert_eq!(previous_period(&["2023"], "2023", &ordering), None);
        assert_eq!(previous_period(&periods, "2026", &ordering), None);
    }

    #[test]
    fn test_previous_period_ignores_input_order_and_duplicates() {
        let periods = ["2025", "Combined", "2023", "2024", "2023"];
        assert_eq!(
            previous_period(&periods, "2024", &PeriodOrdering::Lexical),
            Some("2023".to_string())
        );
    }

    #[test]
    fn test_previous_period_of_combined_is_none() {
        let periods = ["2023", "2024", COMBINED];
        assert_eq!(previous_period(&periods, COMBINED, &PeriodOrdering::Lexical), None);
    }

    #[test]
    fn test_explicit_ordering_overrides_labels() {
        // Month names do not sort chronologically.
        let periods = ["Jan-2025", "Feb-2025", "Dec-2024"];
        let ordering = explicit(&["Dec-2024", "Jan-2025", "Feb-2025"]);

        assert_eq!(
            previous_period(&periods, "Feb-2025", &ordering),
            Some("Jan-2025".to_string())
        );
        assert_eq!(
            previous_period(&periods, "Feb-2025", &PeriodOrdering::Lexical),
            Some("Dec-2024".to_string())
        );
        assert_eq!(latest_period(&periods, &ordering), Some("Feb-2025".to_string()));
    }

    #[test]
    fn test_explicit_ordering_unlisted_period() {
        let periods = ["2023", "2024", "draft"];
        let ordering = explicit(&["2023", "2024"]);

        assert_eq!(previous_period(&periods, "draft", &ordering), None);
        assert_eq!(latest_period(&periods, &ordering), Some("2024".to_string()));
        assert_eq!(
            available_periods(&periods, &ordering),
            vec!["Combined", "2024", "2023", "draft"]
        );
    }

    #[test]
    fn test_explicit_ordering_skips_absent_periods() {
        let periods = ["2022", "2024"];
        let ordering = explicit(&["2022", "2023", "2024"]);
        assert_eq!(
            previous_period(&periods, "2024", &ordering),
            Some("2022".to_string())
        );
    }

    #[test]
    fn test_latest_period() {
        let ordering = PeriodOrdering::Lexical;
        assert_eq!(latest_period(&["2024", "2025", "2023"], &ordering), Some("2025".to_string()));
        assert_eq!(latest_period(&[COMBINED], &ordering), None);
        assert_eq!(latest_period::<&str>(&[], &ordering), None);
    }

    #[test]
    fn test_available_periods() {
        let ordering = PeriodOrdering::Lexical;
        assert_eq!(
            available_periods(&["2023", "2025", "2024", "2023"], &ordering),
            vec!["Combined", "2025", "2024", "2023"]
        );
        assert_eq!(available_periods(&["2024", "2024"], &ordering), vec!["2024"]);
        assert!(available_periods::<&str>(&[], &ordering).is_empty());
    }

    #[test]
    fn test_default_period() {
        let ordering = PeriodOrdering::Lexical;
        assert_eq!(default_period(&["2023", "2024"], &ordering), Some(COMBINED.to_string()));
        assert_eq!(default_period(&["2024"], &ordering), Some("2024".to_string()));
        assert_eq!(default_period::<&str>(&[], &ordering), None);
    }

    #[test]
    fn test_from_sequence() {
        assert_eq!(PeriodOrdering::from_sequence(None), PeriodOrdering::Lexical);
        assert_eq!(
            PeriodOrdering::from_sequence(Some(vec!["a".into()])),
            explicit(&["a"])
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The previous period always sorts strictly before the current one.
        #[test]
        fn prop_previous_precedes_current(
            years in prop::collection::vec(1990u32..2100, 1..12),
            pick in 0usize..12,
        ) {
            let periods: Vec<String> = years.iter().map(ToString::to_string).collect();
            let current = periods[pick % periods.len()].clone();

            if let Some(prev) = previous_period(&periods, &current, &PeriodOrdering::Lexical) {
                prop_assert!(prev < current);
                prop_assert!(periods.contains(&prev));
                // Nothing lies strictly between the two.
                prop_assert!(!periods.iter().any(|p| *p > prev && *p < current));
            } else {
                prop_assert!(periods.iter().all(|p| *p >= current));
            }
        }
    }
}
