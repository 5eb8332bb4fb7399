//! Reporting period ordering and comparative resolution.

pub mod period;

pub use period::{
    COMBINED, PeriodOrdering, available_periods, default_period, latest_period, previous_period,
};
