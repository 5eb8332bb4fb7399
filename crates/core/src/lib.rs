//! Core statement derivation for Mizan.
//!
//! This crate contains pure derivation logic with ZERO file, web or database
//! dependencies. Every statement is a deterministic function of the
//! classified accounts passed in.
//!
//! # Modules
//!
//! - `ledger` - Trial balance entries, classification and aggregation
//! - `fiscal` - Reporting period ordering and comparatives
//! - `reports` - Statement builders and assembly

pub mod fiscal;
pub mod ledger;
pub mod reports;

#[cfg(test)]
mod fixtures;
