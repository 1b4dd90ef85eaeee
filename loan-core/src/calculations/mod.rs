//! Derived-value calculations.
//!
//! Pure and deterministic: both the live offer display and the review/export
//! projection call these same functions, so the two can never disagree on a
//! figure for identical inputs.

pub mod common;
pub mod emi;
pub mod income;

pub use emi::{EmiError, EmiQuote, compute_emi, emi_for_state};
pub use income::{IncomeTotals, compute_income_totals, income_totals_for_state};
