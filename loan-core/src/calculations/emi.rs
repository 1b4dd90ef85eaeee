//! Equated Monthly Installment (EMI) calculation.
//!
//! `EMI = P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate
//! (annual percent / 100 / 12) and `n` the tenure in months.
//!
//! Degenerate inputs never surface as NaN or infinity: a zero tenure or a
//! non-positive principal yields an explicit error the caller renders as a
//! placeholder, and a zero rate collapses to the interest-free `P / n`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use loan_core::calculations::compute_emi;
//!
//! let quote = compute_emi(dec!(1000000), dec!(8.5), 84).unwrap();
//! assert_eq!(quote.monthly_payment, dec!(15836));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_rupee;
use crate::models::ApplicationState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmiError {
    /// Division by `(1+r)^0 − 1`; there is no installment over zero months.
    #[error("EMI is undefined for a zero-month tenure")]
    ZeroTenure,

    /// A loan of nothing (or less) has no installment.
    #[error("EMI is undefined for a non-positive principal")]
    NonPositivePrincipal,

    /// The compounding factor overflowed; tenures this long are not
    /// quotable.
    #[error("tenure too long to quote")]
    TenureTooLong,
}

/// A priced installment offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiQuote {
    /// Whole-rupee monthly installment.
    pub monthly_payment: Decimal,
    /// The monthly rate used, `annual percent / 100 / 12`.
    pub monthly_rate: Decimal,
}

/// Prices the installment for a principal, annual percentage rate and
/// tenure in months.
pub fn compute_emi(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_months: u32,
) -> Result<EmiQuote, EmiError> {
    if principal <= Decimal::ZERO {
        return Err(EmiError::NonPositivePrincipal);
    }
    if tenure_months == 0 {
        return Err(EmiError::ZeroTenure);
    }

    let monthly_rate = annual_rate_percent / Decimal::from(1200);

    // Zero-interest: numerator and denominator both collapse, so the
    // installment is the plain principal split.
    if monthly_rate.is_zero() {
        return Ok(EmiQuote {
            monthly_payment: round_rupee(principal / Decimal::from(tenure_months)),
            monthly_rate,
        });
    }

    let factor = (Decimal::ONE + monthly_rate)
        .checked_powi(i64::from(tenure_months))
        .ok_or(EmiError::TenureTooLong)?;
    let emi = principal * monthly_rate * factor / (factor - Decimal::ONE);

    Ok(EmiQuote {
        monthly_payment: round_rupee(emi),
        monthly_rate,
    })
}

/// Prices the offer for the application's current loan numbers.
pub fn emi_for_state(state: &ApplicationState) -> Result<EmiQuote, EmiError> {
    compute_emi(state.loan_amount, state.interest_rate, state.tenure_months)
}
