//! Income aggregation shown on the income step and in the review.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{ApplicationState, FieldKey};

/// Derived income figures. Deliberately not floored at zero: a negative
/// net salary is a real shortfall and is displayed as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTotals {
    /// Gross income less bonus/overtime/arrears.
    pub total_income: Decimal,
    /// Total income less the monthly obligation.
    pub net_salary: Decimal,
}

pub fn compute_income_totals(
    gross_income: Decimal,
    bonus: Decimal,
    monthly_obligation: Decimal,
) -> IncomeTotals {
    let total_income = round_half_up(gross_income - bonus);
    let net_salary = round_half_up(total_income - monthly_obligation);
    IncomeTotals {
        total_income,
        net_salary,
    }
}

/// Totals from the captured income fields; absent fields count as zero,
/// matching an untouched input box.
pub fn income_totals_for_state(state: &ApplicationState) -> IncomeTotals {
    let gross = state
        .number(FieldKey::GrossMonthlyIncome)
        .unwrap_or(Decimal::ZERO);
    let bonus = state
        .number(FieldKey::BonusOvertimeArrear)
        .unwrap_or(Decimal::ZERO);
    let obligation = state
        .number(FieldKey::TotalMonthlyObligation)
        .unwrap_or(Decimal::ZERO);
    compute_income_totals(gross, bonus, obligation)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn totals_subtract_bonus_then_obligation() {
        let totals = compute_income_totals(dec!(85000), dec!(5000), dec!(20000));

        assert_eq!(totals.total_income, dec!(80000.00));
        assert_eq!(totals.net_salary, dec!(60000.00));
    }

    #[test]
    fn negative_net_salary_is_preserved() {
        let totals = compute_income_totals(dec!(30000), dec!(0), dec!(45000));

        assert_eq!(totals.net_salary, dec!(-15000.00));
    }

    #[test]
    fn absent_fields_count_as_zero() {
        let state = ApplicationState::default();

        let totals = income_totals_for_state(&state);

        assert_eq!(totals.total_income, dec!(0));
        assert_eq!(totals.net_salary, dec!(0));
    }

    #[test]
    fn state_totals_match_the_pure_function() {
        let mut state = ApplicationState::default();
        state.set_field(FieldKey::GrossMonthlyIncome, dec!(85000));
        state.set_field(FieldKey::BonusOvertimeArrear, dec!(2500.50));
        state.set_field(FieldKey::TotalMonthlyObligation, dec!(11000));

        assert_eq!(
            income_totals_for_state(&state),
            compute_income_totals(dec!(85000), dec!(2500.50), dec!(11000))
        );
    }
}
