//! Stdout rendering of the wizard.
//!
//! The controller drives a [`WizardView`]; this implementation writes each
//! callback to the terminal. It holds no state of its own beyond the inline
//! error list currently on display.

use loan_core::calculations::{emi_for_state, income_totals_for_state};
use loan_core::models::{ApplicationState, DocumentId, FieldKey, StepId};
use loan_core::wizard::{MessageKind, WizardView};

use crate::export::review_rows;
use crate::utils::format_inr;

/// Fields captured on each step, in display order. Used for the
/// field listing under a step heading and for input hints.
pub fn step_fields(step: StepId) -> &'static [FieldKey] {
    match step {
        StepId::BasicDetails => &[
            FieldKey::FullName,
            FieldKey::Mobile,
            FieldKey::LoanAmount,
            FieldKey::PanNumber,
            FieldKey::AgreeOvd,
        ],
        StepId::PersonalDetails => &[
            FieldKey::Address,
            FieldKey::Dob,
            FieldKey::FatherName,
            FieldKey::AadharNumber,
            FieldKey::Email,
            FieldKey::Gender,
            FieldKey::ExistingCustomer,
            FieldKey::CifNumber,
            FieldKey::ResidenceType,
            FieldKey::YearsAtResidence,
        ],
        StepId::IncomeDetails => &[
            FieldKey::EmployerName,
            FieldKey::GrossMonthlyIncome,
            FieldKey::BonusOvertimeArrear,
            FieldKey::TotalMonthlyObligation,
            FieldKey::YearsAtEmployer,
            FieldKey::OfficialEmailId,
        ],
        StepId::Offer => &[FieldKey::InterestRate, FieldKey::Tenure],
        StepId::FinalReview => &[FieldKey::FinalConfirmation],
        _ => &[],
    }
}

#[derive(Default)]
pub struct ConsoleView {
    shown_errors: Vec<FieldKey>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_fields(&self, step: StepId, state: &ApplicationState) {
        for key in step_fields(step) {
            let value = state
                .field(*key)
                .map(|v| match v {
                    loan_core::models::FieldValue::Flag(true) => "yes".to_string(),
                    loan_core::models::FieldValue::Flag(false) => "no".to_string(),
                    loan_core::models::FieldValue::Number(n) => n.to_string(),
                    loan_core::models::FieldValue::Text(s) => s.clone(),
                })
                .unwrap_or_else(|| "<empty>".to_string());
            println!("  {key}: {value}");
        }
    }
}

impl WizardView for ConsoleView {
    fn render_step(&mut self, step: StepId, state: &ApplicationState) {
        println!();
        println!("== {} ==", step.label());

        match step {
            StepId::LoanSelection => {
                println!("  Choose your loan to get started.");
                for (group, choice) in &state.selections {
                    println!("  {group}: {choice}");
                }
            }
            StepId::Offer => {
                println!(
                    "  Loan Amount: Rs. {}  Rate: {}% p.a.  Tenure: {} months",
                    format_inr(state.loan_amount),
                    state.interest_rate,
                    state.tenure_months
                );
                match emi_for_state(state) {
                    Ok(quote) => {
                        println!("  EMI: Rs. {} per month", format_inr(quote.monthly_payment));
                    }
                    Err(e) => println!("  EMI: N/A ({e})"),
                }
                self.print_fields(step, state);
            }
            StepId::IncomeDetails => {
                self.print_fields(step, state);
                let totals = income_totals_for_state(state);
                println!("  Total Income: Rs. {}", format_inr(totals.total_income));
                println!("  Net Monthly Salary: Rs. {}", format_inr(totals.net_salary));
            }
            StepId::DocumentUpload => {
                for id in DocumentId::ALL {
                    let mark = if state.uploaded_documents.contains(id) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    println!("  {mark} {} ({})", id.label(), id);
                }
            }
            StepId::FinalReview => {
                for (label, value) in review_rows(state) {
                    println!("  {label}: {value}");
                }
                println!("  Confirm with `set finalConfirmation yes`, then `next` to submit.");
            }
            StepId::FinalApproval => {
                println!("  Your application has received in-principal approval.");
            }
            StepId::ThankYou => {
                println!("  Thank you! Your application has been submitted.");
                println!("  Use `export <path>` to download the application form.");
            }
            _ => self.print_fields(step, state),
        }
    }

    fn render_progress(&mut self, step: StepId) {
        if !step.shows_progress() {
            return;
        }
        let marks: Vec<&str> = (1..6)
            .map(|i| if u8::from(step) >= i { "●" } else { "○" })
            .collect();
        println!("  progress: {}  (step {} of 5)", marks.join(" "), step.index());
    }

    fn show_field_error(&mut self, key: FieldKey, message: &str) {
        self.shown_errors.push(key);
        println!("  ! {key}: {message}");
    }

    fn clear_field_errors(&mut self) {
        self.shown_errors.clear();
    }

    fn show_transient(&mut self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Success => println!("  ✓ {text}"),
            MessageKind::Error => println!("  ✗ {text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_form_step_lists_its_fields() {
        assert_eq!(step_fields(StepId::BasicDetails).len(), 5);
        assert_eq!(step_fields(StepId::PersonalDetails).len(), 10);
        assert!(step_fields(StepId::ThankYou).is_empty());
    }

    #[test]
    fn field_errors_accumulate_until_cleared() {
        let mut view = ConsoleView::new();
        view.show_field_error(FieldKey::Mobile, "bad number");
        view.show_field_error(FieldKey::PanNumber, "bad pan");
        assert_eq!(view.shown_errors.len(), 2);

        view.clear_field_errors();
        assert!(view.shown_errors.is_empty());
    }
}
