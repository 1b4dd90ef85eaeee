//! Canned help assistant.
//!
//! Suggestions track the current step; the refresh runs as a wizard
//! post-transition hook rather than by wrapping the display routine.

use loan_core::models::StepId;

/// Help topics worth offering on a given step.
pub fn suggestions_for(step: StepId) -> &'static [&'static str] {
    match step {
        StepId::BasicDetails => &["PAN format help", "Mobile verification", "Loan amount tips"],
        StepId::PersonalDetails => &["Address format", "Aadhar verification", "Residence proof"],
        StepId::IncomeDetails => &[
            "Income calculation",
            "Document requirements",
            "Employment verification",
        ],
        StepId::Offer => &["EMI calculation", "Interest rates", "Tenure options"],
        StepId::DocumentUpload => &[
            "Document upload requirements",
            "File format and size",
            "Check uploaded documents",
        ],
        StepId::FinalReview => &[
            "Review my application",
            "Make changes to my details",
            "Confirm application details",
        ],
        _ => &["Fill Form", "Documents", "EMI Calculation", "Eligibility"],
    }
}

/// Answers a question from the fixed Q&A set; anything unrecognized gets
/// the generic pointer.
pub fn answer(question: &str) -> &'static str {
    match question.trim() {
        "How do I fill the form?" => {
            "Simply follow the 4-step process: 1) Enter basic details like name and mobile \
             2) Provide personal information 3) Add income details 4) Review your loan offer. \
             The form saves your progress automatically!"
        }
        "What documents do I need?" => {
            "You'll need to upload: Bank Statement (last 3 months), Dealer Invoice, GST \
             documents, and ITR. All documents should be in PDF, JPG, or PNG format, max 5MB \
             each."
        }
        "How is EMI calculated?" => {
            "EMI = [P x R x (1+R)^N] / [(1+R)^N-1], where P=Principal amount, R=Monthly \
             interest rate, N=Tenure in months. You can adjust the tenure to see different \
             EMI amounts."
        }
        "What are the eligibility criteria?" => {
            "You should be 21-65 years old, have a stable income, good credit score \
             (preferably 650+), and provide all required documents. The system will evaluate \
             your application automatically."
        }
        _ => {
            "I can help you with form filling, document requirements, EMI calculations, and \
             eligibility criteria. Feel free to ask me anything about the loan process!"
        }
    }
}

/// Hook body: prints the refreshed suggestion list.
pub fn print_suggestions(step: StepId) {
    let topics = suggestions_for(step);
    println!("  (assistant) try asking: {}", topics.join(" | "));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn suggestions_follow_the_step() {
        assert_eq!(
            suggestions_for(StepId::Offer),
            &["EMI calculation", "Interest rates", "Tenure options"]
        );
        assert_eq!(suggestions_for(StepId::LoanSelection).len(), 4);
    }

    #[test]
    fn unknown_questions_get_the_generic_answer() {
        let generic = answer("what is the meaning of life?");
        assert!(generic.starts_with("I can help you"));
        assert!(answer("How is EMI calculated?").contains("Tenure in months"));
    }
}
