//! Review projection and plain-text application form.
//!
//! Both surfaces read the same snapshot: the review screen shows the
//! flattened rows, the export writes them into a bank-style text form.

use chrono::Utc;
use loan_core::calculations::{emi_for_state, income_totals_for_state};
use loan_core::models::{ApplicationState, DocumentId, FieldKey};

use crate::utils::format_inr;

/// Label/value rows for the final review, in fixed section order.
pub fn review_rows(state: &ApplicationState) -> Vec<(String, String)> {
    let mut rows = Vec::new();

    for (group, choice) in &state.selections {
        rows.push((title_case(group), choice.clone()));
    }

    rows.push(("Full Name".into(), text_or_na(state, FieldKey::FullName)));
    rows.push(("Mobile".into(), text_or_na(state, FieldKey::Mobile)));
    rows.push((
        "Loan Amount".into(),
        format!("Rs. {}", format_inr(state.loan_amount)),
    ));
    rows.push(("PAN Number".into(), text_or_na(state, FieldKey::PanNumber)));

    rows.push(("Address".into(), text_or_na(state, FieldKey::Address)));
    rows.push(("Date of Birth".into(), text_or_na(state, FieldKey::Dob)));
    rows.push(("Father Name".into(), text_or_na(state, FieldKey::FatherName)));
    rows.push((
        "Aadhar Number".into(),
        text_or_na(state, FieldKey::AadharNumber),
    ));
    rows.push(("Email".into(), text_or_na(state, FieldKey::Email)));
    rows.push(("Gender".into(), text_or_na(state, FieldKey::Gender)));
    rows.push((
        "Existing Customer".into(),
        text_or_na(state, FieldKey::ExistingCustomer),
    ));
    rows.push((
        "Residence Type".into(),
        text_or_na(state, FieldKey::ResidenceType),
    ));

    rows.push((
        "Employer Name".into(),
        text_or_na(state, FieldKey::EmployerName),
    ));
    let totals = income_totals_for_state(state);
    rows.push((
        "Gross Monthly Income".into(),
        money_or_na(state, FieldKey::GrossMonthlyIncome),
    ));
    rows.push((
        "Total Income".into(),
        format!("Rs. {}", format_inr(totals.total_income)),
    ));
    rows.push((
        "Net Monthly Salary".into(),
        format!("Rs. {}", format_inr(totals.net_salary)),
    ));

    rows.push((
        "Rate of Interest".into(),
        format!("{}% p.a.", state.interest_rate),
    ));
    rows.push(("Tenure".into(), format!("{} months", state.tenure_months)));
    rows.push(("EMI".into(), emi_text(state)));

    rows.push((
        "Documents Uploaded".into(),
        format!("{} of {}", 4 - state.uploaded_documents.remaining_count(), 4),
    ));

    rows
}

/// The downloadable application form, rendered as plain text.
pub fn application_form_text(state: &ApplicationState) -> String {
    let today = Utc::now();
    let reference = today.format("LA%Y%m%d01");
    let date = today.format("%d/%m/%Y");

    let mut out = format!(
        "LOAN APPLICATION FORM\n\
         =====================\n\
         \n\
         Reference Number: {reference}\n\
         Application Date: {date}\n\
         Application Status: In-Principal Approval Received\n\
         \n\
         LOAN SELECTION\n\
         =============="
    );

    for (group, choice) in &state.selections {
        out.push_str(&format!("\n{}: {}", title_case(group), choice));
    }

    out.push_str(&format!(
        "\n\nBASIC DETAILS\n\
         =============\n\
         Full Name: {}\n\
         Mobile: {}\n\
         Loan Amount: Rs. {}\n\
         PAN Number: {}",
        text_or_na(state, FieldKey::FullName),
        text_or_na(state, FieldKey::Mobile),
        format_inr(state.loan_amount),
        text_or_na(state, FieldKey::PanNumber),
    ));

    out.push_str(&format!(
        "\n\nPERSONAL DETAILS\n\
         ================\n\
         Address: {}\n\
         Date of Birth: {}\n\
         Father Name: {}\n\
         Aadhar Number: {}\n\
         Email: {}\n\
         Gender: {}\n\
         Existing Customer: {}\n\
         CIF Number: {}\n\
         Residence Type: {}\n\
         Years at Current Residence: {}",
        text_or_na(state, FieldKey::Address),
        text_or_na(state, FieldKey::Dob),
        text_or_na(state, FieldKey::FatherName),
        text_or_na(state, FieldKey::AadharNumber),
        text_or_na(state, FieldKey::Email),
        text_or_na(state, FieldKey::Gender),
        text_or_na(state, FieldKey::ExistingCustomer),
        text_or_na(state, FieldKey::CifNumber),
        text_or_na(state, FieldKey::ResidenceType),
        text_or_na(state, FieldKey::YearsAtResidence),
    ));

    let totals = income_totals_for_state(state);
    out.push_str(&format!(
        "\n\nINCOME DETAILS\n\
         ==============\n\
         Employer Name: {}\n\
         Gross Monthly Income: Rs. {}\n\
         Less: Bonus/Overtime/Arrear: Rs. {}\n\
         Total Income: Rs. {}\n\
         Total Monthly Obligation: Rs. {}\n\
         Net Monthly Salary: Rs. {}\n\
         Years at Current Employer: {}\n\
         Official Email ID: {}",
        text_or_na(state, FieldKey::EmployerName),
        money_or_na_bare(state, FieldKey::GrossMonthlyIncome),
        state
            .number(FieldKey::BonusOvertimeArrear)
            .map(format_inr)
            .unwrap_or_else(|| "0".into()),
        format_inr(totals.total_income),
        money_or_na_bare(state, FieldKey::TotalMonthlyObligation),
        format_inr(totals.net_salary),
        text_or_na(state, FieldKey::YearsAtEmployer),
        text_or_na(state, FieldKey::OfficialEmailId),
    ));

    out.push_str(&format!(
        "\n\nLOAN OFFER DETAILS\n\
         ==================\n\
         Loan Amount: Rs. {}\n\
         Rate of Interest: {}% p.a.\n\
         Tenure: {} months\n\
         Processing Charges: Rs. 1,180\n\
         Login Fee + GST: Rs. 1,180\n\
         EMI: {}",
        format_inr(state.loan_amount),
        state.interest_rate,
        state.tenure_months,
        emi_text(state),
    ));

    out.push_str("\n\nDOCUMENT UPLOAD STATUS\n======================");
    for id in DocumentId::ALL {
        let status = if state.uploaded_documents.contains(id) {
            "Uploaded"
        } else {
            "Not Uploaded"
        };
        out.push_str(&format!("\n{}: {}", id.label(), status));
    }

    out.push_str(&format!(
        "\n\nDECLARATION\n\
         ===========\n\
         I hereby declare that the information provided above is true and correct to the best of my knowledge.\n\
         I authorize the bank to verify the information and process my loan application accordingly.\n\
         \n\
         Applicant Signature: _____________________\n\
         Date: {date}\n\
         \n\
         ---\n\
         This is a system-generated application form.\n\
         For any queries, please contact our customer service.\n"
    ));

    out
}

fn emi_text(state: &ApplicationState) -> String {
    match emi_for_state(state) {
        Ok(quote) => format!("Rs. {} per month", format_inr(quote.monthly_payment)),
        Err(_) => "N/A".to_string(),
    }
}

fn text_or_na(state: &ApplicationState, key: FieldKey) -> String {
    let text = state.text(key);
    if text.is_empty() {
        "N/A".to_string()
    } else {
        text.to_string()
    }
}

fn money_or_na(state: &ApplicationState, key: FieldKey) -> String {
    state
        .number(key)
        .map(|n| format!("Rs. {}", format_inr(n)))
        .unwrap_or_else(|| "N/A".into())
}

fn money_or_na_bare(state: &ApplicationState, key: FieldKey) -> String {
    state
        .number(key)
        .map(format_inr)
        .unwrap_or_else(|| "N/A".into())
}

/// `loan_type` becomes `Loan Type`.
fn title_case(group: &str) -> String {
    group
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
