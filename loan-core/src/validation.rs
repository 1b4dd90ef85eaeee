//! Per-step validation gating forward transitions.
//!
//! Each step's rules produce at most one message per field (the first
//! failing rule wins) plus an optional banner for failures that are not
//! tied to a single field. A failed validation never aborts anything; the
//! caller stays on the same step and surfaces the report.

use rust_decimal::Decimal;

use crate::models::{ApplicationState, FieldKey, StepId};
use crate::validators;

pub const GENDER_OPTIONS: [&str; 3] = ["male", "female", "other"];
pub const RESIDENCE_TYPE_OPTIONS: [&str; 4] =
    ["owned", "rented", "company_provided", "family_owned"];

/// One inline error, anchored to the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: FieldKey,
    pub message: String,
}

impl FieldError {
    fn new(key: FieldKey, message: &str) -> Self {
        Self {
            key,
            message: message.to_string(),
        }
    }
}

/// Everything a failed step validation wants the user to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub banner: Option<String>,
    pub field_errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.banner.is_none() && self.field_errors.is_empty()
    }

    fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Runs the validator registered for `step` against the current state.
///
/// Offer, FinalApproval and ThankYou have no gate and always pass.
pub fn validate_step(state: &ApplicationState, step: StepId) -> Result<(), ValidationReport> {
    match step {
        StepId::LoanSelection => validate_loan_selection(state),
        StepId::BasicDetails => validate_basic_details(state),
        StepId::PersonalDetails => validate_personal_details(state),
        StepId::IncomeDetails => validate_income_details(state),
        StepId::Offer => Ok(()),
        StepId::DocumentUpload => validate_document_upload(state),
        StepId::FinalReview => validate_final_confirmation(state),
        StepId::FinalApproval | StepId::ThankYou => Ok(()),
    }
}

fn validate_loan_selection(state: &ApplicationState) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();
    if state.selection("loan_type").is_none() {
        report.banner = Some("Please select a loan type to continue".to_string());
    }
    report.into_result()
}

fn validate_basic_details(state: &ApplicationState) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    if state.text(FieldKey::FullName).is_empty() {
        report.field_errors.push(FieldError::new(
            FieldKey::FullName,
            "Please enter your full name",
        ));
    }

    if !validators::is_valid_mobile(state.text(FieldKey::Mobile)) {
        report.field_errors.push(FieldError::new(
            FieldKey::Mobile,
            "Please enter a valid 10-digit mobile number",
        ));
    }

    match state.number(FieldKey::LoanAmount) {
        Some(amount) if amount > Decimal::ZERO => {}
        _ => report.field_errors.push(FieldError::new(
            FieldKey::LoanAmount,
            "Please enter a valid loan amount",
        )),
    }

    if !validators::is_valid_pan(state.text(FieldKey::PanNumber)) {
        report.field_errors.push(FieldError::new(
            FieldKey::PanNumber,
            "Please enter a valid PAN number (e.g., ABCDE1234F)",
        ));
    }

    if !state.flag(FieldKey::AgreeOvd) {
        report.banner = Some("Please agree to validate OVD details".to_string());
    }

    report.into_result()
}

fn validate_personal_details(state: &ApplicationState) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    if state.text(FieldKey::Address).is_empty() {
        report.field_errors.push(FieldError::new(
            FieldKey::Address,
            "Please enter your address",
        ));
    }

    if state.text(FieldKey::Dob).is_empty() {
        report.field_errors.push(FieldError::new(
            FieldKey::Dob,
            "Please select your date of birth",
        ));
    }

    if state.text(FieldKey::FatherName).is_empty() {
        report.field_errors.push(FieldError::new(
            FieldKey::FatherName,
            "Please enter your father's name",
        ));
    }

    if !validators::is_valid_aadhar(state.text(FieldKey::AadharNumber)) {
        report.field_errors.push(FieldError::new(
            FieldKey::AadharNumber,
            "Please enter a valid 12-digit Aadhar number",
        ));
    }

    if !validators::is_valid_email(state.text(FieldKey::Email)) {
        report.field_errors.push(FieldError::new(
            FieldKey::Email,
            "Please enter a valid email address",
        ));
    }

    if !GENDER_OPTIONS.contains(&state.text(FieldKey::Gender)) {
        report.field_errors.push(FieldError::new(
            FieldKey::Gender,
            "Please select your gender",
        ));
    }

    let existing = state.text(FieldKey::ExistingCustomer);
    if existing != "yes" && existing != "no" {
        report.field_errors.push(FieldError::new(
            FieldKey::ExistingCustomer,
            "Please specify if you are an existing customer",
        ));
    }

    if existing == "yes" && state.text(FieldKey::CifNumber).is_empty() {
        report.field_errors.push(FieldError::new(
            FieldKey::CifNumber,
            "Please enter your CIF number",
        ));
    }

    if !RESIDENCE_TYPE_OPTIONS.contains(&state.text(FieldKey::ResidenceType)) {
        report.field_errors.push(FieldError::new(
            FieldKey::ResidenceType,
            "Please select your residence type",
        ));
    }

    match state.number(FieldKey::YearsAtResidence) {
        Some(years) if years >= Decimal::ZERO => {}
        _ => report.field_errors.push(FieldError::new(
            FieldKey::YearsAtResidence,
            "Please enter valid years at current residence",
        )),
    }

    report.into_result()
}

fn validate_income_details(state: &ApplicationState) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    if state.text(FieldKey::EmployerName).is_empty() {
        report.field_errors.push(FieldError::new(
            FieldKey::EmployerName,
            "Please enter your employer name",
        ));
    }

    match state.number(FieldKey::GrossMonthlyIncome) {
        Some(gross) if gross > Decimal::ZERO => {}
        _ => report.field_errors.push(FieldError::new(
            FieldKey::GrossMonthlyIncome,
            "Please enter a valid gross monthly income",
        )),
    }

    match state.number(FieldKey::TotalMonthlyObligation) {
        Some(obligation) if obligation >= Decimal::ZERO => {}
        _ => report.field_errors.push(FieldError::new(
            FieldKey::TotalMonthlyObligation,
            "Please enter valid total monthly obligation",
        )),
    }

    match state.number(FieldKey::YearsAtEmployer) {
        Some(years) if years >= Decimal::ZERO => {}
        _ => report.field_errors.push(FieldError::new(
            FieldKey::YearsAtEmployer,
            "Please enter valid years at current employer",
        )),
    }

    if !validators::is_valid_email(state.text(FieldKey::OfficialEmailId)) {
        report.field_errors.push(FieldError::new(
            FieldKey::OfficialEmailId,
            "Please enter a valid official email address",
        ));
    }

    report.into_result()
}

fn validate_document_upload(state: &ApplicationState) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();
    let remaining = state.uploaded_documents.remaining_count();
    if remaining > 0 {
        report.banner = Some(format!(
            "Please upload all required documents. {remaining} documents remaining."
        ));
    }
    report.into_result()
}

fn validate_final_confirmation(state: &ApplicationState) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();
    if !state.flag(FieldKey::FinalConfirmation) {
        report.banner =
            Some("Please confirm that all information is accurate and complete.".to_string());
    }
    report.into_result()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{DocumentId, DocumentMeta};

    fn meta(name: &str) -> DocumentMeta {
        DocumentMeta {
            name: name.to_string(),
            size_bytes: 120_000,
            mime_type: "application/pdf".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    fn state_with_valid_basic_details() -> ApplicationState {
        let mut state = ApplicationState::default();
        state.set_field(FieldKey::FullName, "John Doe");
        state.set_field(FieldKey::Mobile, "9876543210");
        state.set_field(FieldKey::LoanAmount, dec!(500000));
        state.set_field(FieldKey::PanNumber, "ABCDE1234F");
        state.set_field(FieldKey::AgreeOvd, true);
        state
    }

    #[test]
    fn loan_selection_requires_a_chosen_type() {
        let mut state = ApplicationState::default();

        let report = validate_step(&state, StepId::LoanSelection).unwrap_err();
        assert_eq!(
            report.banner.as_deref(),
            Some("Please select a loan type to continue")
        );

        state.set_selection("loan_type", "car");
        assert!(validate_step(&state, StepId::LoanSelection).is_ok());
    }

    #[test]
    fn basic_details_passes_with_valid_fields() {
        let state = state_with_valid_basic_details();
        assert!(validate_step(&state, StepId::BasicDetails).is_ok());
    }

    #[test]
    fn basic_details_reports_first_failing_rule_per_field() {
        let mut state = state_with_valid_basic_details();
        state.set_field(FieldKey::Mobile, "1234567890");
        state.set_field(FieldKey::LoanAmount, dec!(0));

        let report = validate_step(&state, StepId::BasicDetails).unwrap_err();

        let keys: Vec<FieldKey> = report.field_errors.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![FieldKey::Mobile, FieldKey::LoanAmount]);
        assert_eq!(
            report.field_errors[0].message,
            "Please enter a valid 10-digit mobile number"
        );
        assert!(report.banner.is_none());
    }

    #[test]
    fn missing_ovd_agreement_is_a_banner_not_a_field_error() {
        let mut state = state_with_valid_basic_details();
        state.set_field(FieldKey::AgreeOvd, false);

        let report = validate_step(&state, StepId::BasicDetails).unwrap_err();
        assert_eq!(
            report.banner.as_deref(),
            Some("Please agree to validate OVD details")
        );
        assert!(report.field_errors.is_empty());
    }

    fn state_with_valid_personal_details() -> ApplicationState {
        let mut state = ApplicationState::default();
        state.set_field(FieldKey::Address, "12 MG Road, Pune");
        state.set_field(FieldKey::Dob, "1990-04-12");
        state.set_field(FieldKey::FatherName, "Richard Doe");
        state.set_field(FieldKey::AadharNumber, "1234 5678 9012");
        state.set_field(FieldKey::Email, "john@example.com");
        state.set_field(FieldKey::Gender, "male");
        state.set_field(FieldKey::ExistingCustomer, "no");
        state.set_field(FieldKey::ResidenceType, "owned");
        state.set_field(FieldKey::YearsAtResidence, dec!(4));
        state
    }

    #[test]
    fn personal_details_passes_with_valid_fields() {
        let state = state_with_valid_personal_details();
        assert!(validate_step(&state, StepId::PersonalDetails).is_ok());
    }

    #[test]
    fn cif_is_required_only_for_existing_customers() {
        let mut state = state_with_valid_personal_details();
        state.set_field(FieldKey::ExistingCustomer, "yes");

        let report = validate_step(&state, StepId::PersonalDetails).unwrap_err();
        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(report.field_errors[0].key, FieldKey::CifNumber);

        state.set_field(FieldKey::CifNumber, "CIF0042");
        assert!(validate_step(&state, StepId::PersonalDetails).is_ok());
    }

    #[test]
    fn gender_and_residence_must_come_from_the_enumerated_options() {
        let mut state = state_with_valid_personal_details();
        state.set_field(FieldKey::Gender, "unspecified");
        state.set_field(FieldKey::ResidenceType, "houseboat");

        let report = validate_step(&state, StepId::PersonalDetails).unwrap_err();
        let keys: Vec<FieldKey> = report.field_errors.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![FieldKey::Gender, FieldKey::ResidenceType]);
    }

    #[test]
    fn years_at_residence_allows_zero_but_not_negative() {
        let mut state = state_with_valid_personal_details();
        state.set_field(FieldKey::YearsAtResidence, dec!(0));
        assert!(validate_step(&state, StepId::PersonalDetails).is_ok());

        state.set_field(FieldKey::YearsAtResidence, dec!(-1));
        assert!(validate_step(&state, StepId::PersonalDetails).is_err());
    }

    #[test]
    fn income_details_gate_checks_every_field() {
        let mut state = ApplicationState::default();
        state.set_field(FieldKey::EmployerName, "Acme Pvt Ltd");
        state.set_field(FieldKey::GrossMonthlyIncome, dec!(85000));
        state.set_field(FieldKey::TotalMonthlyObligation, dec!(0));
        state.set_field(FieldKey::YearsAtEmployer, dec!(3));
        state.set_field(FieldKey::OfficialEmailId, "john@acme.co.in");

        assert!(validate_step(&state, StepId::IncomeDetails).is_ok());

        state.set_field(FieldKey::GrossMonthlyIncome, dec!(0));
        let report = validate_step(&state, StepId::IncomeDetails).unwrap_err();
        assert_eq!(report.field_errors[0].key, FieldKey::GrossMonthlyIncome);
    }

    #[test]
    fn offer_step_always_passes() {
        let state = ApplicationState::default();
        assert!(validate_step(&state, StepId::Offer).is_ok());
    }

    #[test]
    fn document_upload_reports_remaining_count() {
        let mut state = ApplicationState::default();
        for id in [
            DocumentId::BankStatement,
            DocumentId::DealerInvoice,
            DocumentId::GstDoc,
        ] {
            state
                .uploaded_documents
                .record(id.as_str(), meta("doc.pdf"))
                .unwrap();
        }

        let report = validate_step(&state, StepId::DocumentUpload).unwrap_err();
        assert_eq!(
            report.banner.as_deref(),
            Some("Please upload all required documents. 1 documents remaining.")
        );

        state
            .uploaded_documents
            .record(DocumentId::ItrDoc.as_str(), meta("itr.pdf"))
            .unwrap();
        assert!(validate_step(&state, StepId::DocumentUpload).is_ok());
    }

    #[test]
    fn final_review_requires_the_confirmation_checkbox() {
        let mut state = ApplicationState::default();
        assert!(validate_step(&state, StepId::FinalReview).is_err());

        state.set_field(FieldKey::FinalConfirmation, true);
        assert!(validate_step(&state, StepId::FinalReview).is_ok());
    }
}
