//! The single mutable aggregate behind the wizard.
//!
//! Everything the user has entered lives here: the current step, the raw
//! field captures, the per-group selections, the denormalized loan numbers
//! and the uploaded-document ledger. The whole struct is the unit of
//! persistence; there is no partial save.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::documents::DocumentSet;
use crate::models::{FieldKey, FieldValue, StepId};

/// Version tag written into every new snapshot.
///
/// Legacy payloads carry no tag; `serde(default)` fills version 1 for them,
/// which parses identically today. An incompatible change bumps this and
/// branches on the stored value.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_loan_amount() -> Decimal {
    Decimal::new(1_000_000, 0)
}

fn default_interest_rate() -> Decimal {
    Decimal::new(85, 1)
}

fn default_tenure_months() -> u32 {
    84
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub step: StepId,

    /// Raw field captures keyed by field identifier. Keys outside the
    /// [`FieldKey`] set are preserved verbatim but never interpreted.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,

    /// One chosen value per selection group; re-selecting overwrites.
    #[serde(default)]
    pub selections: BTreeMap<String, String>,

    #[serde(default = "default_loan_amount")]
    pub loan_amount: Decimal,

    /// Percent per annum.
    #[serde(default = "default_interest_rate")]
    pub interest_rate: Decimal,

    #[serde(default = "default_tenure_months")]
    pub tenure_months: u32,

    #[serde(default)]
    pub uploaded_documents: DocumentSet,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            step: StepId::LoanSelection,
            fields: BTreeMap::new(),
            selections: BTreeMap::new(),
            loan_amount: default_loan_amount(),
            interest_rate: default_interest_rate(),
            tenure_months: default_tenure_months(),
            uploaded_documents: DocumentSet::default(),
        }
    }
}

impl ApplicationState {
    /// Records a field capture, mirroring the canonical loan numbers into
    /// the denormalized aggregates. Idempotent; always succeeds.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<FieldValue>) {
        let value = value.into();
        match key {
            FieldKey::LoanAmount => {
                if let Some(amount) = value.as_number() {
                    self.loan_amount = amount;
                }
            }
            FieldKey::InterestRate => {
                if let Some(rate) = value.as_number() {
                    self.interest_rate = rate;
                }
            }
            FieldKey::Tenure => {
                if let Some(months) = value.as_number().and_then(|m| m.trunc().to_u32()) {
                    self.tenure_months = months;
                }
            }
            _ => {}
        }
        self.fields.insert(key.as_str().to_string(), value);
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldValue> {
        self.fields.get(key.as_str())
    }

    /// Trimmed text of a field, empty string when absent or not text.
    pub fn text(&self, key: FieldKey) -> &str {
        self.field(key)
            .and_then(FieldValue::as_text)
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn number(&self, key: FieldKey) -> Option<Decimal> {
        self.field(key).and_then(FieldValue::as_number)
    }

    pub fn flag(&self, key: FieldKey) -> bool {
        self.field(key).is_some_and(FieldValue::as_flag)
    }

    pub fn set_selection(&mut self, group: &str, choice: &str) {
        self.selections
            .insert(group.to_string(), choice.to_string());
    }

    pub fn selection(&self, group: &str) -> Option<&str> {
        self.selections.get(group).map(String::as_str)
    }

    /// Atomic, total reset back to construction-time defaults.
    pub fn reset(&mut self) {
        *self = ApplicationState::default();
    }
}
