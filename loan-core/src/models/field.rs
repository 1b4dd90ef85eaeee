use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of form fields the application understands.
///
/// The string forms are the field identifiers shared with the persisted
/// snapshot and the view layer. Legacy snapshots may carry keys outside
/// this set; those are kept verbatim in the state map but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKey {
    FullName,
    Mobile,
    LoanAmount,
    PanNumber,
    AgreeOvd,
    Address,
    Dob,
    FatherName,
    AadharNumber,
    Email,
    Gender,
    ExistingCustomer,
    CifNumber,
    ResidenceType,
    YearsAtResidence,
    EmployerName,
    GrossMonthlyIncome,
    BonusOvertimeArrear,
    TotalIncome,
    TotalMonthlyObligation,
    NetMonthlySalary,
    YearsAtEmployer,
    OfficialEmailId,
    InterestRate,
    Tenure,
    FinalConfirmation,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Mobile => "mobile",
            Self::LoanAmount => "loanAmount",
            Self::PanNumber => "panNumber",
            Self::AgreeOvd => "agreeOVD",
            Self::Address => "address",
            Self::Dob => "dob",
            Self::FatherName => "fatherName",
            Self::AadharNumber => "aadharNumber",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::ExistingCustomer => "existingCustomer",
            Self::CifNumber => "cifNumber",
            Self::ResidenceType => "residenceType",
            Self::YearsAtResidence => "yearsAtResidence",
            Self::EmployerName => "employerName",
            Self::GrossMonthlyIncome => "grossMonthlyIncome",
            Self::BonusOvertimeArrear => "bonusOvertimeArrear",
            Self::TotalIncome => "totalIncome",
            Self::TotalMonthlyObligation => "totalMonthlyObligation",
            Self::NetMonthlySalary => "netMonthlySalary",
            Self::YearsAtEmployer => "yearsAtEmployer",
            Self::OfficialEmailId => "officialEmailID",
            Self::InterestRate => "interestRate",
            Self::Tenure => "tenure",
            Self::FinalConfirmation => "finalConfirmation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fullName" => Some(Self::FullName),
            "mobile" => Some(Self::Mobile),
            "loanAmount" => Some(Self::LoanAmount),
            "panNumber" => Some(Self::PanNumber),
            "agreeOVD" => Some(Self::AgreeOvd),
            "address" => Some(Self::Address),
            "dob" => Some(Self::Dob),
            "fatherName" => Some(Self::FatherName),
            "aadharNumber" => Some(Self::AadharNumber),
            "email" => Some(Self::Email),
            "gender" => Some(Self::Gender),
            "existingCustomer" => Some(Self::ExistingCustomer),
            "cifNumber" => Some(Self::CifNumber),
            "residenceType" => Some(Self::ResidenceType),
            "yearsAtResidence" => Some(Self::YearsAtResidence),
            "employerName" => Some(Self::EmployerName),
            "grossMonthlyIncome" => Some(Self::GrossMonthlyIncome),
            "bonusOvertimeArrear" => Some(Self::BonusOvertimeArrear),
            "totalIncome" => Some(Self::TotalIncome),
            "totalMonthlyObligation" => Some(Self::TotalMonthlyObligation),
            "netMonthlySalary" => Some(Self::NetMonthlySalary),
            "yearsAtEmployer" => Some(Self::YearsAtEmployer),
            "officialEmailID" => Some(Self::OfficialEmailId),
            "interestRate" => Some(Self::InterestRate),
            "tenure" => Some(Self::Tenure),
            "finalConfirmation" => Some(Self::FinalConfirmation),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A captured field value.
///
/// Serialized as the bare JSON scalar so the snapshot stays interchangeable
/// with the legacy payload. The serde impls are written by hand: the variant
/// is decided by the JSON type alone, so a digit-only string stays `Text`
/// through a persist/restore cycle instead of being re-read as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Flag(bool),
    Number(Decimal),
    Text(String),
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Flag(b) => serializer.serialize_bool(*b),
            Self::Number(n) => {
                // Whole amounts write as plain integers, the shape the
                // legacy payload used.
                if n.scale() == 0 {
                    if let Some(i) = n.to_i64() {
                        return serializer.serialize_i64(i);
                    }
                }
                match n.to_f64() {
                    Some(f) => serializer.serialize_f64(f),
                    None => Err(serde::ser::Error::custom("unrepresentable number")),
                }
            }
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean, number or string")
            }

            fn visit_bool<E>(self, v: bool) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Flag(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(Decimal::from(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Number(Decimal::from(v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Decimal::try_from(v)
                    .map(FieldValue::Number)
                    .map_err(E::custom)
            }

            fn visit_str<E>(self, v: &str) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Ok(FieldValue::Text(v))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the value; text is parsed leniently so `"500000"`
    /// captured from an input box still counts.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Decimal> for FieldValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}
