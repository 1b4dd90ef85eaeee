use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The documents an application must carry before it can be submitted.
///
/// This set is closed: uploads under other identifiers are stored but do
/// not count towards completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentId {
    BankStatement,
    DealerInvoice,
    GstDoc,
    ItrDoc,
}

impl DocumentId {
    pub const ALL: [DocumentId; 4] = [
        DocumentId::BankStatement,
        DocumentId::DealerInvoice,
        DocumentId::GstDoc,
        DocumentId::ItrDoc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankStatement => "bankStatement",
            Self::DealerInvoice => "dealerInvoice",
            Self::GstDoc => "gstDoc",
            Self::ItrDoc => "itrDoc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bankStatement" => Some(Self::BankStatement),
            "dealerInvoice" => Some(Self::DealerInvoice),
            "gstDoc" => Some(Self::GstDoc),
            "itrDoc" => Some(Self::ItrDoc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BankStatement => "Bank Statement",
            Self::DealerInvoice => "Dealer Invoice",
            Self::GstDoc => "GST Document",
            Self::ItrDoc => "ITR Document",
        }
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the upload subsystem reports for a picked file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
}
