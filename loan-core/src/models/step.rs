use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a persisted step index is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid step index {0}, expected 0..=8")]
pub struct StepIdError(pub u8);

/// Position in the wizard, in visit order.
///
/// The indices are the wire format of the persisted snapshot, so the
/// numbering is fixed: inserting a step means appending, not renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StepId {
    LoanSelection,
    BasicDetails,
    PersonalDetails,
    IncomeDetails,
    Offer,
    DocumentUpload,
    FinalReview,
    FinalApproval,
    ThankYou,
}

impl StepId {
    pub const ALL: [StepId; 9] = [
        StepId::LoanSelection,
        StepId::BasicDetails,
        StepId::PersonalDetails,
        StepId::IncomeDetails,
        StepId::Offer,
        StepId::DocumentUpload,
        StepId::FinalReview,
        StepId::FinalApproval,
        StepId::ThankYou,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable heading shown above each step.
    pub fn label(self) -> &'static str {
        match self {
            StepId::LoanSelection => "Loan Selection",
            StepId::BasicDetails => "Basic Details",
            StepId::PersonalDetails => "Personal Details",
            StepId::IncomeDetails => "Income Details",
            StepId::Offer => "Loan Offer",
            StepId::DocumentUpload => "Document Upload",
            StepId::FinalReview => "Final Review",
            StepId::FinalApproval => "Final Approval",
            StepId::ThankYou => "Thank You",
        }
    }

    /// The step the wizard moves to on a successful forward transition.
    ///
    /// FinalReview jumps straight to ThankYou: FinalApproval is reachable
    /// only by direct navigation, never as part of the forward walk. This
    /// mirrors the submission flow exactly and must not be "fixed".
    pub fn successor(self) -> Option<StepId> {
        match self {
            StepId::FinalReview => Some(StepId::ThankYou),
            StepId::ThankYou => None,
            other => StepId::try_from(other.index() + 1).ok(),
        }
    }

    pub fn predecessor(self) -> Option<StepId> {
        match self {
            StepId::LoanSelection => None,
            other => StepId::try_from(other.index() - 1).ok(),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == StepId::ThankYou
    }

    /// Whether the numbered progress stepper is visible on this step.
    /// Hidden on the landing page and on everything past the offer flow.
    pub fn shows_progress(self) -> bool {
        !matches!(self, StepId::LoanSelection) && self.index() < 6
    }
}

impl Default for StepId {
    fn default() -> Self {
        StepId::LoanSelection
    }
}

impl TryFrom<u8> for StepId {
    type Error = StepIdError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        StepId::ALL
            .get(index as usize)
            .copied()
            .ok_or(StepIdError(index))
    }
}

impl From<StepId> for u8 {
    fn from(step: StepId) -> u8 {
        step.index()
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indices_are_stable() {
        assert_eq!(StepId::LoanSelection.index(), 0);
        assert_eq!(StepId::Offer.index(), 4);
        assert_eq!(StepId::ThankYou.index(), 8);
    }

    #[test]
    fn successor_walks_forward() {
        assert_eq!(
            StepId::LoanSelection.successor(),
            Some(StepId::BasicDetails)
        );
        assert_eq!(StepId::Offer.successor(), Some(StepId::DocumentUpload));
    }

    #[test]
    fn final_review_skips_final_approval() {
        assert_eq!(StepId::FinalReview.successor(), Some(StepId::ThankYou));
    }

    #[test]
    fn thank_you_has_no_successor() {
        assert_eq!(StepId::ThankYou.successor(), None);
    }

    #[test]
    fn predecessor_stops_at_loan_selection() {
        assert_eq!(StepId::LoanSelection.predecessor(), None);
        assert_eq!(
            StepId::BasicDetails.predecessor(),
            Some(StepId::LoanSelection)
        );
        assert_eq!(
            StepId::ThankYou.predecessor(),
            Some(StepId::FinalApproval)
        );
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(StepId::try_from(9), Err(StepIdError(9)));
    }

    #[test]
    fn progress_hidden_outside_form_steps() {
        assert!(!StepId::LoanSelection.shows_progress());
        assert!(StepId::BasicDetails.shows_progress());
        assert!(StepId::DocumentUpload.shows_progress());
        assert!(!StepId::FinalReview.shows_progress());
        assert!(!StepId::ThankYou.shows_progress());
    }

    #[test]
    fn serializes_as_index() {
        let json = serde_json::to_string(&StepId::FinalReview).unwrap();
        assert_eq!(json, "6");
        let back: StepId = serde_json::from_str("6").unwrap();
        assert_eq!(back, StepId::FinalReview);
        assert!(serde_json::from_str::<StepId>("42").is_err());
    }
}
