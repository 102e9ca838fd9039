use crate::{SubmissionId, SubmitOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a dropdown entry. Index 0 is the placeholder.
    CompanySelected(usize),
    /// User edited the ingredients text field.
    IngredientsChanged(String),
    /// User clicked the submit control.
    SubmitClicked,
    /// Transport finished a submission.
    ResponseReceived {
        submission_id: SubmissionId,
        outcome: SubmitOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
