use crate::{Submission, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking alert to the user.
    ShowAlert { message: String },
    /// POST the submission to the recipe endpoint.
    SendSubmission {
        submission_id: SubmissionId,
        submission: Submission,
    },
}
