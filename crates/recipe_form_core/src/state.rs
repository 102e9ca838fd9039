use crate::view_model::{FormViewModel, MessageView};
use crate::{Submission, SubmissionId, SubmitOutcome};

/// Label shown while no real company is selected.
pub const PLACEHOLDER_LABEL: &str = "Select a company";
pub const VALIDATION_ALERT: &str = "Please select a company and enter some ingredients.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "There was an error sending your data to the server.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    companies: Vec<String>,
    selected_index: usize,
    ingredients: String,
    submit_enabled: bool,
    in_flight: Option<SubmissionId>,
    last_submission_id: SubmissionId,
    message: MessageView,
    dirty: bool,
}

impl FormState {
    pub fn new<I, S>(companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            companies: companies.into_iter().map(Into::into).collect(),
            dirty: true,
            ..Self::default()
        }
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            companies: self.companies.clone(),
            selected_index: self.selected_index,
            selected_label: self.selected_label().to_string(),
            ingredients: self.ingredients.clone(),
            submit_enabled: self.submit_enabled && self.in_flight.is_none(),
            loading_visible: self.in_flight.is_some(),
            message: self.message.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    /// The real company behind the current dropdown index, if any.
    pub fn selected_company(&self) -> Option<&str> {
        self.selected_index
            .checked_sub(1)
            .and_then(|idx| self.companies.get(idx))
            .map(String::as_str)
    }

    pub fn selected_label(&self) -> &str {
        self.selected_company().unwrap_or(PLACEHOLDER_LABEL)
    }

    /// Pure predicate: a real company is selected and the trimmed text is non-empty.
    pub fn is_valid(&self) -> bool {
        self.selected_company().is_some() && !self.ingredients.trim().is_empty()
    }

    /// Re-runs validation and mirrors the result onto the submit control.
    pub fn validate(&mut self) -> bool {
        let valid = self.is_valid();
        if self.submit_enabled != valid {
            self.submit_enabled = valid;
            self.dirty = true;
        }
        valid
    }

    pub(crate) fn select_company(&mut self, index: usize) {
        let index = if index <= self.companies.len() { index } else { 0 };
        if self.selected_index != index {
            self.selected_index = index;
            self.dirty = true;
        }
    }

    pub(crate) fn set_ingredients(&mut self, text: String) {
        if self.ingredients != text {
            self.ingredients = text;
            self.dirty = true;
        }
    }

    pub(crate) fn build_submission(&self) -> Option<Submission> {
        if !self.is_valid() {
            return None;
        }
        let company = self.selected_company()?;
        Some(Submission {
            company: company.to_string(),
            ingredients: self.ingredients.trim().to_string(),
        })
    }

    /// Marks a new submission as in flight: loading shown, message cleared.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.last_submission_id += 1;
        self.in_flight = Some(self.last_submission_id);
        self.message = MessageView::Hidden;
        self.dirty = true;
        self.last_submission_id
    }

    pub(crate) fn finish_submission(&mut self, outcome: SubmitOutcome) {
        self.in_flight = None;
        self.message = match outcome {
            SubmitOutcome::Recipe(recipe) => {
                self.reset_fields();
                MessageView::Recipe(recipe)
            }
            SubmitOutcome::BackendError(error) => MessageView::BackendError(error),
            SubmitOutcome::TransportFailed => MessageView::TransportFailure,
        };
        self.validate();
        self.dirty = true;
    }

    fn reset_fields(&mut self) {
        self.ingredients.clear();
        self.selected_index = 0;
    }
}
