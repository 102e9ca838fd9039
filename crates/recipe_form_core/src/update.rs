use crate::{Effect, FormState, Msg, VALIDATION_ALERT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::CompanySelected(index) => {
            state.select_company(index);
            state.validate();
            Vec::new()
        }
        Msg::IngredientsChanged(text) => {
            state.set_ingredients(text);
            state.validate();
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Control is disabled while a request is outstanding.
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            // Re-check at click time rather than trusting the control state.
            state.validate();
            match state.build_submission() {
                Some(submission) => {
                    let submission_id = state.begin_submission();
                    vec![Effect::SendSubmission {
                        submission_id,
                        submission,
                    }]
                }
                None => vec![Effect::ShowAlert {
                    message: VALIDATION_ALERT.to_string(),
                }],
            }
        }
        Msg::ResponseReceived {
            submission_id,
            outcome,
        } => {
            if state.in_flight() == Some(submission_id) {
                state.finish_submission(outcome);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
