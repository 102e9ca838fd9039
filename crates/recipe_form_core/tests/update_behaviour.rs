use std::sync::Once;

use recipe_form_core::{
    update, Effect, FormState, Instructions, MessageView, Msg, Recipe, Submission,
    SubmissionId, SubmitOutcome, PLACEHOLDER_LABEL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipe_logging::initialize_for_tests);
}

fn filled(company_index: usize, text: &str) -> FormState {
    let state = FormState::new(["Nabisco", "Kraft", "Nestle"]);
    let (state, _) = update(state, Msg::CompanySelected(company_index));
    let (state, _) = update(state, Msg::IngredientsChanged(text.to_string()));
    state
}

fn submit(state: FormState) -> (FormState, SubmissionId) {
    let (state, effects) = update(state, Msg::SubmitClicked);
    match effects.as_slice() {
        [Effect::SendSubmission { submission_id, .. }] => (state, *submission_id),
        other => panic!("expected a single send effect, got {other:?}"),
    }
}

fn respond(state: FormState, submission_id: SubmissionId, outcome: SubmitOutcome) -> FormState {
    let (state, effects) = update(
        state,
        Msg::ResponseReceived {
            submission_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

fn tomato_soup() -> Recipe {
    Recipe {
        name: "Tomato Soup".to_string(),
        tagline: "Warm & simple".to_string(),
        ingredients: vec!["tomato".to_string(), "salt".to_string()],
        instructions: Instructions::Steps(vec!["Boil".to_string(), "Blend".to_string()]),
    }
}

#[test]
fn valid_submit_emits_trimmed_submission() {
    init_logging();
    let state = filled(1, "  tomato, salt \n");

    let (mut next, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::SendSubmission {
            submission_id: 1,
            submission: Submission {
                company: "Nabisco".to_string(),
                ingredients: "tomato, salt".to_string(),
            },
        }]
    );
    let view = next.view();
    assert!(view.loading_visible);
    assert!(!view.submit_enabled);
    assert_eq!(view.message, MessageView::Hidden);
    assert!(next.consume_dirty());
}

#[test]
fn submit_clears_previous_message() {
    init_logging();
    let (state, id) = submit(filled(1, "tomato"));
    let state = respond(state, id, SubmitOutcome::TransportFailed);
    assert_eq!(state.view().message, MessageView::TransportFailure);

    let (state, _id) = submit(state);
    assert_eq!(state.view().message, MessageView::Hidden);
}

#[test]
fn second_click_while_in_flight_is_ignored() {
    init_logging();
    let (state, _id) = submit(filled(2, "tomato"));

    let (next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn recipe_response_renders_and_resets_form() {
    init_logging();
    let (state, id) = submit(filled(3, "tomato, salt"));
    let state = respond(state, id, SubmitOutcome::Recipe(tomato_soup()));
    let view = state.view();

    assert_eq!(view.message, MessageView::Recipe(tomato_soup()));
    assert_eq!(view.ingredients, "");
    assert_eq!(view.selected_index, 0);
    assert_eq!(view.selected_label, PLACEHOLDER_LABEL);
    assert!(!view.submit_enabled);
    assert!(!view.loading_visible);
    assert!(state.in_flight().is_none());
}

#[test]
fn backend_error_keeps_form_fields() {
    init_logging();
    let (state, id) = submit(filled(2, "tomato"));
    let state = respond(
        state,
        id,
        SubmitOutcome::BackendError("unknown company".to_string()),
    );
    let view = state.view();

    assert_eq!(
        view.message,
        MessageView::BackendError("unknown company".to_string())
    );
    assert_eq!(view.ingredients, "tomato");
    assert_eq!(view.selected_label, "Kraft");
    assert!(view.submit_enabled);
    assert!(!view.loading_visible);
}

#[test]
fn transport_failure_hides_loading_and_reenables_submit() {
    init_logging();
    let (state, id) = submit(filled(1, "tomato"));
    let state = respond(state, id, SubmitOutcome::TransportFailed);
    let view = state.view();

    assert_eq!(view.message, MessageView::TransportFailure);
    assert!(!view.loading_visible);
    assert!(view.submit_enabled);
    assert_eq!(view.ingredients, "tomato");
}

#[test]
fn stale_response_is_ignored() {
    init_logging();
    let (state, id) = submit(filled(1, "tomato"));
    let (next, effects) = update(
        state.clone(),
        Msg::ResponseReceived {
            submission_id: id + 7,
            outcome: SubmitOutcome::TransportFailed,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(next.view().loading_visible);
}

#[test]
fn no_lockout_after_any_outcome() {
    init_logging();
    let outcomes = [
        SubmitOutcome::Recipe(tomato_soup()),
        SubmitOutcome::BackendError("unknown company".to_string()),
        SubmitOutcome::TransportFailed,
    ];

    let mut state = filled(1, "tomato");
    let mut previous_id = 0;
    for outcome in outcomes {
        let (submitted, id) = submit(state);
        assert!(id > previous_id);
        previous_id = id;

        let answered = respond(submitted, id, outcome);
        let (answered, _) = update(answered, Msg::CompanySelected(1));
        let (answered, _) = update(answered, Msg::IngredientsChanged("basil".to_string()));
        assert!(answered.view().submit_enabled);
        state = answered;
    }

    let (_state, effects) = update(state, Msg::SubmitClicked);
    assert!(matches!(
        effects.as_slice(),
        [Effect::SendSubmission { .. }]
    ));
}
