use recipe_form_core::{Instructions, Msg, Recipe, Submission, SubmissionId, SubmitOutcome};
use recipe_form_engine::{
    EngineEvent, EngineHandle, InstructionsPayload, RecipePayload, RecipeResponse, SubmitError,
    SubmitRequest,
};
use recipe_logging::{recipe_info, recipe_warn};

/// Bridges core effects to the engine and engine events back to core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn send_submission(&self, submission_id: SubmissionId, submission: Submission) {
        recipe_info!(
            "SendSubmission id={} company={} ingredients={:?}",
            submission_id,
            submission.company,
            submission.ingredients
        );
        self.engine.submit(
            submission_id,
            SubmitRequest {
                company: submission.company,
                ingredients: submission.ingredients,
            },
        );
    }

    /// Collects every completed submission as a core message.
    pub fn drain_messages(&self) -> Vec<Msg> {
        let mut messages = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::SubmissionCompleted {
                    submission_id,
                    result,
                } => messages.push(Msg::ResponseReceived {
                    submission_id,
                    outcome: map_result(submission_id, result),
                }),
            }
        }
        messages
    }
}

fn map_result(
    submission_id: SubmissionId,
    result: Result<RecipeResponse, SubmitError>,
) -> SubmitOutcome {
    match result {
        Ok(RecipeResponse::Recipe(recipe)) => SubmitOutcome::Recipe(map_recipe(recipe)),
        Ok(RecipeResponse::Error { error }) => {
            recipe_warn!("Submission {} rejected by backend: {}", submission_id, error);
            SubmitOutcome::BackendError(error)
        }
        Err(err) => {
            recipe_warn!("Submission {} failed: {}", submission_id, err);
            SubmitOutcome::TransportFailed
        }
    }
}

fn map_recipe(recipe: RecipePayload) -> Recipe {
    Recipe {
        name: recipe.name,
        tagline: recipe.tagline,
        ingredients: recipe.ingredients,
        instructions: match recipe.instructions {
            InstructionsPayload::Text(text) => Instructions::Text(text),
            InstructionsPayload::Steps(steps) => Instructions::Steps(steps),
        },
    }
}
