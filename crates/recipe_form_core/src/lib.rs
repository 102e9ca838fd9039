//! Recipe form core: pure form controller state machine and view-model helpers.
mod effect;
mod msg;
mod recipe;
mod render;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use recipe::{Instructions, Recipe, Submission, SubmissionId, SubmitOutcome};
pub use render::{escape_html, render_message_html};
pub use state::{FormState, PLACEHOLDER_LABEL, TRANSPORT_FAILURE_MESSAGE, VALIDATION_ALERT};
pub use update::update;
pub use view_model::{FormViewModel, MessageView};
