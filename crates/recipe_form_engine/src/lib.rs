//! Recipe form engine: HTTP submission, body decoding and background execution.
mod decode;
mod engine;
mod submit;
mod types;

pub use decode::{decode_response, DecodeError};
pub use engine::EngineHandle;
pub use submit::{endpoint_url, BodyMode, ReqwestSubmitter, SubmitSettings, Submitter, SUBMIT_PATH};
pub use types::{
    EngineEvent, FailureKind, InstructionsPayload, RecipePayload, RecipeResponse, SubmissionId,
    SubmitError, SubmitRequest,
};
