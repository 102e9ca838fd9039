/// Sequence number assigned to each submission when it is sent.
pub type SubmissionId = u64;

/// The validated (company, ingredients) pair sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub company: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub tagline: String,
    pub ingredients: Vec<String>,
    pub instructions: Instructions,
}

/// Backends answer with either a single block of prose or numbered steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instructions {
    Text(String),
    Steps(Vec<String>),
}

/// How a submission ended, as reported back by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A well-formed recipe payload.
    Recipe(Recipe),
    /// A well-formed payload carrying an `error` field.
    BackendError(String),
    /// Non-2xx status, network failure, stream failure or undecodable body.
    TransportFailed,
}
