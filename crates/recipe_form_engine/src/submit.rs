use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use recipe_logging::{recipe_debug, recipe_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;

use crate::{decode_response, FailureKind, RecipeResponse, SubmissionId, SubmitError, SubmitRequest};

pub const SUBMIT_PATH: &str = "/submit";

/// How the response body is read before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum BodyMode {
    /// Read the body as a chunk stream and concatenate it.
    #[default]
    Streamed,
    /// Read the body in one call.
    Whole,
}

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub server_url: String,
    pub connect_timeout: Duration,
    /// `None` lets a request run until the transport reports completion or failure.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
    pub body_mode: BodyMode,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 1024 * 1024,
            body_mode: BodyMode::Streamed,
        }
    }
}

/// Resolve the submit endpoint against the configured server URL.
pub fn endpoint_url(server_url: &str) -> Result<Url, SubmitError> {
    Url::parse(server_url)
        .and_then(|base| base.join(SUBMIT_PATH))
        .map_err(|err| SubmitError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        request: &SubmitRequest,
    ) -> Result<RecipeResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> SubmitError {
        SubmitError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        request: &SubmitRequest,
    ) -> Result<RecipeResponse, SubmitError> {
        let endpoint = endpoint_url(&self.settings.server_url)?;
        let body = serde_json::to_vec(request)
            .map_err(|err| SubmitError::new(FailureKind::Encode, err.to_string()))?;
        let client = self.build_client()?;

        recipe_info!(
            "Submission {} -> {} company={} ingredients_len={}",
            submission_id,
            endpoint,
            request.company,
            request.ingredients.len()
        );

        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let bytes = match self.settings.body_mode {
            BodyMode::Whole => {
                let bytes = response.bytes().await.map_err(map_reqwest_error)?;
                if bytes.len() as u64 > self.settings.max_bytes {
                    return Err(self.too_large(bytes.len() as u64));
                }
                bytes
            }
            BodyMode::Streamed => {
                let stream = Box::pin(
                    response
                        .bytes_stream()
                        .map(|chunk| chunk.map_err(map_reqwest_error)),
                );
                collect_body(stream, self.settings.max_bytes).await?
            }
        };

        recipe_debug!(
            "Submission {} received {} bytes",
            submission_id,
            bytes.len()
        );

        decode_response(&bytes).map_err(|err| SubmitError::new(FailureKind::Decode, err.to_string()))
    }
}

/// Concatenate every chunk of a body stream. Nothing is parsed until the
/// stream is exhausted.
pub(crate) async fn collect_body<S>(mut stream: S, max_bytes: u64) -> Result<Bytes, SubmitError>
where
    S: Stream<Item = Result<Bytes, SubmitError>> + Unpin,
{
    let mut body = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let next_len = body.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(SubmitError::new(
                FailureKind::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                },
                "response too large",
            ));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
