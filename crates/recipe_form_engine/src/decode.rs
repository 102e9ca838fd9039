use crate::RecipeResponse;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is empty")]
    Empty,
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("response body is neither a recipe nor an error payload: {0}")]
    Shape(String),
}

/// Parse a complete response body as one JSON document.
///
/// Callers must hand over the fully received body; partial documents fail
/// like any other malformed payload.
pub fn decode_response(bytes: &[u8]) -> Result<RecipeResponse, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }
    serde_json::from_str(text).map_err(|err| DecodeError::Shape(err.to_string()))
}
