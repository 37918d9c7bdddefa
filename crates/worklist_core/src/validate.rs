use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,
    #[error("missing http:// or https:// scheme: {0}")]
    MissingScheme(String),
    #[error("malformed url: {0}")]
    Malformed(String),
}

/// Checks one raw worksheet line for structural validity as a unit of work.
///
/// Policy: strict rejection. A line without an explicit `http://` or
/// `https://` scheme is an error; nothing is auto-prefixed. Returns the
/// trimmed text on success.
pub fn validate_url(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ValidationError::MissingScheme(trimmed.to_string()));
    }
    Url::parse(trimmed).map_err(|err| ValidationError::Malformed(err.to_string()))?;
    Ok(trimmed)
}
