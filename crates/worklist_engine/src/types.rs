use std::fmt;

/// Raw outcome of one GET request.
///
/// Any HTTP status counts as a completed fetch; the status code is data for
/// the processor, not an error. `FetchError` is reserved for requests that
/// never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub status_code: u16,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    Connection,
    Request,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Unexpected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connection => write!(f, "connection error"),
            FailureKind::Request => write!(f, "request error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}
