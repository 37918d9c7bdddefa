use std::fmt;

/// Terminal outcome of processing one input item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Success,
    Failure,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Success => write!(f, "success"),
            ItemStatus::Failure => write!(f, "failure"),
        }
    }
}

/// Outcome category written to the remark column.
///
/// Covers both processor variants: `InvalidInput`/`Timeout`/`Unexpected`
/// come from the simulated path, the connection and request categories from
/// the HTTP path. `Completed` marks every success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    Completed,
    InvalidInput,
    Timeout,
    ConnectionError,
    RequestError,
    Unexpected,
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remark::Completed => write!(f, "completed"),
            Remark::InvalidInput => write!(f, "invalid input"),
            Remark::Timeout => write!(f, "timeout"),
            Remark::ConnectionError => write!(f, "connection error"),
            Remark::RequestError => write!(f, "request error"),
            Remark::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// One row of batch output, aligned 1:1 with the input rows.
///
/// `index` is 1-based and matches input order. `completed_at` is a local
/// `YYYY-MM-DD HH:MM:SS` timestamp stamped when processing finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub index: u32,
    pub completed_at: String,
    pub status: ItemStatus,
    pub detail: String,
    pub remark: Remark,
}

impl ResultRecord {
    pub fn success(index: u32, completed_at: String, detail: String) -> Self {
        Self {
            index,
            completed_at,
            status: ItemStatus::Success,
            detail,
            remark: Remark::Completed,
        }
    }

    pub fn failure(index: u32, completed_at: String, detail: String, remark: Remark) -> Self {
        Self {
            index,
            completed_at,
            status: ItemStatus::Failure,
            detail,
            remark,
        }
    }
}
