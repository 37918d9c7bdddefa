//! Worklist core: pure domain model for the spreadsheet batch runner.
pub mod layout;
mod record;
mod stats;
mod validate;

pub use record::{ItemStatus, Remark, ResultRecord};
pub use stats::BatchStats;
pub use validate::{validate_url, ValidationError};
