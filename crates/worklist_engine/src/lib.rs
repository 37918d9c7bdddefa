//! Worklist engine: fetch, extraction, processors and workbook IO.
mod batch;
mod decode;
mod extract;
mod fetch;
mod filename;
mod persist;
mod processor;
mod types;
mod workbook;

pub use batch::{BatchReport, BatchRunner};
pub use decode::{decode_body, DecodedBody};
pub use extract::{extract_page_metadata, PageMetadata};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use filename::work_filename;
pub use persist::{save_workbook_atomic, PersistError};
pub use processor::{
    local_timestamper, HttpProcessor, ItemProcessor, ProcessingError, SimulatedProcessor,
    SimulatedSettings, Timestamper,
};
pub use types::{FailureKind, FetchError, FetchOutput};
pub use workbook::{create_template, read_input_items, write_results, TemplateProfile, WorkbookError};
