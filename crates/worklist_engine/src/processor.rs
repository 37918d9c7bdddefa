use std::sync::Arc;
use std::time::Duration;

use batch_logging::batch_debug;
use chrono::Local;
use thiserror::Error;
use worklist_core::{validate_url, Remark, ResultRecord};

use crate::decode::decode_body;
use crate::extract::extract_page_metadata;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::FailureKind;

/// Injectable completion-time source, `YYYY-MM-DD HH:MM:SS`.
pub type Timestamper = Arc<dyn Fn() -> String + Send + Sync>;

pub fn local_timestamper() -> Timestamper {
    Arc::new(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}

/// One unit of work: turn a raw worksheet line into a result record.
///
/// Implementations never escalate item-level failures; every input produces
/// a record.
#[async_trait::async_trait]
pub trait ItemProcessor: Send + Sync {
    async fn process(&self, index: u32, raw: &str) -> ResultRecord;
}

fn remark_for(kind: &FailureKind) -> Remark {
    match kind {
        FailureKind::InvalidUrl => Remark::InvalidInput,
        FailureKind::Timeout => Remark::Timeout,
        FailureKind::Connection => Remark::ConnectionError,
        FailureKind::Request => Remark::RequestError,
        FailureKind::TooLarge { .. } | FailureKind::Unexpected => Remark::Unexpected,
    }
}

/// Fetches each URL and records extracted page metadata.
pub struct HttpProcessor {
    fetcher: Box<dyn Fetcher>,
    clock: Timestamper,
}

impl HttpProcessor {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Box::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            clock: local_timestamper(),
        }
    }

    pub fn with_clock(mut self, clock: Timestamper) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait::async_trait]
impl ItemProcessor for HttpProcessor {
    async fn process(&self, index: u32, raw: &str) -> ResultRecord {
        let url = match validate_url(raw) {
            Ok(url) => url,
            Err(err) => {
                return ResultRecord::failure(
                    index,
                    (self.clock)(),
                    err.to_string(),
                    Remark::InvalidInput,
                );
            }
        };

        match self.fetcher.fetch(url).await {
            Ok(output) if output.status_code == 200 => {
                let decoded = decode_body(&output.bytes, output.content_type.as_deref());
                let page = extract_page_metadata(&decoded.text);
                batch_debug!(
                    "fetched {} ({} bytes, {})",
                    url,
                    output.bytes.len(),
                    decoded.encoding_label
                );
                let mut detail = page
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("HTTP {}", output.status_code));
                if let Some(description) = &page.description {
                    detail.push_str(&format!(" | description: {description}"));
                }
                if let Some(keywords) = &page.keywords {
                    detail.push_str(&format!(" | keywords: {keywords}"));
                }
                ResultRecord::success(index, (self.clock)(), detail)
            }
            // A non-200 response is still a completed fetch; the status code
            // is the result.
            Ok(output) => ResultRecord::success(
                index,
                (self.clock)(),
                format!("HTTP {}", output.status_code),
            ),
            Err(err) => {
                ResultRecord::failure(index, (self.clock)(), err.message, remark_for(&err.kind))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedSettings {
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for SimulatedSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Error)]
#[error("processing error: {0}")]
pub struct ProcessingError(pub String);

/// Validates each item, then performs a fixed blocking delay standing in
/// for real per-item work. The whole item runs under a portable
/// `tokio::time::timeout` deadline.
pub struct SimulatedProcessor {
    settings: SimulatedSettings,
    clock: Timestamper,
}

impl SimulatedProcessor {
    pub fn new(settings: SimulatedSettings) -> Self {
        Self {
            settings,
            clock: local_timestamper(),
        }
    }

    pub fn with_clock(mut self, clock: Timestamper) -> Self {
        self.clock = clock;
        self
    }

    // Placeholder for real per-item work; the error path is what a real
    // implementation would use for its own failures.
    async fn run_item(&self, item: &str) -> Result<String, ProcessingError> {
        tokio::time::sleep(self.settings.delay).await;
        Ok(format!("processing complete: {item}"))
    }
}

#[async_trait::async_trait]
impl ItemProcessor for SimulatedProcessor {
    async fn process(&self, index: u32, raw: &str) -> ResultRecord {
        let item = match validate_url(raw) {
            Ok(item) => item,
            Err(err) => {
                return ResultRecord::failure(
                    index,
                    (self.clock)(),
                    err.to_string(),
                    Remark::InvalidInput,
                );
            }
        };

        match tokio::time::timeout(self.settings.timeout, self.run_item(item)).await {
            Ok(Ok(detail)) => ResultRecord::success(index, (self.clock)(), detail),
            Ok(Err(err)) => {
                ResultRecord::failure(index, (self.clock)(), err.to_string(), Remark::Unexpected)
            }
            Err(_elapsed) => ResultRecord::failure(
                index,
                (self.clock)(),
                format!("timed out after {}s: {item}", self.settings.timeout.as_secs()),
                Remark::Timeout,
            ),
        }
    }
}
