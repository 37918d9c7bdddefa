use std::sync::Arc;

use batch_logging::batch_info;
use worklist_core::{BatchStats, ItemStatus, ResultRecord};

use crate::processor::ItemProcessor;

/// Records plus aggregate counts for one full batch pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub records: Vec<ResultRecord>,
    pub stats: BatchStats,
}

/// Sequential driver: turns an ordered input sequence into an equal-length
/// ordered record sequence.
///
/// Each item is processed to completion before the next begins. A failing
/// item becomes a failure record; it never aborts or reorders the rest.
pub struct BatchRunner {
    processor: Arc<dyn ItemProcessor>,
}

impl BatchRunner {
    pub fn new(processor: Arc<dyn ItemProcessor>) -> Self {
        Self { processor }
    }

    pub async fn run(&self, items: &[String]) -> BatchReport {
        let total = items.len();
        batch_info!("starting batch of {} item(s)", total);

        let mut records = Vec::with_capacity(total);
        for (i, item) in items.iter().enumerate() {
            let index = i as u32 + 1;
            batch_info!("({}/{}) processing {}", index, total, preview(item));
            let record = self.processor.process(index, item).await;
            match record.status {
                ItemStatus::Success => batch_info!("({}/{}) success", index, total),
                ItemStatus::Failure => {
                    batch_info!("({}/{}) failure: {}", index, total, record.detail)
                }
            }
            records.push(record);
        }

        let stats = BatchStats::from_records(&records);
        batch_info!(
            "batch finished: {} success, {} failure",
            stats.success,
            stats.failure
        );
        BatchReport { records, stats }
    }
}

fn preview(item: &str) -> &str {
    match item.char_indices().nth(50) {
        Some((idx, _)) => &item[..idx],
        None => item,
    }
}
