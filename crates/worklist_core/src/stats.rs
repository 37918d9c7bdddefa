use crate::record::{ItemStatus, ResultRecord};

/// Aggregate counts over one batch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    pub total: usize,
    pub success: usize,
    pub failure: usize,
}

impl BatchStats {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let success = records
            .iter()
            .filter(|r| r.status == ItemStatus::Success)
            .count();
        Self {
            total: records.len(),
            success,
            failure: records.len() - success,
        }
    }

    /// Success percentage rounded to one decimal place.
    ///
    /// An empty batch has a rate of 0.0 rather than dividing by zero.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = self.success as f64 / self.total as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }
}
