//! Mark-and-sweep collection of tombstones.
//!
//! Run once per refresh cycle, after every inbound batch of the cycle has
//! been applied. Phase 1 bumps the mark of every record, phase 2 removes
//! records that are `deleted` with a mark at or past the threshold. A
//! record deleted at mark 0 and never touched again survives cycles 1
//! through `threshold - 1` and is gone after cycle `threshold`.

use crate::store::Store;
use tracing::{debug, info};
use uhppoted_types::Oid;

/// Number of untouched refresh cycles a tombstone is kept for.
pub const DEFAULT_RETENTION_CYCLES: u32 = 25;

/// Outcome of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Records whose mark was bumped.
    pub marked: usize,
    /// Records physically removed.
    pub removed: Vec<Oid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionSweeper {
    threshold: u32,
}

impl Default for RetentionSweeper {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_CYCLES)
    }
}

impl RetentionSweeper {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn sweep(&self, store: &mut Store) -> SweepReport {
        let mut report = SweepReport::default();

        for table in store.tables_mut() {
            report.marked += table.record_count();
            table.bump_marks();
        }

        for table in store.tables_mut() {
            let removed = table.sweep(self.threshold);
            if !removed.is_empty() {
                debug!("swept {} deleted {}", removed.len(), table.kind());
            }
            report.removed.extend(removed);
        }

        if !report.removed.is_empty() {
            info!(
                "retention sweep removed {} of {} records",
                report.removed.len(),
                report.marked
            );
        }

        report
    }
}
