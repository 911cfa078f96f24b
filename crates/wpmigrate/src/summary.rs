use crate::prelude::{println, *};
use colored::Colorize;

use wpmigrate_core::post::PostRecord;

/// Records collected from a source plus the number of pages/files that were
/// skipped along the way.
#[derive(Debug, Default)]
pub struct SourceBatch {
    pub records: Vec<PostRecord>,
    pub skipped: usize,
}

/// Final accounting for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new(batch: &SourceBatch, failed: usize) -> Self {
        Self {
            migrated: batch.records.len() - failed,
            skipped: batch.skipped,
            failed,
        }
    }

    fn is_clean(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }

    /// Print the run summary and map it to the process outcome.
    ///
    /// A run with skipped records or failed submissions exits non-zero so
    /// that callers notice an incomplete migration; `--lenient` restores the
    /// always-zero behavior.
    pub fn finish(self, lenient: bool) -> Result<()> {
        println!(
            "{} migrated, {} skipped, {} failed",
            self.migrated.to_string().green(),
            self.skipped.to_string().yellow(),
            self.failed.to_string().red(),
        );

        if self.is_clean() || lenient {
            Ok(())
        } else {
            Err(Error::Incomplete {
                skipped: self.skipped,
                failed: self.failed,
            }
            .into())
        }
    }
}
