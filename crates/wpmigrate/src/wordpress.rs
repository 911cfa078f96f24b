use colored::Colorize;

use crate::config::WordPressConfig;
use crate::prelude::{eprintln, println, *};
use wpmigrate_core::post::{PostRecord, PostSubmission};

/// Outcome of pushing one batch to the content API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Submit each record to `{base}/posts`, sequentially and in batch order.
///
/// A failed submission is reported and counted, never aborts the batch, and
/// is never retried.
pub async fn publish_batch(
    client: &reqwest::Client,
    config: &WordPressConfig,
    records: &[PostRecord],
    verbose: bool,
) -> SinkReport {
    let url = config.posts_url();
    let mut report = SinkReport::default();

    for record in records {
        let submission = PostSubmission::from_record(record);
        if verbose {
            if let Ok(json) = serde_json::to_string_pretty(&submission) {
                println!("{json}");
            }
        }

        match client.post(&url).json(&submission).send().await {
            Err(err) => {
                eprintln!(
                    "{}",
                    format!("Failed to submit '{}': {err}", record.title).red()
                );
                report.failed += 1;
            }
            Ok(response) if !response.status().is_success() => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                eprintln!(
                    "{}",
                    format!("Failed to create post '{}': {status} - {body}", record.title).red()
                );
                report.failed += 1;
            }
            Ok(_) => {
                println!("Post '{}' created successfully!", record.title.green());
                report.delivered += 1;
            }
        }
    }

    report
}
