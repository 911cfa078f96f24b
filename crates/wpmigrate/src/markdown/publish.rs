use std::path::PathBuf;

use crate::config::{create_authenticated_client, WordPressConfig};
use crate::prelude::{println, *};
use crate::summary::RunSummary;
use crate::wordpress::publish_batch;

use super::convert::Converter;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PublishOptions {
    /// Directory containing the Markdown source files
    #[clap(env = "MARKDOWN_DIRECTORY")]
    pub directory: PathBuf,

    /// Markdown-to-HTML converter
    #[arg(long, env = "MARKDOWN_PARSER", default_value = "plain", value_enum)]
    pub parser: Converter,

    /// Content-API base URL (overrides WORDPRESS_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Exit zero even when files were skipped or submissions failed
    #[arg(long)]
    pub lenient: bool,
}

pub async fn run(options: PublishOptions, global: crate::Global) -> Result<()> {
    let config = WordPressConfig::from_env()?.with_overrides(options.endpoint);
    let client = create_authenticated_client(&config)?;

    if global.verbose {
        println!("Content API endpoint: {}", config.posts_url());
        println!();
    }

    let batch = super::collect_markdown(&options.directory, options.parser).await?;
    let report = publish_batch(&client, &config, &batch.records, global.verbose).await;

    RunSummary::new(&batch, report.failed).finish(options.lenient)
}
