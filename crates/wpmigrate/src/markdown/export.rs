use std::path::PathBuf;

use crate::prelude::{println, *};
use crate::summary::RunSummary;
use wpmigrate_core::wxr::WxrContext;

use super::convert::Converter;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ExportOptions {
    /// Directory containing the Markdown source files
    #[clap(env = "MARKDOWN_DIRECTORY")]
    pub directory: PathBuf,

    /// Markdown-to-HTML converter
    #[arg(long, env = "MARKDOWN_PARSER", default_value = "plain", value_enum)]
    pub parser: Converter,

    /// Directory the WXR file is written into (created if absent)
    #[arg(long, env = "EXPORT_DIRECTORY")]
    pub export_dir: PathBuf,

    /// Canonical domain used to build item links, e.g. https://example.com
    #[arg(long, env = "DOMAIN")]
    pub domain: String,

    /// Author recorded on each exported item
    #[arg(long, env = "WORDPRESS_USERNAME", default_value = "admin")]
    pub creator: String,

    /// Exit zero even when files were skipped
    #[arg(long)]
    pub lenient: bool,
}

pub async fn run(options: ExportOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Markdown directory: {}", options.directory.display());
        println!();
    }

    let batch = super::collect_markdown(&options.directory, options.parser).await?;

    let context = WxrContext::new(options.domain, options.creator);
    let path = crate::export::write_export(&batch.records, &context, &options.export_dir)?;
    println!(
        "Exported {} posts to {}",
        batch.records.len(),
        path.display()
    );

    RunSummary::new(&batch, 0).finish(options.lenient)
}
