use std::path::PathBuf;

use crate::prelude::{println, *};
use crate::summary::RunSummary;
use wpmigrate_core::wxr::WxrContext;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ExportOptions {
    /// Root of the rendered site build
    pub build_dir: PathBuf,

    /// Directory the WXR file is written into (created if absent)
    #[arg(long, env = "EXPORT_DIRECTORY")]
    pub export_dir: PathBuf,

    /// Canonical domain used to build item links, e.g. https://example.com
    #[arg(long, env = "DOMAIN")]
    pub domain: String,

    /// Author recorded on each exported item
    #[arg(long, env = "WORDPRESS_USERNAME", default_value = "admin")]
    pub creator: String,

    /// Exit zero even when pages were skipped
    #[arg(long)]
    pub lenient: bool,
}

pub async fn run(options: ExportOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Crawling build directory: {}", options.build_dir.display());
        println!();
    }

    let batch = super::crawl_site(&options.build_dir, global.verbose)?;

    let context = WxrContext::new(options.domain, options.creator);
    let path = crate::export::write_export(&batch.records, &context, &options.export_dir)?;
    println!(
        "Exported {} posts to {}",
        batch.records.len(),
        path.display()
    );

    RunSummary::new(&batch, 0).finish(options.lenient)
}
