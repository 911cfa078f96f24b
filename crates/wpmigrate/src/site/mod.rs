pub mod export;
pub mod publish;

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::prelude::{eprintln, println, *};
use crate::summary::SourceBatch;
use wpmigrate_core::hugo;

/// Per-page document every qualifying directory must contain.
pub const PAGE_FILE_NAME: &str = "index.html";

/// Non-year top-level directories that still belong to the post archive.
/// `fa` holds the Persian translations of the posts.
const EXTRA_TOP_LEVEL_SECTIONS: &[&str] = &["fa"];

#[derive(Debug, clap::Parser)]
#[command(name = "site")]
#[command(about = "Migrate a rendered Hugo build tree")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Crawl the build tree and write a WXR export file
    #[clap(name = "export")]
    Export(export::ExportOptions),

    /// Crawl the build tree and post each entry to the content API
    #[clap(name = "publish")]
    Publish(publish::PublishOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Export(options) => export::run(options, global).await,
        Commands::Publish(options) => publish::run(options, global).await,
    }
}

fn is_year_dir(name: &str) -> bool {
    name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit())
}

/// Top-level pruning: only year directories and the allow-listed sections
/// are descended into, which bounds the crawl to the post archive and keeps
/// it out of assets and tag-index pages. Everything deeper passes.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 1 && entry.file_type().is_dir() {
        let name = entry.file_name().to_string_lossy();
        return is_year_dir(&name) || EXTRA_TOP_LEVEL_SECTIONS.contains(&name.as_ref());
    }
    true
}

/// Path of a page directory relative to the crawl root, `/`-separated and
/// trailing-slash normalized.
fn page_url(root: &Path, page_dir: &Path) -> String {
    let relative = page_dir.strip_prefix(root).unwrap_or(page_dir);
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    if segments.is_empty() {
        String::new()
    } else {
        format!("{}/", segments.join("/"))
    }
}

/// Walk the build tree depth-first and extract one record per qualifying
/// page, in traversal order.
///
/// Pages missing a required field are reported and counted, never fatal; the
/// collected batch is handed to a sink only after the walk completes.
pub fn crawl_site(build_dir: &Path, verbose: bool) -> Result<SourceBatch> {
    if !build_dir.is_dir() {
        return Err(Error::ConfigurationMissing(format!(
            "build directory '{}' does not exist",
            build_dir.display()
        ))
        .into());
    }

    let mut batch = SourceBatch::default();

    let walker = WalkDir::new(build_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep_entry);

    for entry in walker {
        let entry = entry.wrap_err("failed to walk build directory")?;
        if !entry.file_type().is_file() || entry.file_name() != PAGE_FILE_NAME {
            continue;
        }

        let page_dir = entry
            .path()
            .parent()
            .ok_or_eyre("page file has no parent directory")?;
        let url = page_url(build_dir, page_dir);
        if verbose {
            println!("Processing page: {}", entry.path().display());
        }

        let html = match std::fs::read_to_string(entry.path()) {
            Ok(html) => html,
            Err(err) => {
                eprintln!("Error: {err} reading {}", entry.path().display());
                batch.skipped += 1;
                continue;
            }
        };

        match hugo::extract_post(&html, &url) {
            Ok(record) => batch.records.push(record),
            Err(err) => {
                eprintln!("Error: {err} in {}", entry.path().display());
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}
