pub mod convert;
pub mod export;
pub mod publish;

use std::path::Path;

use crate::prelude::{eprintln, println, *};
use crate::summary::SourceBatch;
use self::convert::Converter;
use wpmigrate_core::frontmatter::{build_record, parse_front_matter};

#[derive(Debug, clap::Parser)]
#[command(name = "markdown")]
#[command(about = "Migrate Markdown files with front matter")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Parse the files and write a WXR export file
    #[clap(name = "export")]
    Export(export::ExportOptions),

    /// Parse the files and post each entry to the content API
    #[clap(name = "publish")]
    Publish(publish::PublishOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Export(options) => export::run(options, global).await,
        Commands::Publish(options) => publish::run(options, global).await,
    }
}

/// Read every `*.md` direct child of `directory` in sorted order and build
/// one record per file that carries usable front matter.
///
/// A file without front matter, without a title or date, or whose converter
/// fails is reported and counted, never fatal.
pub async fn collect_markdown(
    directory: &Path,
    converter: Converter,
) -> Result<SourceBatch> {
    if !directory.is_dir() {
        return Err(Error::ConfigurationMissing(format!(
            "markdown directory '{}' does not exist",
            directory.display()
        ))
        .into());
    }

    let mut paths: Vec<_> = std::fs::read_dir(directory)
        .wrap_err("failed to read markdown directory")?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|extension| extension == "md")
        })
        .collect();
    paths.sort();

    let mut batch = SourceBatch::default();

    for path in paths {
        println!("Processing file: {}", path.display());

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Error: {err} reading {}", path.display());
                batch.skipped += 1;
                continue;
            }
        };

        let (metadata, body) = match parse_front_matter(&content) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("Error: {err} in {}", path.display());
                batch.skipped += 1;
                continue;
            }
        };

        let html = match converter.convert(&path, body).await {
            Ok(html) => html,
            Err(err) => {
                eprintln!("Error: {err} in {}", path.display());
                batch.skipped += 1;
                continue;
            }
        };

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        match build_record(metadata, html, &stem) {
            Ok(record) => batch.records.push(record),
            Err(err) => {
                eprintln!("Error: {err} in {}", path.display());
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(root: &Path, name: &str, content: &str) {
        std::fs::write(root.join(name), content).unwrap();
    }

    const POST: &str = "---
title: Hello World
date: \"Jun 12, 2023 08:40 PM UTC\"
url: /2023/06/12/hello-world/
tags:
  - Rust
---

# Hello

A paragraph.";

    #[tokio::test]
    async fn test_collects_record_from_front_matter_and_body() {
        let root = tempfile::tempdir().unwrap();
        write_file(root.path(), "hello.md", POST);

        let batch = collect_markdown(root.path(), Converter::Plain).await.unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.skipped, 0);
        let record = &batch.records[0];
        assert_eq!(record.title, "Hello World");
        assert_eq!(record.slug, "hello-world");
        assert_eq!(record.tags, vec!["Rust"]);
        assert!(record.content_html.contains("<h1>Hello</h1>"));
        assert!(record.content_html.contains("<p>A paragraph.</p>"));
        // The metadata block must never leak into the rendered body.
        assert!(!record.content_html.contains("title:"));
    }

    #[tokio::test]
    async fn test_file_without_front_matter_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        write_file(root.path(), "plain.md", "# No metadata here\n");
        write_file(root.path(), "good.md", POST);

        let batch = collect_markdown(root.path(), Converter::Plain).await.unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.records[0].title, "Hello World");
    }

    #[tokio::test]
    async fn test_only_markdown_files_are_considered() {
        let root = tempfile::tempdir().unwrap();
        write_file(root.path(), "post.md", POST);
        write_file(root.path(), "notes.txt", POST);
        write_file(root.path(), "image.png", "not markdown");

        let batch = collect_markdown(root.path(), Converter::Plain).await.unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.skipped, 0);
    }

    #[tokio::test]
    async fn test_files_processed_in_sorted_order() {
        let root = tempfile::tempdir().unwrap();
        write_file(
            root.path(),
            "b-second.md",
            &POST.replace("Hello World", "Second"),
        );
        write_file(
            root.path(),
            "a-first.md",
            &POST.replace("Hello World", "First"),
        );

        let batch = collect_markdown(root.path(), Converter::Plain).await.unwrap();

        let titles: Vec<_> = batch.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_a_configuration_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("no-such-dir");
        assert!(collect_markdown(&missing, Converter::Plain).await.is_err());
    }

    #[tokio::test]
    async fn test_slug_falls_back_to_file_stem() {
        let root = tempfile::tempdir().unwrap();
        let without_url = "---\ntitle: T\ndate: 2023-06-12\n---\nbody";
        write_file(root.path(), "stem-slug.md", without_url);

        let batch = collect_markdown(root.path(), Converter::Plain).await.unwrap();

        assert_eq!(batch.records[0].slug, "stem-slug");
    }
}
