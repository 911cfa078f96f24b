//! Front-matter splitting and metadata parsing for Markdown sources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::{parse_post_date, DateError};
use crate::post::{slug_from_url, PostRecord, DEFAULT_LANGUAGE};

/// Why a Markdown file produced no record. Every variant is a per-file skip.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("front matter delimiters not found")]
    MissingDelimiters,

    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("title not found")]
    MissingTitle,

    #[error("date not found")]
    MissingDate,

    #[error(transparent)]
    BadDate(#[from] DateError),
}

/// YAML metadata block of a Markdown source file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// Original URL of the post; its last segment becomes the slug.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub shortlink: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Split a document into its front-matter block and body.
///
/// The block sits between the first two `---` markers; whatever precedes the
/// first marker is discarded and further `---` lines stay in the body.
pub fn split_front_matter(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let mut parts = content.splitn(3, "---");
    parts.next(); // text before the first marker
    match (parts.next(), parts.next()) {
        (Some(block), Some(body)) => Ok((block, body.trim())),
        _ => Err(FrontMatterError::MissingDelimiters),
    }
}

/// Split and parse the front matter, returning the metadata and the body.
pub fn parse_front_matter(content: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let (block, body) = split_front_matter(content)?;
    let metadata = serde_yaml::from_str(block)?;
    Ok((metadata, body))
}

/// Assemble a record from parsed metadata and converted content.
///
/// Title and date are required; `fallback_slug` (the source file stem) is
/// used when the metadata carries no usable `url`.
pub fn build_record(
    metadata: FrontMatter,
    content_html: String,
    fallback_slug: &str,
) -> Result<PostRecord, FrontMatterError> {
    let title = metadata
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or(FrontMatterError::MissingTitle)?;
    let date = metadata.date.ok_or(FrontMatterError::MissingDate)?;
    let published_at = parse_post_date(&date)?;

    let url = metadata.url.unwrap_or_default();
    let mut slug = slug_from_url(&url);
    if slug.is_empty() {
        slug = fallback_slug.to_string();
    }

    Ok(PostRecord {
        title,
        published_at,
        slug,
        url,
        tags: metadata.tags,
        categories: metadata.categories,
        content_html,
        language: metadata
            .lang
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        shortlink: metadata.shortlink,
        excerpt: metadata.excerpt,
        post_id: None,
    })
}
