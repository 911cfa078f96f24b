//! Field extraction from rendered Hugo pages.
//!
//! Each extractor is a pure function over a parsed document so it can be
//! exercised against fixture markup without touching the filesystem. The
//! selectors target the PaperMod theme's markup, which is what the source
//! blog was built with.

use scraper::{Html, Selector};
use thiserror::Error;

use crate::dates::{parse_post_date, DateError};
use crate::post::{slug_from_url, PostRecord, DEFAULT_LANGUAGE};

/// Why a page produced no record.
///
/// Every variant is a per-page skip: the crawl logs it and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("title not found")]
    MissingTitle,

    #[error("date not found")]
    MissingDate,

    #[error("content not found")]
    MissingContent,

    #[error(transparent)]
    BadDate(#[from] DateError),
}

/// Post heading: `h1.post-title.entry-hint-parent`, trimmed text.
pub fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1.post-title.entry-hint-parent").unwrap();
    let title = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())?;
    (!title.is_empty()).then_some(title)
}

/// Publish date text: the `title` attribute of the first populated
/// `span[title]` inside `div.post-meta`.
pub fn extract_date_text(document: &Html) -> Option<String> {
    let meta = Selector::parse("div.post-meta").unwrap();
    let span = Selector::parse("span[title]").unwrap();
    document.select(&meta).next().and_then(|container| {
        container
            .select(&span)
            .filter_map(|el| el.value().attr("title"))
            .find(|value| !value.trim().is_empty())
            .map(|value| value.to_string())
    })
}

/// Post body: the full outer HTML of `div.post-content`, wrapping tag
/// included.
pub fn extract_content(document: &Html) -> Option<String> {
    let selector = Selector::parse("div.post-content").unwrap();
    document.select(&selector).next().map(|el| el.html())
}

/// Tags: the trimmed text of each link inside the first `ul.post-tags`,
/// in document order. An absent list is an empty vec, not a failure.
pub fn extract_tags(document: &Html) -> Vec<String> {
    let list = Selector::parse("ul.post-tags").unwrap();
    let link = Selector::parse("a").unwrap();
    document
        .select(&list)
        .next()
        .map(|container| {
            container
                .select(&link)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Category: the third link of the breadcrumb trail, when the trail has more
/// than two links. The first two are the home and section crumbs.
pub fn extract_categories(document: &Html) -> Vec<String> {
    let trail = Selector::parse("div.breadcrumbs").unwrap();
    let link = Selector::parse("a").unwrap();
    let Some(container) = document.select(&trail).next() else {
        return Vec::new();
    };
    let links: Vec<_> = container.select(&link).collect();
    if links.len() > 2 {
        vec![links[2].text().collect::<String>().trim().to_string()]
    } else {
        Vec::new()
    }
}

/// Extract a full record from one rendered page.
///
/// `url` is the page's path relative to the crawl root, trailing-slash
/// normalized; the slug is its last segment.
pub fn extract_post(html: &str, url: &str) -> Result<PostRecord, ExtractError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document).ok_or(ExtractError::MissingTitle)?;
    let date_text = extract_date_text(&document).ok_or(ExtractError::MissingDate)?;
    let published_at = parse_post_date(&date_text)?;
    let content_html = extract_content(&document).ok_or(ExtractError::MissingContent)?;

    Ok(PostRecord {
        title,
        published_at,
        slug: slug_from_url(url),
        url: url.to_string(),
        tags: extract_tags(&document),
        categories: extract_categories(&document),
        content_html,
        language: DEFAULT_LANGUAGE.to_string(),
        shortlink: None,
        excerpt: None,
        post_id: None,
    })
}
