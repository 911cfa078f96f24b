use chrono::{DateTime, Utc};
use serde::Serialize;

/// Language assigned to records whose source carries no language tag.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A single post extracted from a source, ready for export or submission.
///
/// Records are constructed once during the crawl/parse phase and never
/// mutated afterwards; both sinks consume them read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    /// Path of the page relative to the crawl root, trailing-slash normalized.
    pub url: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    /// Opaque HTML fragment. Preserved as extracted; only CDATA-safety
    /// processing is applied at serialization time.
    pub content_html: String,
    pub language: String,
    pub shortlink: Option<String>,
    pub excerpt: Option<String>,
    pub post_id: Option<String>,
}

/// JSON body of one `POST {base}/posts` submission.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PostSubmission<'a> {
    pub title: &'a str,
    pub date: String,
    pub slug: &'a str,
    pub shortlink: Option<&'a str>,
    pub tags: &'a [String],
    pub categories: &'a [String],
    pub content: &'a str,
    pub status: &'static str,
    pub lang: &'a str,
}

impl<'a> PostSubmission<'a> {
    /// Build the submission payload for a record.
    ///
    /// Status is always `publish`; switch to `draft` here when testing
    /// against a live site.
    pub fn from_record(record: &'a PostRecord) -> Self {
        Self {
            title: &record.title,
            date: record.published_at.to_rfc3339(),
            slug: &record.slug,
            shortlink: record.shortlink.as_deref(),
            tags: &record.tags,
            categories: &record.categories,
            content: &record.content_html,
            status: "publish",
            lang: &record.language,
        }
    }
}

/// Extract the slug from a URL or path: the last non-empty `/`-separated
/// segment, or the empty string when the path itself is empty.
pub fn slug_from_url(url: &str) -> String {
    url.trim_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Normalize a display label into a URL-safe "nicename": lowercased with
/// spaces replaced by hyphens. No other characters are touched.
pub fn nicename(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> PostRecord {
        PostRecord {
            title: "Hello World".to_string(),
            published_at: Utc.with_ymd_and_hms(2023, 6, 12, 20, 40, 0).unwrap(),
            slug: "hello-world".to_string(),
            url: "2023/hello-world/".to_string(),
            tags: vec!["rust".to_string(), "blogging".to_string()],
            categories: vec!["Open Source".to_string()],
            content_html: "<div class=\"post-content\"><p>Hi</p></div>".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            shortlink: None,
            excerpt: None,
            post_id: None,
        }
    }

    #[test]
    fn test_slug_from_url_last_segment() {
        assert_eq!(slug_from_url("2023/06/12/my-post"), "my-post");
        assert_eq!(slug_from_url("/2023/06/12/my-post/"), "my-post");
        assert_eq!(slug_from_url("public/2024/another-post/"), "another-post");
    }

    #[test]
    fn test_slug_from_url_single_segment() {
        assert_eq!(slug_from_url("my-post"), "my-post");
        assert_eq!(slug_from_url("/my-post/"), "my-post");
    }

    #[test]
    fn test_slug_from_url_skips_empty_segments() {
        assert_eq!(slug_from_url("2023//my-post//"), "my-post");
    }

    #[test]
    fn test_slug_from_url_empty() {
        assert_eq!(slug_from_url(""), "");
        assert_eq!(slug_from_url("/"), "");
        assert_eq!(slug_from_url("///"), "");
    }

    #[test]
    fn test_nicename_lowercase_and_hyphens() {
        assert_eq!(nicename("Open Source"), "open-source");
        assert_eq!(nicename("Rust"), "rust");
    }

    #[test]
    fn test_nicename_other_characters_untouched() {
        assert_eq!(nicename("C++ Tips"), "c++-tips");
        assert_eq!(nicename("a & b"), "a-&-b");
    }

    #[test]
    fn test_submission_fields() {
        let record = record();
        let submission = PostSubmission::from_record(&record);

        assert_eq!(submission.title, "Hello World");
        assert_eq!(submission.date, "2023-06-12T20:40:00+00:00");
        assert_eq!(submission.slug, "hello-world");
        assert_eq!(submission.shortlink, None);
        assert_eq!(submission.tags, &["rust", "blogging"]);
        assert_eq!(submission.categories, &["Open Source"]);
        assert_eq!(submission.status, "publish");
        assert_eq!(submission.lang, "en");
    }

    #[test]
    fn test_submission_json_shape() {
        let record = record();
        let submission = PostSubmission::from_record(&record);
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["status"], "publish");
        assert_eq!(json["lang"], "en");
        assert_eq!(json["shortlink"], serde_json::Value::Null);
        assert_eq!(json["tags"][0], "rust");
        assert_eq!(json["categories"][0], "Open Source");
        assert_eq!(json["content"], record.content_html);
    }
}
