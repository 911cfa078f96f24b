//! WordPress eXtended RSS (WXR 1.2) document rendering.
//!
//! `render` is a pure function from a batch of records to the complete
//! interchange document; writing the file is the shell's job. Free-text
//! fields are XML-escaped or CDATA-wrapped so the document stays well-formed
//! whatever the source pages contained.

use crate::dates::{format_post_date, format_pub_date};
use crate::post::{nicename, PostRecord};

/// Fixed name of the interchange file inside the export directory.
pub const EXPORT_FILE_NAME: &str = "exported_posts.xml";

/// Channel-level data for one export run.
#[derive(Debug, Clone)]
pub struct WxrContext {
    /// Canonical domain used to build item links, e.g. `https://example.com`.
    pub domain: String,
    /// `dc:creator` of every item.
    pub creator: String,
    pub title: String,
    pub description: String,
    pub language: String,
}

impl WxrContext {
    pub fn new(domain: impl Into<String>, creator: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            title: domain.clone(),
            domain,
            creator: creator.into(),
            description: String::new(),
            language: "en".to_string(),
        }
    }
}

/// Escape element text.
fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape a double-quoted attribute value.
fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Wrap a value in CDATA, splitting any embedded `]]>` terminator.
fn cdata(value: &str) -> String {
    format!("<![CDATA[{}]]>", value.replace("]]>", "]]]]><![CDATA[>"))
}

/// Render the full WXR document for a batch of records, in batch order.
///
/// Zero records still produce the envelope and channel header, so the output
/// is always a single well-formed document.
pub fn render(posts: &[PostRecord], context: &WxrContext) -> String {
    let domain = context.domain.trim_end_matches('/');

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
    out.push_str(concat!(
        "<rss version=\"2.0\"",
        " xmlns:excerpt=\"http://wordpress.org/export/1.2/excerpt/\"",
        " xmlns:content=\"http://purl.org/rss/1.0/modules/content/\"",
        " xmlns:wfw=\"http://wellformedweb.org/CommentAPI/\"",
        " xmlns:dc=\"http://purl.org/dc/elements/1.1/\"",
        " xmlns:wp=\"http://wordpress.org/export/1.2/\">\n",
    ));
    out.push_str("<channel>\n");
    out.push_str(&format!("    <title>{}</title>\n", text(&context.title)));
    out.push_str(&format!("    <link>{}</link>\n", text(domain)));
    out.push_str(&format!(
        "    <description>{}</description>\n",
        text(&context.description)
    ));
    out.push_str(&format!(
        "    <language>{}</language>\n",
        text(&context.language)
    ));
    out.push_str("    <wp:wxr_version>1.2</wp:wxr_version>\n");
    out.push_str(&format!(
        "    <wp:base_site_url>{}</wp:base_site_url>\n",
        text(domain)
    ));
    out.push_str(&format!(
        "    <wp:base_blog_url>{}</wp:base_blog_url>\n",
        text(domain)
    ));

    for post in posts {
        render_item(&mut out, post, domain, context);
    }

    out.push_str("</channel>\n");
    out.push_str("</rss>\n");
    out
}

fn render_item(out: &mut String, post: &PostRecord, domain: &str, context: &WxrContext) {
    let link = format!("{}/{}/", domain, post.slug);
    let pub_date = format_pub_date(&post.published_at);
    // The source dates are already treated as GMT, so local and GMT stamps
    // are identical.
    let post_date = format_post_date(&post.published_at);

    out.push_str("    <item>\n");
    out.push_str(&format!("        <title>{}</title>\n", text(&post.title)));
    out.push_str(&format!("        <link>{}</link>\n", text(&link)));
    out.push_str(&format!("        <pubDate>{}</pubDate>\n", pub_date));
    out.push_str(&format!(
        "        <dc:creator>{}</dc:creator>\n",
        text(&context.creator)
    ));
    out.push_str(&format!(
        "        <guid isPermaLink=\"false\">{}</guid>\n",
        text(&link)
    ));
    out.push_str("        <description></description>\n");
    out.push_str(&format!(
        "        <content:encoded>{}</content:encoded>\n",
        cdata(&post.content_html)
    ));
    out.push_str(&format!(
        "        <excerpt:encoded>{}</excerpt:encoded>\n",
        cdata(post.excerpt.as_deref().unwrap_or(""))
    ));
    out.push_str(&format!(
        "        <wp:post_id>{}</wp:post_id>\n",
        text(post.post_id.as_deref().unwrap_or(""))
    ));
    out.push_str(&format!(
        "        <wp:post_date>{}</wp:post_date>\n",
        cdata(&post_date)
    ));
    out.push_str(&format!(
        "        <wp:post_date_gmt>{}</wp:post_date_gmt>\n",
        cdata(&post_date)
    ));
    out.push_str(&format!(
        "        <wp:post_modified>{}</wp:post_modified>\n",
        cdata(&post_date)
    ));
    out.push_str(&format!(
        "        <wp:post_modified_gmt>{}</wp:post_modified_gmt>\n",
        cdata(&post_date)
    ));
    out.push_str("        <wp:comment_status>closed</wp:comment_status>\n");
    out.push_str("        <wp:ping_status>closed</wp:ping_status>\n");
    out.push_str(&format!(
        "        <wp:post_name>{}</wp:post_name>\n",
        text(&post.slug)
    ));
    out.push_str("        <wp:status>publish</wp:status>\n");
    out.push_str("        <wp:post_parent>0</wp:post_parent>\n");
    out.push_str("        <wp:menu_order>0</wp:menu_order>\n");
    out.push_str("        <wp:post_type>post</wp:post_type>\n");
    out.push_str("        <wp:post_password></wp:post_password>\n");
    out.push_str("        <wp:is_sticky>0</wp:is_sticky>\n");

    for category in &post.categories {
        out.push_str(&format!(
            "        <category domain=\"category\" nicename=\"{}\">{}</category>\n",
            attr(&nicename(category)),
            cdata(category)
        ));
    }
    for tag in &post.tags {
        out.push_str(&format!(
            "        <category domain=\"post_tag\" nicename=\"{}\">{}</category>\n",
            attr(&nicename(tag)),
            cdata(tag)
        ));
    }

    out.push_str("        <wp:postmeta>\n");
    out.push_str("            <wp:meta_key>_wp_page_template</wp:meta_key>\n");
    out.push_str("            <wp:meta_value>default</wp:meta_value>\n");
    out.push_str("        </wp:postmeta>\n");
    out.push_str("    </item>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn context() -> WxrContext {
        WxrContext::new("https://blog.example.com", "admin")
    }

    fn record(title: &str, slug: &str) -> PostRecord {
        PostRecord {
            title: title.to_string(),
            published_at: Utc.with_ymd_and_hms(2023, 6, 12, 20, 40, 0).unwrap(),
            slug: slug.to_string(),
            url: format!("2023/{slug}/"),
            tags: Vec::new(),
            categories: Vec::new(),
            content_html: "<div class=\"post-content\"><p>Hi</p></div>".to_string(),
            language: "en".to_string(),
            shortlink: None,
            excerpt: None,
            post_id: None,
        }
    }

    #[test]
    fn test_empty_batch_is_well_formed() {
        let document = render(&[], &context());

        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
        assert!(document.contains("<rss version=\"2.0\""));
        assert!(document.contains("<channel>"));
        assert!(document.contains("<wp:wxr_version>1.2</wp:wxr_version>"));
        assert!(!document.contains("<item>"));
        assert!(document.ends_with("</channel>\n</rss>\n"));
    }

    #[test]
    fn test_items_preserve_batch_order() {
        let posts = vec![
            record("First", "first"),
            record("Second", "second"),
            record("Third", "third"),
        ];
        let document = render(&posts, &context());

        let first = document.find("<title>First</title>").unwrap();
        let second = document.find("<title>Second</title>").unwrap();
        let third = document.find("<title>Third</title>").unwrap();
        assert!(first < second && second < third);
        assert_eq!(document.matches("<item>").count(), 3);
        assert_eq!(document.matches("</item>").count(), 3);
    }

    #[test]
    fn test_link_and_guid_from_domain_and_slug() {
        let document = render(&[record("T", "hello-world")], &context());
        assert!(document.contains("<link>https://blog.example.com/hello-world/</link>"));
        assert!(document.contains(
            "<guid isPermaLink=\"false\">https://blog.example.com/hello-world/</guid>"
        ));
        assert!(document.contains("<wp:post_name>hello-world</wp:post_name>"));
    }

    #[test]
    fn test_date_fields() {
        let document = render(&[record("T", "t")], &context());
        assert!(document.contains("<pubDate>Mon, 12 Jun 2023 20:40:00 +0000</pubDate>"));
        assert!(document
            .contains("<wp:post_date><![CDATA[2023-06-12 20:40:00]]></wp:post_date>"));
        assert!(document
            .contains("<wp:post_date_gmt><![CDATA[2023-06-12 20:40:00]]></wp:post_date_gmt>"));
    }

    #[test]
    fn test_title_markup_is_escaped() {
        let document = render(&[record("Ampersands & <Angles>", "t")], &context());
        assert!(document.contains("<title>Ampersands &amp; &lt;Angles&gt;</title>"));
        assert!(!document.contains("<title>Ampersands & <Angles></title>"));
    }

    #[test]
    fn test_content_cdata_terminator_is_split() {
        let mut post = record("T", "t");
        post.content_html = "<p>a]]>b</p>".to_string();
        let document = render(&[post], &context());

        assert!(document.contains("<content:encoded><![CDATA[<p>a]]]]><![CDATA[>b</p>]]></content:encoded>"));
    }

    #[test]
    fn test_categories_and_tags_with_nicenames() {
        let mut post = record("T", "t");
        post.categories = vec!["Open Source".to_string()];
        post.tags = vec!["C++ Tips".to_string()];
        let document = render(&[post], &context());

        assert!(document.contains(
            "<category domain=\"category\" nicename=\"open-source\"><![CDATA[Open Source]]></category>"
        ));
        assert!(document.contains(
            "<category domain=\"post_tag\" nicename=\"c++-tips\"><![CDATA[C++ Tips]]></category>"
        ));
    }

    #[test]
    fn test_post_id_empty_when_unknown() {
        let document = render(&[record("T", "t")], &context());
        assert!(document.contains("<wp:post_id></wp:post_id>"));

        let mut post = record("T", "t");
        post.post_id = Some("42".to_string());
        let document = render(&[post], &context());
        assert!(document.contains("<wp:post_id>42</wp:post_id>"));
    }

    #[test]
    fn test_fixed_item_fields() {
        let document = render(&[record("T", "t")], &context());
        assert!(document.contains("<wp:status>publish</wp:status>"));
        assert!(document.contains("<wp:post_type>post</wp:post_type>"));
        assert!(document.contains("<wp:comment_status>closed</wp:comment_status>"));
        assert!(document.contains("<dc:creator>admin</dc:creator>"));
        assert!(document.contains("<wp:meta_key>_wp_page_template</wp:meta_key>"));
    }

    #[test]
    fn test_domain_trailing_slash_normalized() {
        let mut ctx = context();
        ctx.domain = "https://blog.example.com/".to_string();
        let document = render(&[record("T", "t")], &ctx);
        assert!(document.contains("<link>https://blog.example.com/t/</link>"));
    }
}
