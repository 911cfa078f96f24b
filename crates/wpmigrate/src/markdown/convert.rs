use std::path::Path;

use crate::prelude::*;

/// How a Markdown body becomes HTML. Selected once at startup from
/// `--parser`; the per-file loop never re-branches on configuration text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Converter {
    /// Render the Markdown body directly
    Plain,
    /// Shell out to `hugo convert toHTML` for Hugo-flavored sources
    Hugo,
    /// Shell out to `jekyll build` for Jekyll sources
    Jekyll,
}

impl Converter {
    /// Convert one source file's body to an HTML fragment.
    ///
    /// The external converters re-read the file themselves, so they receive
    /// the path; the plain renderer works on the already-split body.
    pub async fn convert(&self, file: &Path, body: &str) -> Result<String> {
        match self {
            Self::Plain => Ok(render_markdown(body)),
            Self::Hugo => hugo_convert(file).await,
            Self::Jekyll => jekyll_convert(file).await,
        }
    }
}

/// Render Markdown to HTML with the common extensions enabled.
pub fn render_markdown(body: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_FOOTNOTES);
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(body, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

async fn hugo_convert(file: &Path) -> Result<String> {
    let output = tokio::process::Command::new("hugo")
        .args(["convert", "toHTML"])
        .arg(file)
        .output()
        .await
        .wrap_err("failed to run hugo")?;

    if !output.status.success() {
        return Err(eyre!(
            "Hugo conversion failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

async fn jekyll_convert(file: &Path) -> Result<String> {
    let destination =
        tempfile::tempdir().wrap_err("failed to create jekyll output directory")?;

    let output = tokio::process::Command::new("jekyll")
        .args(["build", "--source"])
        .arg(file)
        .arg("--destination")
        .arg(destination.path())
        .output()
        .await
        .wrap_err("failed to run jekyll")?;

    if !output.status.success() {
        return Err(eyre!(
            "Jekyll conversion failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let rendered = destination.path().join("index.html");
    tokio::fs::read_to_string(&rendered)
        .await
        .wrap_err_with(|| format!("jekyll produced no {}", rendered.display()))
}
