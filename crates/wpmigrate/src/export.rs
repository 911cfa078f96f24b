use std::path::{Path, PathBuf};

use crate::prelude::*;
use wpmigrate_core::post::PostRecord;
use wpmigrate_core::wxr::{render, WxrContext, EXPORT_FILE_NAME};

/// Render the batch to WXR and write it as a single file inside
/// `directory`, creating the directory if it does not exist.
pub fn write_export(
    records: &[PostRecord],
    context: &WxrContext,
    directory: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(directory).wrap_err_with(|| {
        format!(
            "failed to create export directory {}",
            directory.display()
        )
    })?;

    let path = directory.join(EXPORT_FILE_NAME);
    std::fs::write(&path, render(records, context))
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_directory_and_writes_file() {
        let base = tempfile::tempdir().unwrap();
        let destination = base.path().join("nested").join("export");
        let context = WxrContext::new("https://example.com", "admin");

        let path = write_export(&[], &context, &destination).unwrap();

        assert_eq!(path, destination.join(EXPORT_FILE_NAME));
        let document = std::fs::read_to_string(&path).unwrap();
        assert!(document.contains("<wp:wxr_version>1.2</wp:wxr_version>"));
        assert!(document.ends_with("</rss>\n"));
    }
}
