#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Run incomplete: {skipped} record(s) skipped, {failed} submission(s) failed")]
    Incomplete { skipped: usize, failed: usize },
}
