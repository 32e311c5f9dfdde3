//! Dump conversion errors.

/// Failures while converting a dump. Any error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// The dump is not well-formed XML.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Reading the dump or writing the script failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for dump results.
pub type Result<T> = std::result::Result<T, DumpError>;
