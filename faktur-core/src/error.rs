use thiserror::Error;

/// Errors a render can surface.
///
/// Rendering itself is pure layout arithmetic; the only fallible step is
/// serializing the finished page to a buffer. Malformed invoice data is a
/// caller precondition, not an error variant, and unknown template ids
/// resolve to the default theme rather than failing.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PDF serialization failed.
    #[error("pdf serialization failed: {0}")]
    Io(#[from] std::io::Error),
}
