use thiserror::Error;

/// Failures raised while constructing or driving a [`crate::parser::MultipartParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MultipartError {
    /// The configured boundary token fell outside the 1-70 byte range permitted by
    /// RFC 2046 §5.1.1.
    #[error("Boundary length must be between 1 and 70 characters.")]
    InvalidBoundary,
    /// A part's header block ended without a `content-disposition` header.
    #[error("Missing content-disposition header")]
    MissingContentDisposition,
    /// A `CR` encountered while scanning a body delimiter was not followed by `LF`.
    #[error("Invalid line break after delimiter")]
    InvalidLineBreakAfterDelimiter,
    /// A header line could not be split into a name and a value.
    #[error("Malformed header line")]
    MalformedHeader,
    /// A `Content-Type` value was rejected while extracting a multipart boundary.
    #[error("{message}")]
    InvalidContentType {
        /// Description of why the `Content-Type` value was rejected.
        message: String,
    },
}
