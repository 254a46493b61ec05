/// A fully aggregated multipart part, as produced by
/// [`crate::parser::MultipartParser::next_part`].
///
/// Classification follows the presence of a `filename` parameter on the part's
/// `content-disposition` header: its absence means [`Part::Field`], its
/// presence means [`Part::File`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A plain form field: a `content-disposition` with a `name` but no
    /// `filename` parameter.
    Field {
        /// The `name` parameter, exactly as written on the wire (quotes, if
        /// any, are retained).
        name: String,
        /// The concatenated body bytes.
        data: Vec<u8>,
        /// The part's `content-type` header value, if present.
        content_type: Option<String>,
    },
    /// A file upload field: a `content-disposition` with both `name` and
    /// `filename` parameters.
    File {
        /// The `name` parameter, exactly as written on the wire.
        name: String,
        /// The `filename` parameter, exactly as written on the wire.
        filename: String,
        /// The concatenated body bytes.
        data: Vec<u8>,
        /// The part's `content-type` header value, if present.
        content_type: Option<String>,
    },
}

impl Part {
    /// Returns the part's `name` parameter.
    pub fn name(&self) -> &str {
        match self {
            Self::Field { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Returns the part's body bytes.
    pub fn data(&self) -> &[u8] {
        match self {
            Self::Field { data, .. } | Self::File { data, .. } => data,
        }
    }

    /// Returns the part's `content-type` header value, if present.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Field { content_type, .. } | Self::File { content_type, .. } => {
                content_type.as_deref()
            }
        }
    }

    /// Returns `true` if this part carries a `filename` parameter.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}
