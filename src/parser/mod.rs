/// Boundary validation and `Content-Type` boundary extraction.
pub mod boundary;
/// Header-line and `content-disposition` parsing helpers.
pub mod headers;
/// The incremental state machine.
pub mod machine;

pub use boundary::{extract_boundary, validate_boundary, MAX_BOUNDARY_LEN};
pub use headers::{ContentDisposition, parse_content_disposition, parse_header_line};
pub use machine::{MultipartParser, ParserState};
