#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Incremental `multipart/form-data` parser.
//!
//! [`MultipartParser`] consumes arbitrarily chunked bytes and produces a
//! deterministic sequence of [`Event`]s describing the multipart structure
//! (RFC 2046 §5.1, RFC 7578), without requiring the full message in memory.
//! Feed bytes with [`MultipartParser::parse`], then drain either the raw event
//! stream with [`MultipartParser::next_event`] or fully aggregated
//! [`Part`]s with [`MultipartParser::next_part`].
//!
//! ```
//! use formstream::MultipartParser;
//!
//! let mut parser = MultipartParser::new("boundary").unwrap();
//! parser
//!     .parse(b"--boundary\r\ncontent-disposition: form-data; name=\"field\"\r\n\r\nhi\r\n--boundary--")
//!     .unwrap();
//!
//! let part = parser.next_part().unwrap();
//! assert_eq!(part.data(), b"hi");
//! ```

/// Parser configuration surface.
pub mod config;
/// Error types exposed by this crate.
pub mod error;
/// Structural parse events.
pub mod event;
/// Aggregated part output.
pub mod part;
/// The incremental state machine and its supporting components.
pub mod parser;

pub use config::{MultipartParserBuilder, ParserConfig};
pub use error::MultipartError;
pub use event::Event;
pub use part::Part;
pub use parser::{MultipartParser, ParserState, extract_boundary};
