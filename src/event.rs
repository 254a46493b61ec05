/// A structural event emitted while driving the multipart state machine.
///
/// Events for a given part are always emitted in wire order: zero or more
/// [`Event::Header`] entries, followed by zero or more [`Event::Body`] chunks,
/// followed by exactly one [`Event::PartEnd`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A header line belonging to the part currently being parsed.
    Header {
        /// Lowercased header name.
        name: String,
        /// Header value with surrounding optional whitespace trimmed.
        value: String,
    },
    /// A contiguous run of body bytes for the part currently being parsed.
    ///
    /// A single part's body may be split across several `Body` events as input
    /// chunks arrive; concatenation in emission order reproduces the exact body.
    Body {
        /// Raw, unprocessed body bytes.
        data: Vec<u8>,
    },
    /// Marks the end of the part currently being parsed.
    PartEnd,
}
