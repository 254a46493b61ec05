use std::collections::VecDeque;

use crate::config::ParserConfig;
use crate::error::MultipartError;
use crate::event::Event;
use crate::parser::boundary::validate_boundary;
use crate::parser::headers::{ContentDisposition, parse_content_disposition, parse_header_line};
use crate::part::Part;

/// Observable state of a [`MultipartParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Before the first delimiter; bytes are discarded.
    Preamble,
    /// Inside a part's header block.
    Header,
    /// Inside a part's body.
    Body,
    /// Terminal close-delimiter seen; no further events will be produced.
    End,
}

/// Result of a single bounded scan step over the input buffer.
enum Scan {
    /// A transition or emission happened; the caller should scan again.
    Progress,
    /// Not enough buffered input to make further progress this call.
    NeedMore,
}

/// Whether buffered bytes following a boundary token represent a terminal
/// close-delimiter (`--`), the start of the next part (`CRLF`), an
/// indeterminate straddle, or unrelated bytes.
enum Lookahead {
    Terminal,
    NextPart,
    Indeterminate,
    Mismatch,
}

fn classify_lookahead(after: &[u8]) -> Lookahead {
    let terminal = partial_match(after, b"--");
    let next_part = partial_match(after, b"\r\n");

    match (terminal, next_part) {
        (PartialMatch::Full, _) => Lookahead::Terminal,
        (_, PartialMatch::Full) => Lookahead::NextPart,
        (PartialMatch::Partial, _) | (_, PartialMatch::Partial) => Lookahead::Indeterminate,
        (PartialMatch::None, PartialMatch::None) => Lookahead::Mismatch,
    }
}

enum PartialMatch {
    Full,
    Partial,
    None,
}

fn partial_match(haystack: &[u8], needle: &[u8]) -> PartialMatch {
    let n = haystack.len().min(needle.len());
    if haystack[..n] != needle[..n] {
        return PartialMatch::None;
    }
    if haystack.len() >= needle.len() {
        PartialMatch::Full
    } else {
        PartialMatch::Partial
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Longest suffix of `haystack` that is itself a prefix of `needle`.
fn longest_straddle(haystack: &[u8], needle: &[u8]) -> usize {
    let max = haystack.len().min(needle.len().saturating_sub(1));
    for len in (1..=max).rev() {
        if haystack[haystack.len() - len..] == needle[..len] {
            return len;
        }
    }
    0
}

#[derive(Debug, Clone, Default)]
struct PendingPart {
    headers: Vec<(String, String)>,
}

impl PendingPart {
    fn content_disposition(&self) -> Option<ContentDisposition> {
        self.headers
            .iter()
            .rev()
            .find(|(name, _)| name == "content-disposition")
            .map(|(_, value)| parse_content_disposition(value))
    }
}

/// Incremental, push-driven parser for `multipart/form-data` bodies.
///
/// Bytes are fed via [`MultipartParser::parse`]; structural events are drained
/// with [`MultipartParser::next_event`] or, for convenience, fully aggregated
/// parts are drained with [`MultipartParser::next_part`]. The parser never
/// blocks or suspends: `parse` always returns immediately, buffering any bytes
/// it cannot yet interpret.
#[derive(Debug)]
pub struct MultipartParser {
    delimiter: Vec<u8>,
    state: ParserState,
    buffer: Vec<u8>,
    head: usize,
    config: ParserConfig,
    events: VecDeque<Event>,
    pending: PendingPart,
    part_in_progress: bool,
}

impl MultipartParser {
    /// Creates a new parser for the given boundary token, using default
    /// buffering behavior (see [`ParserConfig::default`]).
    ///
    /// # Errors
    ///
    /// Returns [`MultipartError::InvalidBoundary`] when `boundary` is empty or
    /// longer than 70 bytes.
    pub fn new(boundary: impl AsRef<[u8]>) -> Result<Self, MultipartError> {
        Self::with_config(boundary, ParserConfig::default())
    }

    /// Creates a new parser with explicit buffering configuration.
    pub fn with_config(
        boundary: impl AsRef<[u8]>,
        config: ParserConfig,
    ) -> Result<Self, MultipartError> {
        let boundary = boundary.as_ref();
        validate_boundary(boundary)?;

        let mut delimiter = Vec::with_capacity(boundary.len() + 2);
        delimiter.extend_from_slice(b"--");
        delimiter.extend_from_slice(boundary);

        Ok(Self {
            delimiter,
            state: ParserState::Preamble,
            buffer: Vec::with_capacity(config.initial_capacity),
            head: 0,
            config,
            events: VecDeque::new(),
            pending: PendingPart::default(),
            part_in_progress: false,
        })
    }

    /// Returns the parser's current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Returns `true` when the parser is currently positioned inside a part
    /// (between its opening boundary and its closing delimiter).
    pub fn is_reading_part(&self) -> bool {
        self.part_in_progress
    }

    /// Feeds a chunk of input bytes to the parser.
    ///
    /// Bytes may be split arbitrarily across calls; the parser produces the same
    /// event sequence regardless of how the input is chunked. A no-op once
    /// [`ParserState::End`] has been reached.
    pub fn parse(&mut self, chunk: &[u8]) -> Result<(), MultipartError> {
        if self.state == ParserState::End {
            return Ok(());
        }

        self.buffer.extend_from_slice(chunk);
        self.drive()
    }

    /// Pops the oldest pending event, or `None` if the queue is empty.
    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Aggregates buffered events into the next fully-parsed [`Part`].
    ///
    /// Returns `None` when no complete part is currently available: either
    /// parsing has finished, or more input is needed before the in-progress
    /// part can be completed.
    pub fn next_part(&mut self) -> Option<Part> {
        let mut headers: Vec<(String, String)> = Vec::new();
        let mut data = Vec::new();

        loop {
            match self.events.front() {
                Some(Event::Header { .. }) => {
                    if let Some(Event::Header { name, value }) = self.events.pop_front() {
                        headers.push((name, value));
                    }
                }
                Some(Event::Body { .. }) => {
                    if let Some(Event::Body { data: chunk }) = self.events.pop_front() {
                        data.extend_from_slice(&chunk);
                    }
                }
                Some(Event::PartEnd) => {
                    self.events.pop_front();
                    return Some(build_part(headers, data));
                }
                None => break,
            }
        }

        // No `PartEnd` yet: re-queue what was drained so a later call, once more
        // events have arrived, can resume aggregating from where this one stopped.
        if !data.is_empty() {
            self.events.push_front(Event::Body { data });
        }
        for (name, value) in headers.into_iter().rev() {
            self.events.push_front(Event::Header { name, value });
        }
        None
    }

    /// The unconsumed tail of the input buffer.
    fn remaining(&self) -> &[u8] {
        &self.buffer[self.head..]
    }

    /// Marks `n` bytes of `remaining()` as consumed, compacting the backing
    /// buffer once the consumed prefix grows past the configured threshold.
    fn consume(&mut self, n: usize) {
        self.head += n;
        if self.head >= self.config.compaction_threshold {
            self.buffer.drain(..self.head);
            self.head = 0;
        }
    }

    fn drive(&mut self) -> Result<(), MultipartError> {
        loop {
            let outcome = match self.state {
                ParserState::Preamble => self.scan_preamble()?,
                ParserState::Header => self.scan_header()?,
                ParserState::Body => self.scan_body()?,
                ParserState::End => return Ok(()),
            };

            if matches!(outcome, Scan::NeedMore) {
                return Ok(());
            }
        }
    }

    fn scan_preamble(&mut self) -> Result<Scan, MultipartError> {
        let Some(pos) = find_subslice(self.remaining(), &self.delimiter) else {
            let retain = longest_straddle(self.remaining(), &self.delimiter);
            let drop_len = self.remaining().len() - retain;
            self.consume(drop_len);
            return Ok(Scan::NeedMore);
        };

        let after_start = pos + self.delimiter.len();
        match classify_lookahead(&self.remaining()[after_start..]) {
            Lookahead::Terminal => {
                tracing::trace!("multipart parser: terminal boundary reached in preamble");
                self.state = ParserState::End;
                self.buffer.clear();
                self.head = 0;
                Ok(Scan::Progress)
            }
            Lookahead::NextPart => {
                tracing::trace!("multipart parser: opening boundary detected");
                self.consume(after_start + 2);
                self.state = ParserState::Header;
                self.part_in_progress = true;
                self.pending = PendingPart::default();
                Ok(Scan::Progress)
            }
            Lookahead::Indeterminate => {
                self.consume(pos);
                Ok(Scan::NeedMore)
            }
            Lookahead::Mismatch => {
                // Tolerated per RFC 2046 §5.1.1: garbage following a boundary-looking
                // token in the preamble does not abort parsing.
                self.consume(after_start);
                Ok(Scan::Progress)
            }
        }
    }

    fn scan_header(&mut self) -> Result<Scan, MultipartError> {
        let Some(pos) = find_subslice(self.remaining(), b"\r\n") else {
            return Ok(Scan::NeedMore);
        };

        let line: Vec<u8> = self.remaining()[..pos].to_vec();
        self.consume(pos + 2);

        if line.is_empty() {
            if self.pending.content_disposition().is_none() {
                tracing::warn!("multipart parser: missing content-disposition header");
                return Err(MultipartError::MissingContentDisposition);
            }

            tracing::debug!("multipart parser: part headers parsed");
            self.state = ParserState::Body;
            return Ok(Scan::Progress);
        }

        let (name, value) = match parse_header_line(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!("multipart parser: malformed header line");
                return Err(err);
            }
        };
        self.pending.headers.push((name.clone(), value.clone()));
        self.events.push_back(Event::Header { name, value });
        Ok(Scan::Progress)
    }

    fn scan_body(&mut self) -> Result<Scan, MultipartError> {
        let Some(pos) = find_subslice(self.remaining(), &self.delimiter) else {
            // `self.delimiter` is bare `--<boundary>`, with no leading CRLF, so the
            // tail we must hold back has to cover that CRLF too: two bytes for it,
            // plus one more so a lone trailing CR is never mistaken for safe body.
            let retain = self.delimiter.len() + 2;
            let safe_len = self.remaining().len().saturating_sub(retain);
            if safe_len == 0 {
                return Ok(Scan::NeedMore);
            }

            let data = self.remaining()[..safe_len].to_vec();
            self.consume(safe_len);
            self.events.push_back(Event::Body { data });
            return Ok(Scan::Progress);
        };

        let after_start = pos + self.delimiter.len();
        let lookahead = classify_lookahead(&self.remaining()[after_start..]);
        if matches!(lookahead, Lookahead::Indeterminate) {
            return Ok(Scan::NeedMore);
        }

        let remaining = self.remaining();
        let body_end = if pos >= 2 && &remaining[pos - 2..pos] == b"\r\n" {
            pos - 2
        } else {
            pos
        };
        let body: Option<Vec<u8>> = (body_end > 0).then(|| remaining[..body_end].to_vec());

        match lookahead {
            Lookahead::Terminal => {
                if let Some(data) = body {
                    self.events.push_back(Event::Body { data });
                }
                self.events.push_back(Event::PartEnd);
                tracing::trace!("multipart parser: terminal boundary reached");
                self.state = ParserState::End;
                self.part_in_progress = false;
                self.buffer.clear();
                self.head = 0;
                Ok(Scan::Progress)
            }
            Lookahead::NextPart => {
                if let Some(data) = body {
                    self.events.push_back(Event::Body { data });
                }
                self.events.push_back(Event::PartEnd);
                self.consume(after_start + 2);
                tracing::trace!("multipart parser: moving to next part headers");
                self.state = ParserState::Header;
                self.pending = PendingPart::default();
                Ok(Scan::Progress)
            }
            Lookahead::Mismatch => {
                tracing::warn!("multipart parser: invalid line break after delimiter");
                Err(MultipartError::InvalidLineBreakAfterDelimiter)
            }
            Lookahead::Indeterminate => unreachable!("handled above"),
        }
    }
}

fn build_part(headers: Vec<(String, String)>, data: Vec<u8>) -> Part {
    let content_disposition = headers
        .iter()
        .rev()
        .find(|(name, _)| name == "content-disposition")
        .map(|(_, value)| parse_content_disposition(value))
        .unwrap_or_default();
    let content_type = headers
        .iter()
        .rev()
        .find(|(name, _)| name == "content-type")
        .map(|(_, value)| value.clone());
    let name = content_disposition.name.unwrap_or_default();

    match content_disposition.filename {
        Some(filename) => Part::File {
            name,
            filename,
            data,
            content_type,
        },
        None => Part::Field {
            name,
            data,
            content_type,
        },
    }
}
