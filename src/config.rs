/// Construction-time tuning knobs for a [`crate::parser::MultipartParser`].
///
/// These are parser mechanics, not quota enforcement: there is no field here for
/// maximum part size or count, since policing those remains the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Capacity, in bytes, reserved up front in the parser's internal buffer.
    pub initial_capacity: usize,
    /// How many consumed-but-retained leading bytes accumulate in the internal
    /// buffer before it is compacted with [`Vec::drain`].
    pub compaction_threshold: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8 * 1024,
            compaction_threshold: 64 * 1024,
        }
    }
}

impl ParserConfig {
    /// Creates a default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builder for [`ParserConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipartParserBuilder {
    config: ParserConfig,
}

impl MultipartParserBuilder {
    /// Creates a builder seeded with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial buffer capacity hint, in bytes.
    pub fn initial_capacity(mut self, bytes: usize) -> Self {
        self.config.initial_capacity = bytes;
        self
    }

    /// Sets the compaction threshold, in bytes.
    pub fn compaction_threshold(mut self, bytes: usize) -> Self {
        self.config.compaction_threshold = bytes;
        self
    }

    /// Finalizes and returns the configuration.
    pub fn build(self) -> ParserConfig {
        self.config
    }
}
