//! Boundary detection for JSON embedded in surrounding prose
//!
//! The scanner commits to whichever delimiter (`{` or `[`) appears first and
//! tracks nesting depth for that pair only. Quotes, backslash escapes and the
//! other delimiter pair never change depth while inside a string. Matching
//! escape-aware brackets is not a regular language, so this is a byte-level
//! automaton rather than a pattern.

/// Whether the scanner is inside a string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    OutsideString,
    InsideString,
}

/// The delimiter pair the scanner committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `{` ... `}`
    Object,
    /// `[` ... `]`
    Array,
}

impl Delimiter {
    #[must_use]
    pub fn open(self) -> u8 {
        match self {
            Delimiter::Object => b'{',
            Delimiter::Array => b'[',
        }
    }

    #[must_use]
    pub fn close(self) -> u8 {
        match self {
            Delimiter::Object => b'}',
            Delimiter::Array => b']',
        }
    }

    fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Delimiter::Object),
            b'[' => Some(Delimiter::Array),
            _ => None,
        }
    }
}

/// Outcome of feeding one byte to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    Continue,
    /// Depth returned to zero on this byte
    Closed,
}

/// Escape-aware bracket matcher over one delimiter pair
#[derive(Debug, Clone)]
pub struct BoundaryScanner {
    delimiter: Delimiter,
    state: ScanState,
    escaped: bool,
    depth: usize,
}

impl BoundaryScanner {
    #[must_use]
    pub fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            state: ScanState::OutsideString,
            escaped: false,
            depth: 0,
        }
    }

    /// Advance the automaton by one byte
    pub fn feed(&mut self, byte: u8) -> ScanStep {
        if self.escaped {
            self.escaped = false;
            return ScanStep::Continue;
        }

        match (self.state, byte) {
            (_, b'\\') => self.escaped = true,
            (ScanState::OutsideString, b'"') => self.state = ScanState::InsideString,
            (ScanState::InsideString, b'"') => self.state = ScanState::OutsideString,
            (ScanState::InsideString, _) => {}
            (ScanState::OutsideString, b) if b == self.delimiter.open() => self.depth += 1,
            (ScanState::OutsideString, b) if b == self.delimiter.close() => {
                // a stray close before any open is not ours to balance
                if self.depth > 0 {
                    self.depth -= 1;
                    if self.depth == 0 {
                        return ScanStep::Closed;
                    }
                }
            }
            (ScanState::OutsideString, _) => {}
        }

        ScanStep::Continue
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub fn escape_pending(&self) -> bool {
        self.escaped
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Byte range of the first balanced JSON object or array in `text`,
/// closing delimiter included
#[must_use]
pub fn find_json_bounds(text: &str) -> Option<std::ops::Range<usize>> {
    let bytes = text.as_bytes();
    let (start, delimiter) = bytes
        .iter()
        .enumerate()
        .find_map(|(i, &b)| Delimiter::from_open(b).map(|d| (i, d)))?;

    let mut scanner = BoundaryScanner::new(delimiter);
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if scanner.feed(byte) == ScanStep::Closed {
            return Some(start..start + offset + 1);
        }
    }

    None
}

/// Extract the first balanced JSON value from noisy text.
///
/// Returns the input unchanged when there is no `{`/`[` or the value never
/// closes, leaving the parse error to the decoder.
#[must_use]
pub fn extract_json(text: &str) -> &str {
    match find_json_bounds(text) {
        Some(range) => &text[range],
        None => {
            tracing::warn!(len = text.len(), "no balanced JSON value found, passing input through");
            text
        }
    }
}
