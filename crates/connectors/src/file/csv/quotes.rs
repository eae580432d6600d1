//! Raw-byte handling below the tokenizer: leading-space trimming on the way
//! in, quote and noise checks over the bytes of one record.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteViolation {
    /// A `"` inside a field that did not start with a quote.
    Bare { field: usize },
    /// A closing `"` not followed by a delimiter or the end of the record, or
    /// a quoted field that is never closed.
    Extraneous { field: usize },
}

/// Checks RFC 4180 quoting for one record. `field` in the result is 1-based.
///
/// A field only counts as quoted when the quote is its first byte; leading
/// whitespace makes it an unquoted field, as the tokenizer reads it.
pub(crate) fn check_quotes(raw: &[u8], delimiter: u8) -> Result<(), QuoteViolation> {
    let is_terminator = |b: u8| b == b'\n' || b == b'\r';
    let n = raw.len();
    let mut i = 0;
    let mut field = 1;

    loop {
        if i < n && raw[i] == b'"' {
            i += 1;
            loop {
                if i >= n {
                    return Err(QuoteViolation::Extraneous { field });
                }
                if raw[i] == b'"' {
                    if i + 1 < n && raw[i + 1] == b'"' {
                        i += 2;
                        continue;
                    }
                    i += 1;
                    if i >= n || raw[i] == delimiter || is_terminator(raw[i]) {
                        break;
                    }
                    return Err(QuoteViolation::Extraneous { field });
                }
                i += 1;
            }
        } else {
            while i < n && raw[i] != delimiter && !is_terminator(raw[i]) {
                if raw[i] == b'"' {
                    return Err(QuoteViolation::Bare { field });
                }
                i += 1;
            }
        }

        if i < n && raw[i] == delimiter {
            i += 1;
            field += 1;
            continue;
        }
        return Ok(());
    }
}

/// Length of the blank and comment lines the tokenizer skipped before a
/// record, and how many lines they span.
pub(crate) fn leading_noise(raw: &[u8], comment: Option<u8>) -> (usize, u64) {
    let mut i = 0;
    let mut lines = 0;

    while i < raw.len() {
        match raw[i] {
            b'\n' => {
                lines += 1;
                i += 1;
            }
            b'\r' => i += 1,
            b if Some(b) == comment => {
                while i < raw.len() && raw[i] != b'\n' {
                    i += 1;
                }
            }
            _ => break,
        }
    }

    (i, lines)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    /// Just saw a `"` inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// Drops spaces and tabs at the start of each field before the bytes reach
/// the tokenizer, so a quote following the trimmed space still opens a quoted
/// field. Bytes inside quotes are kept as they are. Line terminators are
/// never dropped.
#[derive(Debug, Clone)]
pub(crate) struct LeadingSpaceTrim {
    delimiter: u8,
    state: FieldState,
}

impl LeadingSpaceTrim {
    pub(crate) fn new(delimiter: u8) -> Self {
        LeadingSpaceTrim {
            delimiter,
            state: FieldState::Start,
        }
    }

    /// Filters `bytes` in place and returns how many were kept. State carries
    /// over between calls, so a field may span several reads.
    pub(crate) fn filter_in_place(&mut self, bytes: &mut [u8]) -> usize {
        let mut kept = 0;
        for i in 0..bytes.len() {
            let b = bytes[i];
            if self.keep(b) {
                bytes[kept] = b;
                kept += 1;
            }
        }
        kept
    }

    fn keep(&mut self, b: u8) -> bool {
        let ends_field = b == self.delimiter || b == b'\n' || b == b'\r';
        match self.state {
            FieldState::Start => {
                if b == b' ' || b == b'\t' {
                    return false;
                }
                if b == b'"' {
                    self.state = FieldState::Quoted;
                } else if !ends_field {
                    self.state = FieldState::Unquoted;
                }
            }
            FieldState::Unquoted => {
                if ends_field {
                    self.state = FieldState::Start;
                }
            }
            FieldState::Quoted => {
                if b == b'"' {
                    self.state = FieldState::QuoteInQuoted;
                }
            }
            FieldState::QuoteInQuoted => {
                self.state = if b == b'"' {
                    FieldState::Quoted
                } else if ends_field {
                    FieldState::Start
                } else {
                    FieldState::Unquoted
                };
            }
        }
        true
    }
}
