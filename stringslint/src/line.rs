//! Line-level parsing for Apple `.strings` files.
//!
//! This is the single key/value extraction point for the whole crate; every
//! caller that needs to know whether a line is a `"key" = "value";` pair goes
//! through [`Line::parse`].

use serde::Serialize;

/// One physical line of a `.strings` file.
///
/// `key` and `value` are extracted once, at parse time, and are never
/// re-derived from `text`. Mutating operations rewrite `text` only; a line is
/// treated as a key-value pair for its whole lifetime based on the parse
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Extracted key, empty if the line is not a key-value pair.
    pub key: String,
    /// Extracted value, empty if the line is not a key-value pair.
    pub value: String,
    /// Raw text of the line, preserved verbatim for non-entry lines.
    pub text: String,
    /// 1-based line number in the original file. Informational only; not
    /// re-validated after mutation.
    pub line_number: usize,
}

impl Line {
    /// Parse one raw line.
    ///
    /// The line is split on the first `=`. If none is present the whole line
    /// is kept as opaque text (comments, blank separators). A `=` inside a
    /// quoted key mis-splits at the first occurrence; this is an accepted
    /// approximation, not a grammar-aware parser.
    pub fn parse(text: &str, line_number: usize) -> Self {
        let mut line = Line {
            key: String::new(),
            value: String::new(),
            text: text.to_string(),
            line_number,
        };

        if let Some((left, right)) = text.split_once('=') {
            line.key = left
                .trim_matches(|c: char| c == '"' || c.is_whitespace())
                .to_string();
            line.value = strip_value(right);
        }

        line
    }

    /// Whether this line was recognized as a `"key" = "value";` pair.
    pub fn is_key_value(&self) -> bool {
        !self.key.is_empty()
    }

    /// A blank separator line, as inserted between key groups when sorting.
    pub fn separator() -> Self {
        Line {
            key: String::new(),
            value: String::new(),
            text: String::new(),
            line_number: 0,
        }
    }

    /// The bare key/value pair for this line, without line metadata.
    pub fn entry(&self) -> Option<Entry> {
        if self.is_key_value() {
            Some(Entry {
                key: self.key.clone(),
                value: self.value.clone(),
            })
        } else {
            None
        }
    }

    /// The canonical form of this line: surrounding whitespace trimmed, and
    /// key-value pairs reassembled as `"key" = "value";` with exactly one
    /// trailing semicolon.
    pub(crate) fn sanitized_text(&self) -> String {
        if self.is_key_value() {
            format!("\"{}\" = \"{}\";", self.key, self.value)
        } else {
            self.text.trim().to_string()
        }
    }
}

/// A bare key/value pair without line metadata, used where full [`Line`]
/// fidelity is unneeded (JSON reports). Not interchangeable with `Line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

// Right-hand side of the first `=`: surrounding whitespace, trailing
// semicolons, and one pair of surrounding quotes stripped.
fn strip_value(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches(';').trim_end();
    let trimmed = trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(trimmed);
    trimmed.to_string()
}
