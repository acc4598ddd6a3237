//! Newline insertion: after sentences, after words, and at a column limit.

use crate::traits::Transform;
use tm_core::{GrowableBuffer, Result, TmError};

/// Whitespace as the C locale classifies it (includes vertical tab).
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn is_sentence_end(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?')
}

pub fn newline_after_sentence(bytes: &[u8]) -> GrowableBuffer {
    let mut out = GrowableBuffer::new();
    for (i, &byte) in bytes.iter().enumerate() {
        out.push(byte);
        if !is_sentence_end(byte) {
            continue;
        }
        if let Some(&next) = bytes.get(i + 1) {
            if !matches!(next, b'\n' | b'.' | 0) {
                out.push(b'\n');
            }
        }
    }
    out
}

pub fn newline_after_word(bytes: &[u8]) -> GrowableBuffer {
    let mut out = GrowableBuffer::new();
    let mut in_word = false;
    for &byte in bytes {
        out.push(byte);
        if is_c_space(byte) {
            if in_word {
                out.push(b'\n');
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }
    out
}

/// Insert a newline before the nearest space once a line reaches `max_chars`.
///
/// The scan stays inside the current line and never considers the line's
/// first byte, so every insertion shortens the line. A line without such a
/// space is left as is.
pub fn wrap_at_column(buffer: &GrowableBuffer, max_chars: usize) -> Result<GrowableBuffer> {
    let mut work = buffer.clone();
    let mut line_start = 0;
    let mut line_len = 0;
    let mut i = 0;

    while i < work.len() {
        if work.get(i)? == b'\n' {
            line_start = i + 1;
            line_len = 0;
        } else {
            line_len += 1;
        }

        if line_len >= max_chars {
            let bytes = work.as_slice();
            let space = (line_start + 1..=i).rev().find(|&j| bytes[j] == b' ');
            if let Some(j) = space {
                work.insert_at(work.begin() + j, b'\n')?;
                line_start = j + 1;
                // the current byte moved one slot right
                i += 1;
                line_len = i - line_start + 1;
            }
        }
        i += 1;
    }
    Ok(work)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddNewlineAfterSentence;

impl Transform for AddNewlineAfterSentence {
    fn name(&self) -> &'static str {
        "add_newline_after_sentence"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let out = newline_after_sentence(buffer.as_slice());
        buffer.replace_with(out);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddNewlineAfterWord;

impl Transform for AddNewlineAfterWord {
    fn name(&self) -> &'static str {
        "add_newline_after_word"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let out = newline_after_word(buffer.as_slice());
        buffer.replace_with(out);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapAtColumn {
    max_chars: usize,
}

impl WrapAtColumn {
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(TmError::InvalidConfig(
                "wrap_at_column.max_chars must be at least 1".into(),
            ));
        }
        Ok(Self { max_chars })
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl Transform for WrapAtColumn {
    fn name(&self) -> &'static str {
        "wrap_at_column"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let out = wrap_at_column(buffer, self.max_chars)?;
        buffer.replace_with(out);
        Ok(())
    }
}
