//! Byte and substring removal.

use crate::traits::Transform;
use tm_core::{GrowableBuffer, Result, TmError};

/// Offset of the leftmost occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Remove every non-overlapping leftmost occurrence of `needle`.
pub fn remove_substring(bytes: &[u8], needle: &[u8]) -> GrowableBuffer {
    if needle.is_empty() {
        return GrowableBuffer::from(bytes);
    }
    let mut out = GrowableBuffer::new();
    let mut rest = bytes;
    while let Some(at) = find(rest, needle) {
        out.extend_from_slice(&rest[..at]);
        rest = &rest[at + needle.len()..];
    }
    out.extend_from_slice(rest);
    out
}

/// Left-compact `bytes` in place, keeping bytes for which `keep` holds.
/// Returns the new logical length.
fn compact(bytes: &mut [u8], keep: impl Fn(u8) -> bool) -> usize {
    let mut write = 0;
    for read in 0..bytes.len() {
        let byte = bytes[read];
        if keep(byte) {
            bytes[write] = byte;
            write += 1;
        }
    }
    write
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveSubstring {
    needle: Vec<u8>,
}

impl RemoveSubstring {
    pub fn new(needle: impl Into<Vec<u8>>) -> Result<Self> {
        let needle = needle.into();
        if needle.is_empty() {
            return Err(TmError::InvalidConfig(
                "remove_substring needs a non-empty needle".into(),
            ));
        }
        Ok(Self { needle })
    }
}

impl Transform for RemoveSubstring {
    fn name(&self) -> &'static str {
        "remove_substring"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let out = remove_substring(buffer.content(), &self.needle);
        buffer.replace_with(out);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveCharacter {
    byte: u8,
}

impl RemoveCharacter {
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }

    /// Buffers hold single-byte code units, so only ASCII characters are accepted.
    pub fn from_char(c: char) -> Result<Self> {
        if !c.is_ascii() {
            return Err(TmError::InvalidConfig(format!(
                "remove_character needs an ASCII character, got {c:?}"
            )));
        }
        Ok(Self::new(c as u8))
    }
}

impl Transform for RemoveCharacter {
    fn name(&self) -> &'static str {
        "remove_character"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let kept = compact(buffer.as_mut_slice(), |b| b != self.byte);
        buffer.truncate(kept);
        Ok(())
    }
}

/// Drops bytes classified by [`u8::is_ascii_punctuation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovePunctuation;

impl Transform for RemovePunctuation {
    fn name(&self) -> &'static str {
        "remove_punctuation"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let out: GrowableBuffer = buffer
            .content()
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_punctuation())
            .collect();
        buffer.replace_with(out);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveNewline;

impl Transform for RemoveNewline {
    fn name(&self) -> &'static str {
        "remove_newline"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let kept = compact(buffer.as_mut_slice(), |b| b != b'\n');
        buffer.truncate(kept);
        Ok(())
    }
}
