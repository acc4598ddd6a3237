//! Substring replacement.

use crate::traits::Transform;
use tm_core::{GrowableBuffer, Result};

/// Replace non-overlapping leftmost occurrences of `old` with `new`.
///
/// An empty `old` leaves the input unchanged.
pub fn replace_substring(bytes: &[u8], old: &[u8], new: &[u8]) -> GrowableBuffer {
    if old.is_empty() {
        return GrowableBuffer::from(bytes);
    }
    let mut out = GrowableBuffer::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(old) {
            out.extend_from_slice(new);
            i += old.len();
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}

/// Either side may be absent, in which case the transform does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceSubstring {
    old: Option<Vec<u8>>,
    new: Option<Vec<u8>>,
}

impl ReplaceSubstring {
    pub fn new(old: impl Into<Vec<u8>>, new: impl Into<Vec<u8>>) -> Self {
        Self {
            old: Some(old.into()),
            new: Some(new.into()),
        }
    }

    pub fn from_parts(old: Option<Vec<u8>>, new: Option<Vec<u8>>) -> Self {
        Self { old, new }
    }
}

impl Transform for ReplaceSubstring {
    fn name(&self) -> &'static str {
        "replace_substring"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let (Some(old), Some(new)) = (&self.old, &self.new) else {
            return Ok(());
        };
        if old.is_empty() {
            return Ok(());
        }
        let out = replace_substring(buffer.as_slice(), old, new);
        buffer.replace_with(out);
        Ok(())
    }
}
