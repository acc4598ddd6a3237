//! Line tables for line-oriented transforms.
//!
//! A [`LineTable`] borrows the lines of a byte slice split on `\n`. Empty
//! segments are skipped, so `"a\n\nb\n"` has two lines. Size bounds come from
//! [`LineLimits`]; exceeding them is either an error or a logged truncation,
//! never a silent loss.

use crate::buffer::GrowableBuffer;
use crate::error::{Result, TmError};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_MAX_LINES: usize = 1000;
pub const DEFAULT_MAX_LINE_LEN: usize = 1000;

/// What to do when a table bound is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail with `LineTableOverflow` / `LineTooLong`.
    #[default]
    Strict,
    /// Keep the first `max_lines` lines, cut long lines to `max_line_len`, log a warning.
    Truncate,
}

/// Bounds for a [`LineTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLimits {
    pub max_lines: usize,
    pub max_line_len: usize,
    pub policy: OverflowPolicy,
}

impl LineLimits {
    pub fn new(max_lines: usize, max_line_len: usize) -> Self {
        Self {
            max_lines,
            max_line_len,
            policy: OverflowPolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for LineLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES, DEFAULT_MAX_LINE_LEN)
    }
}

/// Ordered, bounded collection of line views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable<'a> {
    lines: Vec<&'a [u8]>,
    dropped_lines: usize,
    truncated_lines: usize,
}

impl<'a> LineTable<'a> {
    /// Split `bytes` on `\n` under the given limits.
    pub fn build(bytes: &'a [u8], limits: &LineLimits) -> Result<Self> {
        Self::build_filtered(bytes, limits, |_| true)
    }

    /// Like [`LineTable::build`], but only lines accepted by `keep` are stored.
    ///
    /// `max_lines` bounds the stored lines, so rejected lines never overflow
    /// the table. `max_line_len` applies to every line, and `keep` sees the
    /// line after any cut.
    pub fn build_filtered<F>(bytes: &'a [u8], limits: &LineLimits, mut keep: F) -> Result<Self>
    where
        F: FnMut(&'a [u8]) -> bool,
    {
        let mut table = LineTable {
            lines: Vec::new(),
            dropped_lines: 0,
            truncated_lines: 0,
        };

        for line in bytes.split(|&b| b == b'\n').filter(|l| !l.is_empty()) {
            let (line, cut) = if line.len() > limits.max_line_len {
                match limits.policy {
                    OverflowPolicy::Strict => {
                        return Err(TmError::LineTooLong {
                            line: table.lines.len(),
                            len: line.len(),
                            max_len: limits.max_line_len,
                        })
                    }
                    OverflowPolicy::Truncate => (&line[..limits.max_line_len], true),
                }
            } else {
                (line, false)
            };

            if !keep(line) {
                continue;
            }

            if table.lines.len() == limits.max_lines {
                match limits.policy {
                    OverflowPolicy::Strict => {
                        return Err(TmError::LineTableOverflow {
                            max_lines: limits.max_lines,
                        })
                    }
                    OverflowPolicy::Truncate => {
                        table.dropped_lines += 1;
                        continue;
                    }
                }
            }

            if cut {
                table.truncated_lines += 1;
            }
            table.lines.push(line);
        }

        if table.dropped_lines > 0 || table.truncated_lines > 0 {
            warn!(
                dropped = table.dropped_lines,
                truncated = table.truncated_lines,
                max_lines = limits.max_lines,
                max_line_len = limits.max_line_len,
                "line table limits exceeded, input truncated"
            );
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[&'a [u8]] {
        &self.lines
    }

    /// Lines discarded because the table was full.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Lines cut to `max_line_len`.
    pub fn truncated_lines(&self) -> usize {
        self.truncated_lines
    }

    /// Byte-wise lexicographic sort. Ties are not kept in input order.
    pub fn sort(&mut self) {
        self.lines.sort_unstable();
    }

    /// Rejoin with `\n` separators, no trailing delimiter.
    pub fn join(&self) -> GrowableBuffer {
        let mut out = GrowableBuffer::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(line);
        }
        out
    }
}
