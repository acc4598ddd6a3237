//! Whole-line transforms built on [`LineTable`].

use crate::removal::find;
use crate::traits::Transform;
use std::collections::HashSet;
use tm_core::{GrowableBuffer, LineLimits, LineTable, Result};

/// Keeps lines that do not contain `needle`. An empty needle drops every line.
///
/// Only kept lines count against `max_lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLinesContaining {
    needle: Vec<u8>,
    limits: LineLimits,
}

impl RemoveLinesContaining {
    pub fn new(needle: impl Into<Vec<u8>>, limits: LineLimits) -> Self {
        Self {
            needle: needle.into(),
            limits,
        }
    }
}

impl Transform for RemoveLinesContaining {
    fn name(&self) -> &'static str {
        "remove_lines_containing"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let table = LineTable::build_filtered(buffer.content(), &self.limits, |line| {
            find(line, &self.needle).is_none()
        })?;
        let out = table.join();
        buffer.replace_with(out);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSortLines {
    limits: LineLimits,
}

impl LexSortLines {
    pub fn new(limits: LineLimits) -> Self {
        Self { limits }
    }
}

impl Transform for LexSortLines {
    fn name(&self) -> &'static str {
        "lex_sort_lines"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let mut table = LineTable::build(buffer.content(), &self.limits)?;
        table.sort();
        let out = table.join();
        buffer.replace_with(out);
        Ok(())
    }
}

/// Keeps the first occurrence of each line. `max_lines` bounds distinct lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveDuplicateLines {
    limits: LineLimits,
}

impl RemoveDuplicateLines {
    pub fn new(limits: LineLimits) -> Self {
        Self { limits }
    }
}

impl Transform for RemoveDuplicateLines {
    fn name(&self) -> &'static str {
        "remove_duplicate_lines"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let out = {
            let mut seen: HashSet<&[u8]> = HashSet::new();
            let table =
                LineTable::build_filtered(buffer.content(), &self.limits, |line| seen.insert(line))?;
            table.join()
        };
        buffer.replace_with(out);
        Ok(())
    }
}
