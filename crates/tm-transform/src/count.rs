//! Counting transforms: the buffer is replaced by a decimal count.

use crate::traits::Transform;
use tm_core::{GrowableBuffer, Result};

fn decimal(count: usize) -> GrowableBuffer {
    GrowableBuffer::from(count.to_string().as_str())
}

/// Counts `\n` bytes only; a final line without a delimiter is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountLines;

impl Transform for CountLines {
    fn name(&self) -> &'static str {
        "count_lines"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let lines = buffer.content().iter().filter(|&&b| b == b'\n').count();
        buffer.replace_with(decimal(lines));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSymbols;

impl Transform for CountSymbols {
    fn name(&self) -> &'static str {
        "count_symbols"
    }

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()> {
        let symbols = buffer.content().len();
        buffer.replace_with(decimal(symbols));
        Ok(())
    }
}
