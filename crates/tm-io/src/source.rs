//! Text sources.

use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tm_core::GrowableBuffer;
use tracing::debug;

/// Something that supplies bytes to the processor.
pub trait TextSource {
    /// Populate the source. Called once per run, before [`TextSource::data`].
    fn read_data(&mut self) -> Result<()>;

    /// The bytes read, or `None` if nothing was read.
    fn data(&self) -> Option<&[u8]>;
}

/// Whole-file source. A missing or empty file yields no data.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    buffer: GrowableBuffer,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: GrowableBuffer::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn read_data(&mut self) -> Result<()> {
        self.buffer.clear();
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        self.buffer.extend_from_slice(&bytes);
        debug!(path = %self.path.display(), bytes = bytes.len(), "file source read");
        Ok(())
    }

    fn data(&self) -> Option<&[u8]> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.as_slice())
        }
    }
}

enum ConsoleInput {
    /// Process stdin, locked only for the duration of one read.
    Stdin,
    Reader(Box<dyn BufRead>),
}

impl ConsoleInput {
    fn read_line(&mut self, line: &mut Vec<u8>) -> io::Result<usize> {
        match self {
            ConsoleInput::Stdin => io::stdin().lock().read_until(b'\n', line),
            ConsoleInput::Reader(reader) => reader.read_until(b'\n', line),
        }
    }
}

impl fmt::Debug for ConsoleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleInput::Stdin => f.write_str("Stdin"),
            ConsoleInput::Reader(_) => f.write_str("Reader"),
        }
    }
}

/// Reads one line (without its `\n`) from stdin or a given reader.
///
/// Any number of stdin sources can coexist; each takes the stdin lock only
/// inside [`TextSource::read_data`].
#[derive(Debug)]
pub struct ConsoleSource {
    input: ConsoleInput,
    prompt: Option<String>,
    buffer: Option<GrowableBuffer>,
}

impl ConsoleSource {
    pub fn stdin() -> Self {
        Self::with_input(ConsoleInput::Stdin)
    }

    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self::with_input(ConsoleInput::Reader(Box::new(reader)))
    }

    fn with_input(input: ConsoleInput) -> Self {
        Self {
            input,
            prompt: None,
            buffer: None,
        }
    }

    /// Text printed to stdout before reading.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

impl TextSource for ConsoleSource {
    fn read_data(&mut self) -> Result<()> {
        if let Some(prompt) = &self.prompt {
            let mut stdout = io::stdout().lock();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }

        let mut line = Vec::new();
        self.input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        self.buffer = Some(GrowableBuffer::from(line.as_slice()));
        Ok(())
    }

    fn data(&self) -> Option<&[u8]> {
        self.buffer.as_ref().map(GrowableBuffer::as_slice)
    }
}

/// Fixed in-memory text.
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: GrowableBuffer,
}

impl InlineSource {
    pub fn new(text: impl AsRef<[u8]>) -> Self {
        Self {
            text: GrowableBuffer::from(text.as_ref()),
        }
    }
}

impl TextSource for InlineSource {
    fn read_data(&mut self) -> Result<()> {
        Ok(())
    }

    fn data(&self) -> Option<&[u8]> {
        Some(self.text.as_slice())
    }
}
