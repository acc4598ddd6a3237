//! Text outputs.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tm_core::GrowableBuffer;
use tracing::info;

/// Something that consumes the transformed buffer.
pub trait TextOutput {
    fn write_data(&mut self, data: &GrowableBuffer) -> Result<()>;
}

/// Writes the buffer to a writer, stdout by default.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextOutput for ConsoleOutput<W> {
    fn write_data(&mut self, data: &GrowableBuffer) -> Result<()> {
        self.writer.write_all(data.as_slice())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// File output that rolls over to `{base}_{NNN}.{ext}` every `max_bytes` bytes.
///
/// The first file is created on construction. The byte count carries over
/// between `write_data` calls.
#[derive(Debug)]
pub struct RotatingFileOutput {
    base: PathBuf,
    extension: String,
    max_bytes: u64,
    file_index: usize,
    current_size: u64,
    file: File,
}

impl RotatingFileOutput {
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>, max_bytes: u64) -> Result<Self> {
        if max_bytes == 0 {
            bail!("rotating file output needs max_bytes of at least 1");
        }
        let base = base.into();
        let extension = extension.into();
        let path = file_name(&base, &extension, 0);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            base,
            extension,
            max_bytes,
            file_index: 0,
            current_size: 0,
            file,
        })
    }

    /// Path of the file currently being written.
    pub fn current_path(&self) -> PathBuf {
        file_name(&self.base, &self.extension, self.file_index)
    }

    pub fn file_index(&self) -> usize {
        self.file_index
    }

    fn rotate(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file_index += 1;
        let path = self.current_path();
        self.file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.current_size = 0;
        info!(path = %path.display(), "rotated output file");
        Ok(())
    }
}

impl TextOutput for RotatingFileOutput {
    fn write_data(&mut self, data: &GrowableBuffer) -> Result<()> {
        let mut rest = data.as_slice();
        while !rest.is_empty() {
            if self.current_size >= self.max_bytes {
                self.rotate()?;
            }
            let room = (self.max_bytes - self.current_size).min(rest.len() as u64) as usize;
            self.file.write_all(&rest[..room])?;
            self.current_size += room as u64;
            rest = &rest[room..];
        }
        self.file.flush()?;
        Ok(())
    }
}

/// `{base}_{index:03}.{extension}`, keeping `base`'s directory.
pub fn file_name(base: &Path, extension: &str, index: usize) -> PathBuf {
    let stem = base
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    base.with_file_name(format!("{stem}_{index:03}.{extension}"))
}
