//! Read → transform → write orchestration.

use anyhow::{Context, Result};
use tm_core::{GrowableBuffer, OutputConfig, SourceConfig, TextMillConfig};
use tm_io::{ConsoleOutput, ConsoleSource, FileSource, InlineSource, RotatingFileOutput, TextOutput, TextSource};
use tm_transform::{Pipeline, PipelineReport};
use tracing::{debug, info, warn};

/// Statistics for one [`TextProcessor::process`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    /// Sources that contributed bytes.
    pub sources_read: usize,
    /// Sources that failed to read or had nothing to contribute.
    pub sources_skipped: usize,
    pub pipeline: PipelineReport,
    pub outputs_written: usize,
}

/// Append `bytes` up to the first NUL.
fn concatenate(data: &mut GrowableBuffer, bytes: &[u8]) {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    data.extend_from_slice(&bytes[..end]);
}

/// Owns the sources, the pipeline, the outputs and the working buffer.
pub struct TextProcessor {
    sources: Vec<Box<dyn TextSource>>,
    pipeline: Pipeline,
    outputs: Vec<Box<dyn TextOutput>>,
    data: GrowableBuffer,
}

impl TextProcessor {
    pub fn new(
        sources: Vec<Box<dyn TextSource>>,
        pipeline: Pipeline,
        outputs: Vec<Box<dyn TextOutput>>,
    ) -> Self {
        Self {
            sources,
            pipeline,
            outputs,
            data: GrowableBuffer::new(),
        }
    }

    pub fn from_config(config: &TextMillConfig) -> Result<Self> {
        config.validate()?;

        let sources = config
            .sources
            .iter()
            .map(|source| -> Box<dyn TextSource> {
                match source {
                    SourceConfig::File { path } => Box::new(FileSource::new(path)),
                    SourceConfig::Console { prompt } => match prompt {
                        Some(prompt) => Box::new(ConsoleSource::stdin().with_prompt(prompt)),
                        None => Box::new(ConsoleSource::stdin()),
                    },
                    SourceConfig::Inline { text } => Box::new(InlineSource::new(text)),
                }
            })
            .collect();

        let pipeline = Pipeline::from_config(&config.transforms, &config.limits)
            .context("invalid transform configuration")?;

        let outputs = config
            .outputs
            .iter()
            .map(|output| -> Result<Box<dyn TextOutput>> {
                let output: Box<dyn TextOutput> = match output {
                    OutputConfig::Console => Box::new(ConsoleOutput::stdout()),
                    OutputConfig::RotatingFile { base, extension, max_bytes } => {
                        Box::new(RotatingFileOutput::new(base, extension, *max_bytes)?)
                    }
                };
                Ok(output)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(sources, pipeline, outputs))
    }

    /// The working buffer.
    pub fn data(&self) -> &GrowableBuffer {
        &self.data
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Read every source in order into a fresh working buffer.
    ///
    /// A source that fails is logged and skipped. Returns `(read, skipped)`.
    pub fn read_from_sources(&mut self) -> (usize, usize) {
        let Self { sources, data, .. } = self;
        data.clear();
        let mut read = 0;
        let mut skipped = 0;

        for (index, source) in sources.iter_mut().enumerate() {
            if let Err(err) = source.read_data() {
                warn!(source = index, error = %err, "source read failed, skipping");
                skipped += 1;
                continue;
            }
            match source.data() {
                Some(bytes) => {
                    concatenate(data, bytes);
                    read += 1;
                }
                None => skipped += 1,
            }
        }
        debug!(read, skipped, len = data.len(), "sources concatenated");
        (read, skipped)
    }

    /// Run the pipeline over the working buffer.
    pub fn apply_transformations(&mut self) -> tm_core::Result<PipelineReport> {
        self.pipeline.apply(&mut self.data)
    }

    /// Hand the working buffer to every output. Returns the number written.
    pub fn write_outputs(&mut self) -> Result<usize> {
        for (index, output) in self.outputs.iter_mut().enumerate() {
            output
                .write_data(&self.data)
                .with_context(|| format!("output {index} failed"))?;
        }
        Ok(self.outputs.len())
    }

    /// Read, transform, write. Nothing is written if the pipeline aborts.
    pub fn process(&mut self) -> Result<ProcessReport> {
        let (sources_read, sources_skipped) = self.read_from_sources();
        let pipeline = self
            .apply_transformations()
            .context("pipeline aborted, no output written")?;
        let outputs_written = self.write_outputs()?;

        info!(
            sources_read,
            sources_skipped,
            input_len = pipeline.input_len,
            output_len = pipeline.output_len,
            outputs_written,
            "run complete"
        );
        Ok(ProcessReport {
            sources_read,
            sources_skipped,
            pipeline,
            outputs_written,
        })
    }
}
