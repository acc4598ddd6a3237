//! Transform pipeline: folds one buffer through an ordered list of transforms.

use crate::build::build_transform;
use crate::traits::Transform;
use tm_core::{GrowableBuffer, LineLimits, Result, TmError, TransformConfig};
use tracing::debug;

/// Outcome of a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub input_len: usize,
    pub output_len: usize,
    pub stages_applied: Vec<String>,
}

impl PipelineReport {
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 { return 1.0; }
        self.output_len as f64 / self.input_len as f64
    }
}

/// Ordered transforms. Output of stage *i* is the input of stage *i + 1*.
#[derive(Debug, Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(configs: &[TransformConfig], limits: &LineLimits) -> Result<Self> {
        let transforms = configs
            .iter()
            .map(|config| build_transform(config, limits))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { transforms })
    }

    /// Builder-style append.
    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.push(Box::new(transform));
        self
    }

    pub fn push(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Apply every stage in order.
    ///
    /// The first failing stage aborts the run with [`TmError::Stage`]; the
    /// buffer then holds the output of the last stage that completed.
    pub fn apply(&self, buffer: &mut GrowableBuffer) -> Result<PipelineReport> {
        let input_len = buffer.len();
        let mut stages_applied = Vec::with_capacity(self.transforms.len());

        for (index, transform) in self.transforms.iter().enumerate() {
            let before = buffer.len();
            transform.apply(buffer).map_err(|err| TmError::Stage {
                index,
                name: transform.name().to_string(),
                source: Box::new(err),
            })?;
            debug!(stage = index, name = transform.name(), before, after = buffer.len(), "transform applied");
            stages_applied.push(transform.name().to_string());
        }

        Ok(PipelineReport {
            input_len,
            output_len: buffer.len(),
            stages_applied,
        })
    }
}
