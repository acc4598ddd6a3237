use std::fmt;
use tm_core::{GrowableBuffer, Result};

/// A text transform applied to a whole buffer.
///
/// Implementations hold only construction-time parameters. `apply` either
/// replaces the buffer contents completely or returns an error and leaves
/// them untouched.
pub trait Transform: fmt::Debug + Send + Sync {
    /// Stable identifier, used in logs and pipeline reports.
    fn name(&self) -> &'static str;

    fn apply(&self, buffer: &mut GrowableBuffer) -> Result<()>;
}
