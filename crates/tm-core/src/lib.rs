//! Core types for textmill: the growable byte buffer, line tables, the
//! error taxonomy and the configuration model.

pub mod buffer;
pub mod config;
pub mod error;
pub mod lines;

pub use buffer::{Cursor, GrowableBuffer};
pub use config::{OutputConfig, SourceConfig, TextMillConfig, TransformConfig};
pub use error::{Result, TmError};
pub use lines::{LineLimits, LineTable, OverflowPolicy};

#[cfg(test)]
mod tests;
