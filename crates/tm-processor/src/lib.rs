//! textmill orchestration: sources → transform pipeline → outputs.

pub mod processor;

pub use processor::{ProcessReport, TextProcessor};
