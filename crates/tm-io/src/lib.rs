//! Sources and outputs for textmill.

pub mod output;
pub mod source;

pub use output::{ConsoleOutput, RotatingFileOutput, TextOutput};
pub use source::{ConsoleSource, FileSource, InlineSource, TextSource};
