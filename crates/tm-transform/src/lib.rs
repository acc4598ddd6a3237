//! textmill transforms.
//!
//! Modules:
//! 1. removal: substrings, single bytes, punctuation, newlines
//! 2. replace: substring replacement
//! 3. newline: newline insertion after sentences, words, or at a column
//! 4. line_ops: line filtering, sorting and dedup over a line table
//! 5. count: line and symbol counts
//!
//! [`Pipeline`] chains them; [`build_transform`] builds them from configuration.

pub mod build;
pub mod count;
pub mod line_ops;
pub mod newline;
pub mod pipeline;
pub mod removal;
pub mod replace;
pub mod traits;

pub use build::build_transform;
pub use count::{CountLines, CountSymbols};
pub use line_ops::{LexSortLines, RemoveDuplicateLines, RemoveLinesContaining};
pub use newline::{AddNewlineAfterSentence, AddNewlineAfterWord, WrapAtColumn};
pub use pipeline::{Pipeline, PipelineReport};
pub use removal::{RemoveCharacter, RemoveNewline, RemovePunctuation, RemoveSubstring};
pub use replace::ReplaceSubstring;
pub use traits::Transform;
