//! Construct transforms from their serializable description.

use crate::count::{CountLines, CountSymbols};
use crate::line_ops::{LexSortLines, RemoveDuplicateLines, RemoveLinesContaining};
use crate::newline::{AddNewlineAfterSentence, AddNewlineAfterWord, WrapAtColumn};
use crate::removal::{RemoveCharacter, RemoveNewline, RemovePunctuation, RemoveSubstring};
use crate::replace::ReplaceSubstring;
use crate::traits::Transform;
use tm_core::{LineLimits, Result, TransformConfig};

/// Build one transform. `limits` only reaches the line-oriented variants.
pub fn build_transform(config: &TransformConfig, limits: &LineLimits) -> Result<Box<dyn Transform>> {
    let transform: Box<dyn Transform> = match config {
        TransformConfig::RemoveSubstring { needle } => {
            Box::new(RemoveSubstring::new(needle.as_bytes())?)
        }
        TransformConfig::RemoveLinesContaining { needle } => {
            Box::new(RemoveLinesContaining::new(needle.as_bytes(), *limits))
        }
        TransformConfig::RemoveCharacter { character } => {
            Box::new(RemoveCharacter::from_char(*character)?)
        }
        TransformConfig::ReplaceSubstring { old, new } => Box::new(ReplaceSubstring::from_parts(
            old.as_ref().map(|s| s.as_bytes().to_vec()),
            new.as_ref().map(|s| s.as_bytes().to_vec()),
        )),
        TransformConfig::RemovePunctuation => Box::new(RemovePunctuation),
        TransformConfig::AddNewlineAfterSentence => Box::new(AddNewlineAfterSentence),
        TransformConfig::AddNewlineAfterWord => Box::new(AddNewlineAfterWord),
        TransformConfig::WrapAtColumn { max_chars } => Box::new(WrapAtColumn::new(*max_chars)?),
        TransformConfig::RemoveNewline => Box::new(RemoveNewline),
        TransformConfig::LexSortLines => Box::new(LexSortLines::new(*limits)),
        TransformConfig::RemoveDuplicateLines => Box::new(RemoveDuplicateLines::new(*limits)),
        TransformConfig::CountLines => Box::new(CountLines),
        TransformConfig::CountSymbols => Box::new(CountSymbols),
    };
    Ok(transform)
}
