use crate::error::{Result, TmError};
use crate::lines::LineLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMillConfig {
    pub sources: Vec<SourceConfig>,
    pub transforms: Vec<TransformConfig>,
    pub outputs: Vec<OutputConfig>,
    #[serde(default)]
    pub limits: LineLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    File { path: PathBuf },
    Console {
        #[serde(default)]
        prompt: Option<String>,
    },
    Inline { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputConfig {
    Console,
    RotatingFile {
        base: PathBuf,
        #[serde(default = "default_extension")]
        extension: String,
        max_bytes: u64,
    },
}

fn default_extension() -> String {
    "txt".into()
}

/// Serializable description of one transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformConfig {
    RemoveSubstring { needle: String },
    RemoveLinesContaining { needle: String },
    RemoveCharacter { character: char },
    ReplaceSubstring {
        #[serde(default)]
        old: Option<String>,
        #[serde(default)]
        new: Option<String>,
    },
    RemovePunctuation,
    AddNewlineAfterSentence,
    AddNewlineAfterWord,
    WrapAtColumn { max_chars: usize },
    RemoveNewline,
    LexSortLines,
    RemoveDuplicateLines,
    CountLines,
    CountSymbols,
}

impl TextMillConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// `<config_dir>/textmill/config.json`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("textmill").join("config.json"))
    }

    /// Load from [`Self::default_path`] if that file exists, else the built-in default.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Structural checks that do not depend on any transform implementation.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_lines == 0 || self.limits.max_line_len == 0 {
            return Err(TmError::InvalidConfig(
                "line limits must be at least 1".into(),
            ));
        }
        for output in &self.outputs {
            if let OutputConfig::RotatingFile { max_bytes: 0, .. } = output {
                return Err(TmError::InvalidConfig(
                    "rotating_file.max_bytes must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for TextMillConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                SourceConfig::File {
                    path: "../data1.txt".into(),
                },
                SourceConfig::File {
                    path: "../data2.txt".into(),
                },
                SourceConfig::Console {
                    prompt: Some("Enter characters: ".into()),
                },
            ],
            transforms: vec![
                TransformConfig::RemoveSubstring {
                    needle: "warlock".into(),
                },
                TransformConfig::RemoveNewline,
            ],
            outputs: vec![
                OutputConfig::Console,
                OutputConfig::RotatingFile {
                    base: "../output".into(),
                    extension: default_extension(),
                    max_bytes: 200,
                },
            ],
            limits: LineLimits::default(),
        }
    }
}
