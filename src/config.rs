use serde::Deserialize;

use crate::error::LutError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: "macroman.txt".into(),
        }
    }
}

/// Names used in the generated C translation unit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub table_name: String,
    pub lengths_name: String,
    pub size_type_include: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table_name: "macroman_to_utf8".into(),
            lengths_name: "macroman_to_utf8_lengths".into(),
            size_type_include: "stddef.h".into(),
        }
    }
}

/// Line wrapping for the two arrays. Cosmetic only.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// A new line starts once the running width reaches this many characters.
    pub literal_line_width: usize,
    /// A new line starts after every this many lengths. 0 never wraps.
    pub lengths_per_line: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            literal_line_width: 55,
            lengths_per_line: 20,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, LutError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
