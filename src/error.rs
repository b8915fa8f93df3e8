use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LutError {
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("wrong number of chars: expected {expected}, found {count}")]
    Format { count: usize, expected: usize },
    #[error("wrong number of entries in {array}: expected {expected}, found {len}")]
    Invariant {
        array: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
