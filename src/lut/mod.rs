pub mod escape;
pub mod format;
pub mod parser;
pub mod table;

use std::path::Path;

use crate::config::{FormatConfig, OutputConfig};
use crate::error::LutError;

/// Run the whole pipeline over an in-memory mapping source. Nothing is
/// returned unless every stage succeeded.
pub fn generate_from_bytes(
    source: &[u8],
    output: &OutputConfig,
    format: &FormatConfig,
) -> Result<String, LutError> {
    let tokens = parser::parse_tokens(source)?;
    let table = table::build_table(&tokens)?;
    Ok(format::render(&table, output, format))
}

/// Read the mapping source at `path` and generate the C table for it.
pub fn generate(
    path: &Path,
    output: &OutputConfig,
    format: &FormatConfig,
) -> Result<String, LutError> {
    let source = std::fs::read(path).map_err(|source| LutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", source.len(), path.display());
    generate_from_bytes(&source, output, format)
}
