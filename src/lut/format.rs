use std::fmt::Write;

use crate::config::{FormatConfig, OutputConfig};
use crate::types::LookupTable;

/// Quotes, comma and space around each literal.
const LITERAL_OVERHEAD: usize = 4;

/// Render the table as a C translation unit: the size-type include, the
/// literal array, then the parallel lengths array.
pub fn render(table: &LookupTable, output: &OutputConfig, format: &FormatConfig) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_table(&mut out, table, output, format);
    out
}

fn write_table(
    out: &mut String,
    table: &LookupTable,
    output: &OutputConfig,
    format: &FormatConfig,
) -> std::fmt::Result {
    write!(out, "#include <{}>\n\n", output.size_type_include)?;

    write!(out, "char* {}[] = {{\n\t", output.table_name)?;
    let mut line_len = 0;
    for entry in table.entries() {
        line_len += entry.literal.len() + LITERAL_OVERHEAD;
        write!(out, "\"{}\", ", entry.literal)?;
        if line_len >= format.literal_line_width {
            line_len = 0;
            out.push_str("\n\t");
        }
    }
    out.push_str("};\n\n");

    write!(out, "size_t {}[] = {{\n\t", output.lengths_name)?;
    for (i, entry) in table.entries().iter().enumerate() {
        write!(out, "{}, ", entry.byte_len)?;
        let n = format.lengths_per_line;
        if n != 0 && (i + 1) % n == 0 {
            out.push_str("\n\t");
        }
    }
    out.push_str("};\n\n");

    Ok(())
}
