use crate::table::Table;
use crate::types::Result;
use std::io::Write;
use std::path::Path;

/// Write a table to a records-oriented JSON file
pub fn write_json_file(table: &Table, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}

/// Write a table to a JSON string
pub fn to_json_string(table: &Table) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Write a table to stdout
pub fn write_json_stdout(table: &Table) -> Result<()> {
    let json = to_json_string(table)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json)?;
    Ok(())
}
