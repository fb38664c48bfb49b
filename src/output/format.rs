use eyre::{Result, WrapErr};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

/// Determines summary format based on flags and TTY detection
pub fn should_use_json(json_flag: bool) -> bool {
    json_flag || !io::stdout().is_terminal()
}

/// Outputs serializable data to stdout as YAML or JSON
pub fn output<T: Serialize>(data: &T, use_json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if use_json {
        serde_json::to_writer_pretty(&mut handle, data)?;
        writeln!(handle)?;
    } else {
        serde_yaml::to_writer(&mut handle, data)?;
    }

    Ok(())
}

/// Write a document to `path` as pretty-printed JSON with a trailing newline
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
