use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::{BoxResult, TocError};

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        TocError::Generic(format!("Failed to read {}: {}", path.display(), e)).into()
    })
}

/// Read from a file, or from stdin when no path is given or the path is `-`
pub fn read_input(path: Option<&Path>) -> BoxResult<String> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        _ => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents).map_err(TocError::Io)?;
            Ok(contents)
        }
    }
}

/// Write a string to stdout, followed by a newline unless it is empty
pub fn write_output(contents: &str) -> BoxResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(contents.as_bytes())?;
    if !contents.is_empty() && !contents.ends_with('\n') {
        handle.write_all(b"\n")?;
    }
    handle.flush()?;
    Ok(())
}
