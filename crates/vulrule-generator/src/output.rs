//! File output helpers.

use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

/// Write `content` to `path`, creating parent directories and overwriting any existing file.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Serialize `value` as pretty JSON with `indent` spaces per level.
///
/// Non-ASCII characters are written literally.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
