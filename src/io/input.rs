use crate::errors::{Error, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Path argument meaning "read the payload from stdin".
pub const STDIN_MARKER: &str = "-";

/// Parse payload text. Shape checks happen later, during normalization.
pub fn parse_payload(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a JSON payload from a file, or from stdin for `-`.
pub fn read_payload(path: &Path) -> Result<Value> {
    let text = if path.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| Error::io(path, e))?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?
    };
    log::debug!("Read {} bytes of payload from {}", text.len(), path.display());
    parse_payload(&text)
}
