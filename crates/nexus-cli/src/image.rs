//! Profile image references: URLs pass through, local files are embedded.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Turns an image argument into a text-encodable reference.
///
/// `http(s)` URLs and existing `data:` URIs pass through unchanged; any
/// other value is treated as a local file path and embedded as a base64
/// `data:` URI. Large files inflate the persisted entry and can exhaust
/// the storage quota.
pub fn image_reference(arg: &str) -> Result<String, Box<dyn Error>> {
    if arg.starts_with("http://") || arg.starts_with("https://") || arg.starts_with("data:") {
        return Ok(arg.to_string());
    }

    let bytes =
        fs::read(arg).map_err(|e| format!("cannot read image file '{}': {}", arg, e))?;
    Ok(format!(
        "data:{};base64,{}",
        media_type(arg),
        STANDARD.encode(bytes)
    ))
}

fn media_type(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
