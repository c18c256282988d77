//! Extension to MIME type lookup for shared files.

use std::path::Path;

/// Type used when the extension is unknown.
pub const ANY: &str = "*/*";

/// Maps a file extension (without the dot) to a MIME type, ignoring case.
pub fn infer_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "m4a" | "aac" => "audio/mp4",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => ANY,
    }
}

/// [`infer_type`] applied to a path's extension.
pub fn infer_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(ANY, infer_type)
}
