use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes inspected when sniffing content
const SNIFF_BYTES: usize = 8192;

/// Extensions that are always treated as binary
const BINARY_EXTENSIONS: &[&str] = &[
    // compiled / bytecode
    "pyc", "pyo", "class", "o", "obj", "a", "lib", "so", "dll", "dylib", "exe", "bin", "wasm",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war", "whl",
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd",
    // media
    "mp3", "mp4", "wav", "ogg", "flac", "avi", "mov", "mkv", "webm",
    // documents / fonts / data
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "ttf", "otf", "woff", "woff2", "eot",
    "sqlite", "db", "parquet",
];

/// Decide whether `path` holds binary data.
///
/// Known binary extensions, a null byte in the first 8 KiB, or a prefix that
/// is not valid UTF-8 all count as binary. Unreadable files are reported as
/// binary; empty files are text.
pub fn is_binary(path: &Path) -> bool {
    if has_binary_extension(path) {
        return true;
    }

    let mut buf = Vec::with_capacity(SNIFF_BYTES);
    let read = File::open(path).and_then(|file| file.take(SNIFF_BYTES as u64).read_to_end(&mut buf));
    if let Err(e) = read {
        log::debug!("Treating unreadable {} as binary: {e}", path.display());
        return true;
    }

    is_binary_content(&buf)
}

/// Content check on an already-read prefix
pub fn is_binary_content(prefix: &[u8]) -> bool {
    if prefix.contains(&0) {
        return true;
    }
    match std::str::from_utf8(prefix) {
        Ok(_) => false,
        // A multi-byte character cut off by the sniff window is still text.
        Err(e) => e.error_len().is_some(),
    }
}

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            BINARY_EXTENSIONS.iter().any(|candidate| *candidate == ext)
        })
}
