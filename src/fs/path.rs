//! String path helpers
//!
//! Paths are handled as plain `/`-separated strings because the metric
//! tables are keyed by their exact normalized text. Normalization is purely
//! lexical: nothing here touches the filesystem or resolves symlinks.

/// Separator used for every path the walker produces
pub const SEPARATOR: char = '/';

/// Lexically normalize a path
///
/// - collapses repeated separators
/// - drops `.` segments
/// - resolves `..` against the preceding segment (never above `/`)
/// - removes a trailing separator, except for `/` itself
///
/// An empty relative result becomes `.`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join a child name onto a directory path and normalize the result
pub fn join(dir: &str, name: &str) -> String {
    normalize(&format!("{}/{}", dir, name))
}

/// Parent directory of a path
///
/// `/a/b` -> `/a`, `/a` -> `/`, `/` -> `/`, `a` -> `.`
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if path.is_empty() { ".".to_string() } else { "/".to_string() };
    }

    match trimmed.rfind(SEPARATOR) {
        None => ".".to_string(),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches(SEPARATOR);
            if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            }
        }
    }
}

/// Hidden-entry test used when expanding a directory
///
/// Matches any path containing `/.`, so an entry is skipped when *any*
/// segment of its path starts with a dot, not only its own name.
pub fn is_hidden(path: &str) -> bool {
    path.contains("/.")
}
