//! Path-string parsing and formatting.
//!
//! Selections can be written as `/`-separated property paths such as
//! `contact/address/city`. Segments use RFC 6901 escaping so property
//! names containing `/` or `~` survive the round trip: `~1` encodes `/`
//! and `~0` encodes `~`.

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// The path string was empty.
    #[error("empty path")]
    Empty,
    /// A `/`-separated segment was empty, as in `a//b` or a trailing `/`.
    #[error("empty segment in path {path:?}")]
    EmptySegment { path: String },
}

// ── Segment escaping ──────────────────────────────────────────────────────

/// Unescapes one path segment.
///
/// `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use bindgraph_path::unescape_segment;
///
/// assert_eq!(unescape_segment("a~0b"), "a~b");
/// assert_eq!(unescape_segment("c~1d"), "c/d");
/// assert_eq!(unescape_segment("plain"), "plain");
/// ```
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    segment.replace("~1", "/").replace("~0", "~")
}

/// Escapes one path segment.
///
/// `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use bindgraph_path::escape_segment;
///
/// assert_eq!(escape_segment("a~b"), "a~0b");
/// assert_eq!(escape_segment("c/d"), "c~1d");
/// assert_eq!(escape_segment("plain"), "plain");
/// ```
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('/') && !segment.contains('~') {
        return segment.to_string();
    }
    // Order matters: ~ must be escaped before /
    segment.replace('~', "~0").replace('/', "~1")
}

// ── Paths ─────────────────────────────────────────────────────────────────

/// Parses a path string into unescaped segments.
///
/// One leading `/` is tolerated and ignored. Property names cannot be
/// empty, so an empty path or an empty segment is an error.
///
/// # Example
///
/// ```
/// use bindgraph_path::parse_path;
///
/// assert_eq!(parse_path("foo/bar")?, ["foo", "bar"]);
/// assert_eq!(parse_path("/foo/bar")?, ["foo", "bar"]);
/// assert_eq!(parse_path("a~0b/c~1d")?, ["a~b", "c/d"]);
/// assert!(parse_path("a//b").is_err());
/// # Ok::<(), bindgraph_path::PathParseError>(())
/// ```
pub fn parse_path(path: &str) -> Result<Vec<String>, PathParseError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Err(PathParseError::Empty);
    }
    let mut segments = Vec::new();
    for raw in trimmed.split('/') {
        if raw.is_empty() {
            return Err(PathParseError::EmptySegment {
                path: path.to_string(),
            });
        }
        segments.push(unescape_segment(raw));
    }
    Ok(segments)
}

/// Formats segments into a path string, escaping each one.
///
/// Inverse of [`parse_path`].
///
/// # Example
///
/// ```
/// use bindgraph_path::format_path;
///
/// assert_eq!(format_path(&["foo", "bar"]), "foo/bar");
/// assert_eq!(format_path(&["a~b", "c/d"]), "a~0b/c~1d");
/// ```
pub fn format_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| escape_segment(segment.as_ref()))
        .collect::<Vec<_>>()
        .join("/")
}
