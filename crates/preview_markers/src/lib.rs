// crates/preview_markers/src/lib.rs

//! Fixed inputs of the previewer, kept in one place so the binary and
//! the tests agree on them.

/// File previewed by the `marker_preview` binary, relative to the
/// current directory.
pub const DOCUMENT_PATH: &str = "src/app/page.tsx";

/// The first excerpt starts at the first occurrence of this literal.
pub const START_MARKER: &str = "export default function";

/// Searched for from the start marker onward.
pub const END_MARKER: &str = "</main>";

/// Text expected at the end marker. Only its length matters: the second
/// excerpt begins this many characters after the end marker's match.
pub const END_SUFFIX: &str = "</main>\n  );\n}";

/// Maximum length, in characters, of the excerpt at the start marker.
pub const START_EXCERPT_LEN: usize = 400;

/// Maximum length, in characters, of the excerpt after the end suffix.
pub const END_EXCERPT_LEN: usize = 20;

/// Printed between the two excerpts.
pub const PREVIEW_SEPARATOR: &str = "---END PREVIEW---";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_suffix_begins_with_end_marker() {
        assert!(END_SUFFIX.starts_with(END_MARKER));
    }

    #[test]
    fn test_separator_is_single_line() {
        assert!(!PREVIEW_SEPARATOR.contains('\n'));
    }
}
