// crates/marker_preview/src/document.rs

use std::fs;
use std::path::Path;

use normalize_line_endings::normalize_line_endings;

use crate::error::PreviewError;

/// Full, line-ending-normalized text of one file.
///
/// Every offset taken or returned by `Document` counts characters, not
/// bytes, so excerpt lengths stay meaningful for multi-byte text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
    char_len: usize,
}

impl Document {
    /// Reads the whole file, decodes it as UTF-8 and normalizes CRLF to LF.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PreviewError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| PreviewError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = String::from_utf8(bytes).map_err(|source| PreviewError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_text(&raw);
        log::debug!(
            "Loaded {} ({} characters after normalization)",
            path.display(),
            document.char_len
        );
        Ok(document)
    }

    pub fn from_text(raw: &str) -> Self {
        let text = normalize_line_endings(raw);
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Returns the character offset of the first occurrence of `marker`
    /// at or after character `from`. Earlier occurrences are never matched.
    pub fn locate(&self, marker: &str, from: usize) -> Result<usize, PreviewError> {
        let start = self.byte_offset(from);
        let haystack = &self.text[start..];
        haystack
            .find(marker)
            .map(|found| from + haystack[..found].chars().count())
            .ok_or_else(|| PreviewError::MarkerNotFound {
                marker: marker.to_string(),
                from,
            })
    }

    /// Up to `len` characters starting at character `start`, clamped to the
    /// end of the text. A start past the end yields an empty excerpt.
    pub fn excerpt(&self, start: usize, len: usize) -> &str {
        let rest = &self.text[self.byte_offset(start)..];
        let end = rest
            .char_indices()
            .nth(len)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        &rest[..end]
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

/// Offset where the second excerpt begins: the end marker's match offset
/// plus the character length of the fixed suffix.
pub fn boundary_after(match_offset: usize, suffix: &str) -> usize {
    match_offset + suffix.chars().count()
}
