// crates/marker_preview/src/previewer.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use preview_markers::{
    DOCUMENT_PATH, END_EXCERPT_LEN, END_MARKER, END_SUFFIX, PREVIEW_SEPARATOR, START_EXCERPT_LEN,
    START_MARKER,
};

use crate::document::{boundary_after, Document};
use crate::error::PreviewError;

/// Inputs of one preview run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRequest {
    pub path: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
    /// Only the character length is used; see [`boundary_after`].
    pub end_suffix: String,
    pub start_excerpt_len: usize,
    pub end_excerpt_len: usize,
}

impl Default for PreviewRequest {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DOCUMENT_PATH),
            start_marker: START_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
            end_suffix: END_SUFFIX.to_string(),
            start_excerpt_len: START_EXCERPT_LEN,
            end_excerpt_len: END_EXCERPT_LEN,
        }
    }
}

impl PreviewRequest {
    /// Same markers and lengths as the default request, for another file.
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}

/// What a successful run printed, with the offsets it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub start: usize,
    pub end_match: usize,
    pub boundary: usize,
    pub head: String,
    pub tail: String,
}

/// Loads the requested file and previews it. Nothing is written if the
/// file cannot be loaded.
pub fn run_preview<W: Write>(request: &PreviewRequest, out: &mut W) -> Result<Preview, PreviewError> {
    let document = Document::load(&request.path)?;
    preview_document(&document, request, out)
}

/// Writes the excerpt at the start marker, the separator line, then the
/// excerpt after the end suffix.
///
/// The end marker is only searched for after the first excerpt and the
/// separator have been written, so a missing end marker fails after
/// that output, while a missing start marker fails before any output.
pub fn preview_document<W: Write>(
    document: &Document,
    request: &PreviewRequest,
    out: &mut W,
) -> Result<Preview, PreviewError> {
    let start = document.locate(&request.start_marker, 0)?;
    log::debug!("Start marker {:?} at character {}", request.start_marker, start);

    let head = document.excerpt(start, request.start_excerpt_len);
    writeln!(out, "{}", head)?;
    writeln!(out, "{}", PREVIEW_SEPARATOR)?;

    let end_match = document.locate(&request.end_marker, start)?;
    let boundary = boundary_after(end_match, &request.end_suffix);
    log::debug!(
        "End marker {:?} at character {}, excerpt boundary at {}",
        request.end_marker,
        end_match,
        boundary
    );

    let tail = document.excerpt(boundary, request.end_excerpt_len);
    writeln!(out, "{}", tail)?;
    out.flush()?;

    Ok(Preview {
        start,
        end_match,
        boundary,
        head: head.to_string(),
        tail: tail.to_string(),
    })
}
