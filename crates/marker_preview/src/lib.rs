// crates/marker_preview/src/lib.rs

//! Prints two excerpts of a text file: one at a start marker and one just
//! past a fixed suffix at an end marker, with a separator line between them.

pub mod document;
pub mod error;
pub mod previewer;

pub use document::{boundary_after, Document};
pub use error::PreviewError;
pub use previewer::{preview_document, run_preview, Preview, PreviewRequest};
