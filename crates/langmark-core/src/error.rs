use langmark_core_lang::Tag;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors reported by the segment store. The document is left unchanged whenever one is returned.
pub enum SegmentError {
    #[error("invalid range {start}..{end}: document has {len} characters")]
    /// A range endpoint lies past the end of the logical text.
    InvalidRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
        /// Character count of the logical text.
        len: usize,
    },

    #[error("selection not found in document text")]
    /// The selected text does not occur in the current logical text.
    NotFound,

    #[error("tag {0:?} is not part of the document's tag set")]
    /// A tag id from a different tag set was supplied.
    UnknownTag(Tag),

    #[error("unknown tag label '{0}'")]
    /// A label that the tag set does not define.
    UnknownLabel(String),

    #[error("invalid search pattern: {0}")]
    /// The search pattern failed to compile.
    InvalidPattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    /// Serializing or parsing an export failed.
    Json(#[from] serde_json::Error),
}
