//! Read-only export of a document as an ordered array of `{tag, text}` records.
//!
//! The records use tag *labels*, so they can be handed to any host (or serialized with
//! `serde_json`) without the [`TagSet`](langmark_core_lang::TagSet) that produced the ids.

use serde::{Deserialize, Serialize};

/// One exported segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Tag label.
    pub tag: String,
    /// Segment text.
    pub text: String,
}

impl SegmentRecord {
    /// Create a record.
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}
