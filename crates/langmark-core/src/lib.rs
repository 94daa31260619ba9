#![warn(missing_docs)]
//! Langmark Core - headless segment store for language tagging
//!
//! # Overview
//!
//! `langmark-core` keeps a document as an ordered list of text segments, each tagged with a
//! label from a closed [`TagSet`] (a generic tag plus a list of languages), and retags arbitrary
//! character ranges of the logical text. It does not render anything: a host supplies ranges
//! (or selected text) and renders the resulting segments however it likes.
//!
//! Retagging a range:
//!
//! 1. resolves which segments the range overlaps
//! 2. splits those segments at the range boundaries
//! 3. overwrites the tag of the covered pieces
//! 4. merges neighbours that now share a tag
//!
//! The logical text never changes, and the result never holds empty segments or two neighbouring
//! segments with the same tag.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  State Management (versions + callbacks)    │  ← Host API
//! ├─────────────────────────────────────────────┤
//! │  Command Interface                          │  ← Host API
//! ├─────────────────────────────────────────────┤
//! │  Document (validation, export)              │
//! ├─────────────────────────────────────────────┤
//! │  Retag algorithms + selection resolution    │  ← Pure functions
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use langmark_core::{Document, SegmentRecord, TextRange};
//!
//! let doc = Document::with_default_tags("Hello world");
//! let english = doc.tag_set().tag("inglés").unwrap();
//!
//! let doc = doc.retag(TextRange::new(0, 5), english).unwrap();
//! let range = doc.resolve("world").unwrap();
//! let doc = doc.retag(range, english).unwrap();
//!
//! assert_eq!(
//!     doc.export(),
//!     vec![
//!         SegmentRecord::new("inglés", "Hello"),
//!         SegmentRecord::new("generic", " "),
//!         SegmentRecord::new("inglés", "world"),
//!     ]
//! );
//! ```
//!
//! # Module Description
//!
//! - [`range`] - half-open character ranges
//! - [`segment`] - tagged text runs
//! - [`retag`] - split / overwrite / merge algorithms
//! - [`search`] - selected text to range resolution
//! - [`document`] - the segment store
//! - [`export`] - `{tag, text}` records
//! - [`commands`] - command interface
//! - [`state`] - versioning and change notifications
//!
//! # Offsets
//!
//! All offsets are Unicode scalar values (`char`), never bytes.

pub mod commands;
pub mod document;
mod error;
pub mod export;
pub mod range;
pub mod retag;
pub mod search;
pub mod segment;
pub mod state;

pub use commands::{CommandExecutor, CommandResult, TagCommand};
pub use document::Document;
pub use error::SegmentError;
pub use export::SegmentRecord;
pub use langmark_core_lang::{Tag, TagSet, TagSetConfig, TagSetError};
pub use range::TextRange;
pub use retag::{canonicalize, is_canonical};
pub use search::{SearchOptions, find_all, resolve, resolve_with};
pub use segment::Segment;
pub use state::{
    DocumentState, StateChange, StateChangeCallback, StateChangeType, TaggingStateManager,
};
