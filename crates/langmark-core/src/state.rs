//! Tagging State Interface
//!
//! [`TaggingStateManager`] wraps a [`CommandExecutor`] for hosts that re-render on change. It
//! adds:
//!
//! - **Version Tracking**: the version increments only when the segment list actually changes
//! - **Change Notifications**: subscribers are called after every change
//! - **State Queries**: a [`DocumentState`] summary for status bars and debug panels
//!
//! # Example
//!
//! ```rust
//! use langmark_core::{TagCommand, TaggingStateManager};
//!
//! let mut manager = TaggingStateManager::with_default_tags("Hello world");
//! let english = manager.document().tag_set().tag("inglés").unwrap();
//!
//! manager.subscribe(|change| {
//!     println!("{:?}: {} -> {}", change.change_type, change.old_version, change.new_version);
//! });
//!
//! manager
//!     .execute(TagCommand::Retag { start: 0, end: 5, tag: english })
//!     .unwrap();
//!
//! let state = manager.get_document_state();
//! assert_eq!(state.version, 1);
//! assert_eq!(state.tagged_char_count, 5);
//! ```

use crate::commands::{CommandExecutor, CommandResult, TagCommand};
use crate::document::Document;
use crate::error::SegmentError;
use crate::range::TextRange;
use langmark_core_lang::TagSet;
use std::sync::Arc;

/// Document state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// Number of segments
    pub segment_count: usize,
    /// Total character count of the logical text
    pub char_count: usize,
    /// Characters carrying a non-generic tag
    pub tagged_char_count: usize,
    /// Whether the document changed since creation or the last `mark_clean`
    pub is_modified: bool,
    /// Version number (incremented after each change)
    pub version: u64,
}

/// State change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// A retag changed the segment list
    SegmentsRetagged,
    /// The whole document was swapped out
    DocumentReplaced,
}

/// State change record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    /// Change type
    pub change_type: StateChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
    /// Retagged range, if the change came from a retag
    pub affected_region: Option<TextRange>,
}

/// State change callback function type
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Versioned wrapper around a [`CommandExecutor`].
pub struct TaggingStateManager {
    /// Command executor (owns the document)
    executor: CommandExecutor,
    /// State version number
    state_version: u64,
    /// Whether the document has been modified
    is_modified: bool,
    /// State change callback list
    callbacks: Vec<StateChangeCallback>,
}

impl TaggingStateManager {
    /// Create a state manager over a fresh document seeded with `text`.
    pub fn new(tags: Arc<TagSet>, text: &str) -> Self {
        Self::from_document(Document::new(tags, text))
    }

    /// Create a state manager using the built-in tag set.
    pub fn with_default_tags(text: &str) -> Self {
        Self::from_document(Document::with_default_tags(text))
    }

    /// Wrap an existing document.
    pub fn from_document(document: Document) -> Self {
        Self {
            executor: CommandExecutor::from_document(document),
            state_version: 0,
            is_modified: false,
            callbacks: Vec::new(),
        }
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        self.executor.document()
    }

    /// Get a reference to the command executor
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Get a mutable reference to the command executor (settings only; edits made through it
    /// are not versioned).
    pub fn executor_mut(&mut self) -> &mut CommandExecutor {
        &mut self.executor
    }

    /// Execute a command; notifies subscribers if the segment list changed.
    pub fn execute(&mut self, command: TagCommand) -> Result<CommandResult, SegmentError> {
        let selection = match &command {
            TagCommand::RetagSelection { selected_text, .. } => Some(selected_text.clone()),
            _ => None,
        };

        let result = self.executor.execute(command).inspect_err(|err| {
            if let (SegmentError::NotFound, Some(text)) = (err, &selection) {
                log::warn!("selection {:?} not found in document text", text);
            }
        })?;

        if let CommandResult::Retagged {
            range,
            changed: true,
        } = &result
        {
            self.mark_modified(StateChangeType::SegmentsRetagged, Some(*range));
        }

        Ok(result)
    }

    /// Replace the document wholesale (e.g. after the host loads new content).
    pub fn replace_document(&mut self, document: Document) {
        self.executor.replace_document(document);
        self.mark_modified(StateChangeType::DocumentReplaced, None);
    }

    /// Get document state
    pub fn get_document_state(&self) -> DocumentState {
        let document = self.executor.document();
        DocumentState {
            segment_count: document.len(),
            char_count: document.char_count(),
            tagged_char_count: document.tagged_char_count(),
            is_modified: self.is_modified,
            version: self.state_version,
        }
    }

    /// Current version number
    pub fn version(&self) -> u64 {
        self.state_version
    }

    /// Check if state has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.state_version > version
    }

    /// Mark the document as unmodified (e.g. after the host stored an export)
    pub fn mark_clean(&mut self) {
        self.is_modified = false;
    }

    /// Subscribe to state changes
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn mark_modified(&mut self, change_type: StateChangeType, region: Option<TextRange>) {
        let old_version = self.state_version;
        self.state_version += 1;
        self.is_modified = true;

        let change = StateChange {
            change_type,
            old_version,
            new_version: self.state_version,
            affected_region: region,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}
