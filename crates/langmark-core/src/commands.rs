//! Command Interface
//!
//! Hosts drive a [`Document`] through [`TagCommand`]s. The usual flow of a tagging UI maps onto
//! them directly:
//!
//! 1. the user selects some text; the host only knows the selected string
//! 2. the user picks a tag; the host sends [`TagCommand::RetagSelection`]
//! 3. the host re-renders from [`CommandExecutor::document`] or [`TagCommand::Export`]
//!
//! Hosts that track offsets themselves send [`TagCommand::Retag`] instead. No selection state is
//! stored between commands.
//!
//! # Example
//!
//! ```rust
//! use langmark_core::{CommandExecutor, CommandResult, TagCommand, TextRange};
//!
//! let mut executor = CommandExecutor::with_default_tags("Hello world");
//! let english = executor.document().tag_set().tag("inglés").unwrap();
//!
//! let result = executor
//!     .execute(TagCommand::RetagSelection {
//!         selected_text: "world".to_string(),
//!         tag: english,
//!     })
//!     .unwrap();
//!
//! assert!(matches!(
//!     result,
//!     CommandResult::Retagged { range, changed: true } if range == TextRange::new(6, 11)
//! ));
//! ```

use crate::document::Document;
use crate::error::SegmentError;
use crate::export::SegmentRecord;
use crate::range::TextRange;
use crate::search::SearchOptions;
use langmark_core_lang::{Tag, TagSet};
use std::sync::Arc;

/// Tagging commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCommand {
    /// Retag an explicit character range.
    Retag {
        /// Range start offset in characters.
        start: usize,
        /// Range end offset in characters (exclusive).
        end: usize,
        /// Tag to apply.
        tag: Tag,
    },
    /// Resolve selected text to its first occurrence, then retag that range.
    RetagSelection {
        /// The text the user selected.
        selected_text: String,
        /// Tag to apply.
        tag: Tag,
    },
    /// Resolve selected text to a range without modifying the document.
    Resolve {
        /// The text the user selected.
        selected_text: String,
    },
    /// Export the current segments.
    Export,
}

impl TagCommand {
    /// Returns `true` for commands that may modify the document.
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Retag { .. } | Self::RetagSelection { .. })
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// A retag was applied (or was a no-op).
    Retagged {
        /// The range that was retagged, after resolution and grapheme snapping.
        range: TextRange,
        /// Whether the segment list changed.
        changed: bool,
    },
    /// Selected text resolved to this range.
    Resolved(TextRange),
    /// Exported segments.
    Exported(Vec<SegmentRecord>),
}

/// Executes [`TagCommand`]s against an owned [`Document`].
pub struct CommandExecutor {
    /// The document being tagged
    document: Document,
    /// Command history
    command_history: Vec<TagCommand>,
    /// Matching options for selection resolution
    search_options: SearchOptions,
    /// Widen retag ranges to grapheme cluster boundaries
    snap_to_graphemes: bool,
}

impl CommandExecutor {
    /// Create an executor over a fresh document seeded with `text`.
    pub fn new(tags: Arc<TagSet>, text: &str) -> Self {
        Self::from_document(Document::new(tags, text))
    }

    /// Create an executor using the built-in tag set.
    pub fn with_default_tags(text: &str) -> Self {
        Self::from_document(Document::with_default_tags(text))
    }

    /// Wrap an existing document.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            command_history: Vec::new(),
            search_options: SearchOptions::default(),
            snap_to_graphemes: false,
        }
    }

    /// Execute command
    pub fn execute(&mut self, command: TagCommand) -> Result<CommandResult, SegmentError> {
        self.command_history.push(command.clone());

        match command {
            TagCommand::Retag { start, end, tag } => self.retag(TextRange::new(start, end), tag),
            TagCommand::RetagSelection { selected_text, tag } => {
                let range = self
                    .document
                    .resolve_with(&selected_text, self.search_options)?;
                self.retag(range, tag)
            }
            TagCommand::Resolve { selected_text } => self
                .document
                .resolve_with(&selected_text, self.search_options)
                .map(CommandResult::Resolved),
            TagCommand::Export => Ok(CommandResult::Exported(self.document.export())),
        }
    }

    /// Execute commands as one unit: either all succeed, or the document is left as it was.
    pub fn execute_batch(
        &mut self,
        commands: Vec<TagCommand>,
    ) -> Result<Vec<CommandResult>, SegmentError> {
        let snapshot = self.document.clone();
        let history_len = self.command_history.len();

        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            match self.execute(command) {
                Ok(result) => results.push(result),
                Err(err) => {
                    self.document = snapshot;
                    self.command_history.truncate(history_len);
                    return Err(err);
                }
            }
        }

        Ok(results)
    }

    fn retag(&mut self, range: TextRange, tag: Tag) -> Result<CommandResult, SegmentError> {
        let range = if self.snap_to_graphemes {
            range.snap_to_graphemes(&self.document.full_text())
        } else {
            range
        };
        let changed = self.document.apply(range, tag)?;
        Ok(CommandResult::Retagged { range, changed })
    }

    /// Get command history
    pub fn get_command_history(&self) -> &[TagCommand] {
        &self.command_history
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Swap in a different document, returning the previous one. History is kept.
    pub fn replace_document(&mut self, document: Document) -> Document {
        std::mem::replace(&mut self.document, document)
    }

    /// Matching options used by [`TagCommand::RetagSelection`] and [`TagCommand::Resolve`].
    pub fn search_options(&self) -> SearchOptions {
        self.search_options
    }

    /// Set matching options for selection resolution.
    pub fn set_search_options(&mut self, options: SearchOptions) {
        self.search_options = options;
    }

    /// Whether retag ranges are widened to grapheme cluster boundaries.
    pub fn snap_to_graphemes(&self) -> bool {
        self.snap_to_graphemes
    }

    /// Enable or disable grapheme snapping for retag ranges.
    pub fn set_snap_to_graphemes(&mut self, enabled: bool) {
        self.snap_to_graphemes = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_rolls_back_on_error() {
        let mut executor = CommandExecutor::with_default_tags("Hello world");
        let en = executor.document().tag_set().tag("inglés").unwrap();
        let before = executor.document().clone();

        let result = executor.execute_batch(vec![
            TagCommand::Retag {
                start: 0,
                end: 5,
                tag: en,
            },
            TagCommand::RetagSelection {
                selected_text: "xyz".to_string(),
                tag: en,
            },
        ]);

        assert!(matches!(result, Err(SegmentError::NotFound)));
        assert_eq!(executor.document(), &before);
        assert!(executor.get_command_history().is_empty());
    }

    #[test]
    fn test_resolve_does_not_modify() {
        let mut executor = CommandExecutor::with_default_tags("Hello world");
        let result = executor
            .execute(TagCommand::Resolve {
                selected_text: "world".to_string(),
            })
            .unwrap();
        assert_eq!(result, CommandResult::Resolved(TextRange::new(6, 11)));
        assert_eq!(executor.document().len(), 1);
    }

    #[test]
    fn test_grapheme_snapping() {
        let mut executor = CommandExecutor::with_default_tags("cafe\u{301}!");
        executor.set_snap_to_graphemes(true);
        let fr = executor.document().tag_set().tag("francés").unwrap();

        let result = executor
            .execute(TagCommand::Retag {
                start: 0,
                end: 4,
                tag: fr,
            })
            .unwrap();

        assert_eq!(
            result,
            CommandResult::Retagged {
                range: TextRange::new(0, 5),
                changed: true
            }
        );
        assert_eq!(executor.document().segments()[0].text, "cafe\u{301}");
    }
}
