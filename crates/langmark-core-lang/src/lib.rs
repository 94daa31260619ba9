#![warn(missing_docs)]
//! `langmark-core-lang` - tag set configuration for `langmark-core`.
//!
//! A [`TagSet`] is the closed list of labels a document may carry. The first entry is always the
//! generic (untagged) label; every other entry is a language label. Tags are handed out as small
//! [`Tag`] ids so the segment store can compare them cheaply and never needs to know what a label
//! means.
//!
//! Tag sets are usually built once from configuration:
//!
//! ```rust
//! use langmark_core_lang::TagSet;
//!
//! let tags = TagSet::from_yaml_str("generic: plain\nlanguages: [en, fr]\n").unwrap();
//! assert_eq!(tags.len(), 3);
//! assert_eq!(tags.label(tags.generic()), Some("plain"));
//! assert!(tags.tag("fr").is_some());
//! ```

mod config;
mod error;

pub use config::TagSetConfig;
pub use error::TagSetError;

/// Label used for the generic tag when none is configured.
pub const DEFAULT_GENERIC_LABEL: &str = "generic";

/// Language labels of the built-in tag set, in presentation order.
pub const DEFAULT_LANGUAGE_LABELS: [&str; 6] = [
    "español",
    "inglés",
    "francés",
    "alemán",
    "italiano",
    "portugués",
];

/// Opaque tag identifier.
///
/// A tag is only meaningful together with the [`TagSet`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u16);

impl Tag {
    /// The generic (untagged) tag. Every tag set reserves id 0 for it.
    pub const GENERIC: Self = Self(0);

    /// Raw numeric id (the label's position in its tag set).
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Returns `true` for [`Tag::GENERIC`].
    pub const fn is_generic(self) -> bool {
        self.0 == 0
    }
}

/// The closed enumeration of tags available to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    labels: Vec<String>,
}

impl TagSet {
    /// Build a tag set from a generic label and an ordered list of language labels.
    pub fn new<I, S>(generic: impl Into<String>, languages: I) -> Result<Self, TagSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels = vec![generic.into()];
        labels.extend(languages.into_iter().map(Into::into));

        if labels.len() > usize::from(u16::MAX) {
            return Err(TagSetError::TooManyTags(labels.len()));
        }

        for (idx, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(TagSetError::EmptyLabel);
            }
            if labels[..idx].contains(label) {
                return Err(TagSetError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    /// Parse a tag set from a YAML document (see [`TagSetConfig`]).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TagSetError> {
        let config: TagSetConfig = serde_yaml::from_str(yaml)?;
        config.build()
    }

    /// Parse a tag set from a JSON document (see [`TagSetConfig`]).
    pub fn from_json_str(json: &str) -> Result<Self, TagSetError> {
        let config: TagSetConfig = serde_json::from_str(json)?;
        config.build()
    }

    /// Load a tag set from disk. Files ending in `.json` are read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TagSetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// The generic (untagged) tag.
    pub fn generic(&self) -> Tag {
        Tag::GENERIC
    }

    /// Look up a tag by label (exact match).
    pub fn tag(&self, label: &str) -> Option<Tag> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|idx| Tag(idx as u16))
    }

    /// Label of a tag, or `None` if the tag does not belong to this set.
    pub fn label(&self, tag: Tag) -> Option<&str> {
        self.labels.get(usize::from(tag.0)).map(String::as_str)
    }

    /// Returns `true` if `tag` belongs to this set.
    pub fn contains(&self, tag: Tag) -> bool {
        usize::from(tag.0) < self.labels.len()
    }

    /// Number of tags, including the generic one.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// A tag set always holds at least the generic tag.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All tags with their labels, generic first.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (Tag(idx as u16), label.as_str()))
    }

    /// Language tags only (everything except the generic tag).
    pub fn languages(&self) -> impl Iterator<Item = (Tag, &str)> + '_ {
        self.iter().skip(1)
    }

    /// Convert back into a serializable config.
    pub fn to_config(&self) -> TagSetConfig {
        TagSetConfig {
            generic: self.labels[0].clone(),
            languages: self.labels[1..].to_vec(),
        }
    }
}

impl Default for TagSet {
    fn default() -> Self {
        let mut labels = vec![DEFAULT_GENERIC_LABEL.to_string()];
        labels.extend(DEFAULT_LANGUAGE_LABELS.iter().map(|l| l.to_string()));
        Self { labels }
    }
}
