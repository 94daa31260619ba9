use serde::{Deserialize, Serialize};

use crate::{DEFAULT_GENERIC_LABEL, TagSet, TagSetError};

/// Serialized form of a [`TagSet`].
///
/// ```yaml
/// generic: generic
/// languages:
///   - inglés
///   - francés
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagSetConfig {
    #[serde(default = "default_generic")]
    /// Label of the generic (untagged) tag.
    pub generic: String,

    #[serde(default)]
    /// Language labels, in presentation order.
    pub languages: Vec<String>,
}

fn default_generic() -> String {
    DEFAULT_GENERIC_LABEL.to_string()
}

impl TagSetConfig {
    /// Validate the config and build the tag set.
    pub fn build(self) -> Result<TagSet, TagSetError> {
        TagSet::new(self.generic, self.languages)
    }
}

impl Default for TagSetConfig {
    fn default() -> Self {
        TagSet::default().to_config()
    }
}
