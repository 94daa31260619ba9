use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building or loading a [`TagSet`](crate::TagSet).
pub enum TagSetError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    /// JSON parsing failed.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("tag labels cannot be empty")]
    /// A label was empty or whitespace only.
    EmptyLabel,

    #[error("duplicate tag label '{0}'")]
    /// The same label appeared twice.
    DuplicateLabel(String),

    #[error("too many tags: {0}")]
    /// More labels than a [`Tag`](crate::Tag) id can address.
    TooManyTags(usize),
}
