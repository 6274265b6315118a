use std::path::PathBuf;

use thiserror::Error;

/// Options per question are picked with the digit keys 1-9.
pub const MAX_OPTIONS: usize = 9;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("question set `{set}` is empty")]
    EmptySet { set: String },

    #[error("question set `{set}` has duplicate question id {id}")]
    DuplicateQuestionId { set: String, id: u32 },

    #[error("question {id} has no options")]
    NoOptions { id: u32 },

    #[error("question {id} has {count} options (at most {MAX_OPTIONS} are supported)")]
    TooManyOptions { id: u32, count: usize },

    #[error("question {id} marks option {correct} correct but only has {len} options")]
    CorrectOutOfRange { id: u32, correct: usize, len: usize },

    #[error("scenario question {id} must flag exactly one option correct (found {count})")]
    CorrectOptionCount { id: u32, count: usize },

    #[error("scenario question {id} repeats option text `{text}`")]
    DuplicateOptionText { id: u32, text: String },

    #[error("matching question {id} has no items")]
    NoMatchItems { id: u32 },

    #[error("matching question {id}, item {item}: correct index {correct} is out of range for {len} options")]
    ItemCorrectOutOfRange {
        id: u32,
        item: usize,
        correct: usize,
        len: usize,
    },

    #[error("matching question {id}, item {item} has no options")]
    ItemNoOptions { id: u32, item: usize },

    #[error("deck has no lessons")]
    NoLessons,

    #[error("deck has duplicate lesson id {0}")]
    DuplicateLessonId(u32),

    #[error("deck has no lesson with id {0}")]
    UnknownLesson(u32),

    #[error("unsupported deck format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("embedded asset `{0}` is missing")]
    MissingAsset(String),

    #[error("failed to read deck: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML deck: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON deck: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
