use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Key into an `AnswerRecord`. Matching items are keyed `"{id}-{item}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    Question(u32),
    Item(u32, usize),
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Question(id) => write!(f, "{id}"),
            AnswerKey::Item(id, item) => write!(f, "{id}-{item}"),
        }
    }
}

impl Serialize for AnswerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Index(usize),
    Text(String),
}

impl AnswerValue {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            AnswerValue::Index(i) => Some(*i),
            AnswerValue::Text(_) => None,
        }
    }
}

/// Selections made during one session. Entries are overwritten, never removed.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnswerRecord {
    entries: HashMap<AnswerKey, AnswerValue>,
}

impl AnswerRecord {
    pub fn set(&mut self, key: AnswerKey, value: AnswerValue) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &AnswerKey) -> Option<&AnswerValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &AnswerKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Correct,
    Incorrect,
    Unanswered,
}

impl Outcome {
    pub fn from_bool(correct: bool) -> Self {
        if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    pub fn is_answered(self) -> bool {
        self != Outcome::Unanswered
    }
}
