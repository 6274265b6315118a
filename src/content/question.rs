use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, MAX_OPTIONS};

/// Single-choice retrieval question. `correct` indexes into `options`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizQuestion {
    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchItem {
    pub label: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// Understanding-check question. Scenario correctness travels with the
/// option; matching correctness is positional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CheckQuestion {
    Scenario {
        id: u32,
        question: String,
        options: Vec<ScenarioOption>,
        feedback: String,
    },
    Matching {
        id: u32,
        question: String,
        items: Vec<MatchItem>,
        feedback: String,
    },
}

impl CheckQuestion {
    pub fn id(&self) -> u32 {
        match self {
            CheckQuestion::Scenario { id, .. } | CheckQuestion::Matching { id, .. } => *id,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            CheckQuestion::Scenario { question, .. } | CheckQuestion::Matching { question, .. } => {
                question
            }
        }
    }

    pub fn feedback(&self) -> &str {
        match self {
            CheckQuestion::Scenario { feedback, .. } | CheckQuestion::Matching { feedback, .. } => {
                feedback
            }
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            CheckQuestion::Scenario { .. } => "scenario",
            CheckQuestion::Matching { .. } => "matching",
        }
    }
}

fn check_option_count(id: u32, count: usize) -> Result<(), ContentError> {
    if count == 0 {
        return Err(ContentError::NoOptions { id });
    }
    if count > MAX_OPTIONS {
        return Err(ContentError::TooManyOptions { id, count });
    }
    Ok(())
}

fn check_unique_ids(set: &str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateQuestionId {
                set: set.to_string(),
                id,
            });
        }
    }
    Ok(())
}

pub fn validate_quiz_set(set: &str, questions: &[QuizQuestion]) -> Result<(), ContentError> {
    if questions.is_empty() {
        return Err(ContentError::EmptySet {
            set: set.to_string(),
        });
    }
    check_unique_ids(set, questions.iter().map(|q| q.id))?;

    for q in questions {
        check_option_count(q.id, q.options.len())?;
        if q.correct >= q.options.len() {
            return Err(ContentError::CorrectOutOfRange {
                id: q.id,
                correct: q.correct,
                len: q.options.len(),
            });
        }
    }
    Ok(())
}

pub fn validate_check_set(set: &str, questions: &[CheckQuestion]) -> Result<(), ContentError> {
    if questions.is_empty() {
        return Err(ContentError::EmptySet {
            set: set.to_string(),
        });
    }
    check_unique_ids(set, questions.iter().map(CheckQuestion::id))?;

    for q in questions {
        match q {
            CheckQuestion::Scenario { id, options, .. } => {
                check_option_count(*id, options.len())?;
                let count = options.iter().filter(|o| o.correct).count();
                if count != 1 {
                    return Err(ContentError::CorrectOptionCount { id: *id, count });
                }
                // Answers are recorded by text, so texts must identify options.
                let mut texts = HashSet::new();
                for option in options {
                    if !texts.insert(option.text.as_str()) {
                        return Err(ContentError::DuplicateOptionText {
                            id: *id,
                            text: option.text.clone(),
                        });
                    }
                }
            }
            CheckQuestion::Matching { id, items, .. } => {
                if items.is_empty() {
                    return Err(ContentError::NoMatchItems { id: *id });
                }
                for (idx, item) in items.iter().enumerate() {
                    if item.options.is_empty() {
                        return Err(ContentError::ItemNoOptions { id: *id, item: idx });
                    }
                    if item.options.len() > MAX_OPTIONS {
                        return Err(ContentError::TooManyOptions {
                            id: *id,
                            count: item.options.len(),
                        });
                    }
                    if item.correct >= item.options.len() {
                        return Err(ContentError::ItemCorrectOutOfRange {
                            id: *id,
                            item: idx,
                            correct: item.correct,
                            len: item.options.len(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
