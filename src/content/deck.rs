use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::content::question::{
    CheckQuestion, QuizQuestion, validate_check_set, validate_quiz_set,
};
use crate::error::ContentError;
use crate::ui::lesson_theme::DEFAULT_THEME_KEY;

#[derive(Embed)]
#[folder = "assets/decks/"]
struct DeckAssets;

pub const DEFAULT_DECK: &str = "reference.toml";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub complete: bool,
    #[serde(default = "default_theme_key")]
    pub theme: String,
    /// Overrides the deck-wide Do Now set for this lesson.
    #[serde(default)]
    pub do_now: Option<Vec<QuizQuestion>>,
    /// Overrides the deck-wide understanding check for this lesson.
    #[serde(default)]
    pub check: Option<Vec<CheckQuestion>>,
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}

fn default_deck_name() -> String {
    "Lesson Deck".to_string()
}

/// Lesson registry plus the question sets handed to each quiz slide.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default = "default_deck_name")]
    pub name: String,
    pub lessons: Vec<Lesson>,
    pub do_now: Vec<QuizQuestion>,
    pub check: Vec<CheckQuestion>,
}

impl Deck {
    pub fn load_default() -> Result<Self, ContentError> {
        let file = DeckAssets::get(DEFAULT_DECK)
            .ok_or_else(|| ContentError::MissingAsset(DEFAULT_DECK.to_string()))?;
        let content = std::str::from_utf8(file.data.as_ref())?;
        Self::from_toml_str(content)
    }

    /// Load a deck from disk; the extension picks the format.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ContentError> {
        let deck: Deck = toml::from_str(content)?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ContentError> {
        let deck: Deck = serde_json::from_str(content)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Reject malformed content up front so rendering never has to.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.lessons.is_empty() {
            return Err(ContentError::NoLessons);
        }
        let mut ids = HashSet::new();
        for lesson in &self.lessons {
            if !ids.insert(lesson.id) {
                return Err(ContentError::DuplicateLessonId(lesson.id));
            }
        }

        validate_quiz_set("do_now", &self.do_now)?;
        validate_check_set("check", &self.check)?;

        for lesson in &self.lessons {
            if let Some(ref set) = lesson.do_now {
                validate_quiz_set(&format!("lesson {} do_now", lesson.id), set)?;
            }
            if let Some(ref set) = lesson.check {
                validate_check_set(&format!("lesson {} check", lesson.id), set)?;
            }
        }
        Ok(())
    }

    pub fn lesson(&self, id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == id)
    }

    /// First lesson flagged active, or the first lesson in the registry.
    pub fn start_lesson(&self) -> u32 {
        self.lessons
            .iter()
            .find(|l| l.active)
            .or_else(|| self.lessons.first())
            .map(|l| l.id)
            .unwrap_or_default()
    }

    pub fn do_now_for(&self, lesson_id: u32) -> &[QuizQuestion] {
        self.lesson(lesson_id)
            .and_then(|l| l.do_now.as_deref())
            .unwrap_or(&self.do_now)
    }

    pub fn check_for(&self, lesson_id: u32) -> &[CheckQuestion] {
        self.lesson(lesson_id)
            .and_then(|l| l.check.as_deref())
            .unwrap_or(&self.check)
    }

    pub fn theme_for(&self, lesson_id: u32) -> &str {
        self.lesson(lesson_id)
            .map(|l| l.theme.as_str())
            .unwrap_or(DEFAULT_THEME_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
name = "Test Deck"

[[lessons]]
id = 1
title = "01: Intro"

[[lessons]]
id = 2
title = "02: Next"
active = true
theme = "amber"

[[lessons.do_now]]
id = 1
question = "Override"
options = ["X", "Y"]
correct = 1

[[do_now]]
id = 1
question = "Default"
options = ["A", "B", "C"]
correct = 0

[[check]]
type = "scenario"
id = 1
question = "Pick one"
options = [{ text = "Right", correct = true }, { text = "Wrong", correct = false }]
feedback = "Right is right."
"#;

    #[test]
    fn test_default_deck_loads_and_validates() {
        let deck = Deck::load_default().unwrap();
        assert_eq!(deck.lessons.len(), 8);
        assert_eq!(deck.start_lesson(), 1);
        assert_eq!(deck.do_now.len(), 5);
        assert_eq!(deck.check.len(), 5);
    }

    #[test]
    fn test_lesson_overrides_fall_back_to_deck_sets() {
        let deck = Deck::from_toml_str(MINIMAL).unwrap();
        assert_eq!(deck.name, "Test Deck");
        assert_eq!(deck.do_now_for(1)[0].question, "Default");
        assert_eq!(deck.do_now_for(2)[0].question, "Override");
        assert_eq!(deck.check_for(2).len(), 1);
        assert_eq!(deck.theme_for(1), DEFAULT_THEME_KEY);
        assert_eq!(deck.theme_for(2), "amber");
    }

    #[test]
    fn test_start_lesson_prefers_active_flag() {
        let deck = Deck::from_toml_str(MINIMAL).unwrap();
        assert_eq!(deck.start_lesson(), 2);
    }

    #[test]
    fn test_duplicate_lesson_id_rejected() {
        let broken = MINIMAL.replace("id = 2\ntitle", "id = 1\ntitle");
        let err = Deck::from_toml_str(&broken).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateLessonId(1)));
    }

    #[test]
    fn test_bad_override_fails_at_load() {
        let broken = MINIMAL.replace(
            "options = [\"X\", \"Y\"]\ncorrect = 1",
            "options = [\"X\", \"Y\"]\ncorrect = 4",
        );
        let err = Deck::from_toml_str(&broken).unwrap_err();
        assert!(matches!(err, ContentError::CorrectOutOfRange { correct: 4, .. }));
    }

    #[test]
    fn test_from_path_json() {
        let deck = Deck::from_toml_str(MINIMAL).unwrap();
        let json = serde_json::to_string_pretty(&deck).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Deck::from_path(&path).unwrap();
        assert_eq!(loaded.lessons.len(), 2);
        assert_eq!(loaded.check_for(1)[0].kind_str(), "scenario");
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        fs::write(&path, "lessons: []").unwrap();
        let err = Deck::from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Deck::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
