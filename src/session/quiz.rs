use log::debug;
use serde::Serialize;

use crate::content::question::{QuizQuestion, validate_quiz_set};
use crate::error::ContentError;
use crate::session::answer::{AnswerKey, AnswerRecord, AnswerValue, Outcome};
use crate::session::cursor::Cursor;

/// Linear single-choice quiz. Picking an option reveals feedback at once.
#[derive(Clone, Debug, Serialize)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    cursor: Cursor,
    answers: AnswerRecord,
    feedback_visible: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, ContentError> {
        validate_quiz_set("do_now", &questions)?;
        let cursor = Cursor::new(questions.len());
        Ok(Self {
            questions,
            cursor,
            answers: AnswerRecord::default(),
            feedback_visible: false,
        })
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.cursor.index()]
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    pub fn is_first(&self) -> bool {
        self.cursor.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.cursor.is_last()
    }

    pub fn progress(&self) -> f64 {
        self.cursor.progress()
    }

    /// Records `option` for the current question, replacing any earlier pick.
    pub fn select_answer(&mut self, option: usize) {
        let q = self.current();
        if option >= q.options.len() {
            debug!("ignoring option {option} for question {} ({} options)", q.id, q.options.len());
            return;
        }
        let key = AnswerKey::Question(q.id);
        self.answers.set(key, AnswerValue::Index(option));
        self.feedback_visible = true;
    }

    pub fn selected(&self) -> Option<usize> {
        self.answers
            .get(&AnswerKey::Question(self.current().id))
            .and_then(AnswerValue::as_index)
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.cursor.advance();
        if moved {
            self.feedback_visible = false;
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.cursor.retreat();
        if moved {
            self.feedback_visible = false;
        }
        moved
    }

    pub fn outcome(&self) -> Outcome {
        match self.selected() {
            Some(idx) => Outcome::from_bool(idx == self.current().correct),
            None => Outcome::Unanswered,
        }
    }

    /// Only the selected option is coloured; the rest stay neutral.
    pub fn option_outcome(&self, option: usize) -> Outcome {
        if self.selected() == Some(option) {
            self.outcome()
        } else {
            Outcome::Unanswered
        }
    }

    pub fn feedback_message(&self) -> String {
        match self.outcome() {
            Outcome::Correct => "✓ Correct!".to_string(),
            Outcome::Incorrect => format!(
                "✗ Incorrect. The correct answer is: {}",
                self.current().correct_text()
            ),
            Outcome::Unanswered => "Select an answer.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_questions() -> Vec<QuizQuestion> {
        (1..=5)
            .map(|id| QuizQuestion {
                id,
                question: format!("Prior knowledge question {id}"),
                options: vec!["A".into(), "B".into(), "C".into()],
                correct: (id as usize - 1) % 3,
            })
            .collect()
    }

    #[test]
    fn test_new_session() {
        let s = QuizSession::new(five_questions()).unwrap();
        assert_eq!(s.index(), 0);
        assert_eq!(s.len(), 5);
        assert!(!s.feedback_visible());
        assert_eq!(s.outcome(), Outcome::Unanswered);
        assert_eq!(s.progress(), 0.2);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(QuizSession::new(Vec::new()).is_err());
    }

    #[test]
    fn test_select_reveals_feedback() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(0);
        assert!(s.feedback_visible());
        assert_eq!(s.outcome(), Outcome::Correct);
        assert_eq!(s.feedback_message(), "✓ Correct!");
    }

    #[test]
    fn test_incorrect_message_names_correct_option() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(2);
        assert_eq!(s.outcome(), Outcome::Incorrect);
        assert_eq!(s.feedback_message(), "✗ Incorrect. The correct answer is: A");
    }

    #[test]
    fn test_select_overwrites_previous_answer() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(1);
        s.select_answer(0);
        assert_eq!(s.selected(), Some(0));
        assert_eq!(s.answers().len(), 1);
    }

    #[test]
    fn test_out_of_range_option_ignored() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(7);
        assert_eq!(s.selected(), None);
        assert!(!s.feedback_visible());
    }

    #[test]
    fn test_navigation_hides_feedback() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(0);
        assert!(s.advance());
        assert!(!s.feedback_visible());

        s.select_answer(1);
        assert!(s.retreat());
        assert!(!s.feedback_visible());
    }

    #[test]
    fn test_no_op_navigation_keeps_feedback() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(0);
        assert!(!s.retreat());
        assert!(s.feedback_visible());
    }

    #[test]
    fn test_answers_persist_across_navigation() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(2);
        s.advance();
        s.retreat();
        assert_eq!(s.selected(), Some(2));
        assert_eq!(s.outcome(), Outcome::Incorrect);
    }

    #[test]
    fn test_advance_at_last_is_no_op() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        while s.advance() {}
        assert_eq!(s.index(), 4);
        assert!(s.is_last());
        assert!(!s.advance());
        assert_eq!(s.index(), 4);
        assert_eq!(s.progress(), 1.0);
    }

    #[test]
    fn test_option_outcome_only_marks_selection() {
        let mut s = QuizSession::new(five_questions()).unwrap();
        s.select_answer(1);
        assert_eq!(s.option_outcome(1), Outcome::Incorrect);
        assert_eq!(s.option_outcome(0), Outcome::Unanswered);
        assert_eq!(s.option_outcome(2), Outcome::Unanswered);
    }
}
