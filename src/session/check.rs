use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::content::question::{CheckQuestion, MatchItem, validate_check_set};
use crate::error::ContentError;
use crate::session::answer::{AnswerKey, AnswerRecord, AnswerValue, Outcome};
use crate::session::cursor::Cursor;
use crate::session::shuffle::shuffled;

/// Mixed scenario/matching check. Feedback is shown only on request.
///
/// Option order is shuffled once in `new` and kept for the whole session,
/// so moving back and forth never reorders anything.
#[derive(Clone, Debug, Serialize)]
pub struct CheckSession {
    questions: Vec<CheckQuestion>,
    cursor: Cursor,
    answers: AnswerRecord,
    feedback_visible: bool,
}

fn shuffle_question<R: Rng + ?Sized>(q: &CheckQuestion, rng: &mut R) -> CheckQuestion {
    match q {
        CheckQuestion::Scenario {
            id,
            question,
            options,
            feedback,
        } => CheckQuestion::Scenario {
            id: *id,
            question: question.clone(),
            options: shuffled(options, rng),
            feedback: feedback.clone(),
        },
        CheckQuestion::Matching {
            id,
            question,
            items,
            feedback,
        } => CheckQuestion::Matching {
            id: *id,
            question: question.clone(),
            items: items
                .iter()
                .map(|item| MatchItem {
                    label: item.label.clone(),
                    options: shuffled(&item.options, rng),
                    correct: item.correct,
                })
                .collect(),
            feedback: feedback.clone(),
        },
    }
}

/// The correct option text is whatever sits at `correct` in the shuffled list.
fn item_correct_text(item: &MatchItem) -> Option<&str> {
    item.options.get(item.correct).map(String::as_str)
}

impl CheckSession {
    pub fn new<R: Rng + ?Sized>(
        questions: &[CheckQuestion],
        rng: &mut R,
    ) -> Result<Self, ContentError> {
        validate_check_set("check", questions)?;
        let questions: Vec<CheckQuestion> =
            questions.iter().map(|q| shuffle_question(q, rng)).collect();
        debug!("check session started with {} questions", questions.len());
        Ok(Self {
            cursor: Cursor::new(questions.len()),
            questions,
            answers: AnswerRecord::default(),
            feedback_visible: false,
        })
    }

    /// The session-fixed shuffled question set.
    pub fn shuffled_view(&self) -> &[CheckQuestion] {
        &self.questions
    }

    pub fn current(&self) -> &CheckQuestion {
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

    pub fn feedback(&self) -> &str {
        self.current().feedback()
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

    /// Records an answer without revealing feedback.
    pub fn select_answer(&mut self, key: AnswerKey, value: AnswerValue) {
        self.answers.set(key, value);
    }

    /// Picks the scenario option at `position` in the shuffled order.
    /// Returns false if the current question is not a scenario or the
    /// position is out of range.
    pub fn select_scenario_option(&mut self, position: usize) -> bool {
        let CheckQuestion::Scenario { id, options, .. } = self.current() else {
            return false;
        };
        let Some(option) = options.get(position) else {
            return false;
        };
        let (key, value) = (AnswerKey::Question(*id), AnswerValue::Text(option.text.clone()));
        self.select_answer(key, value);
        true
    }

    /// Picks option `position` (shuffled order) for matching item `item`.
    pub fn select_item_option(&mut self, item: usize, position: usize) -> bool {
        let CheckQuestion::Matching { id, items, .. } = self.current() else {
            return false;
        };
        let in_range = items.get(item).is_some_and(|it| position < it.options.len());
        if !in_range {
            return false;
        }
        let key = AnswerKey::Item(*id, item);
        self.select_answer(key, AnswerValue::Index(position));
        true
    }

    pub fn reveal_feedback(&mut self) {
        let q = self.current();
        debug!("feedback revealed for {} question {}", q.kind_str(), q.id());
        self.feedback_visible = true;
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

    /// Selected scenario option text. An index answer is resolved through
    /// the shuffled option list.
    pub fn scenario_selected(&self) -> Option<&str> {
        let CheckQuestion::Scenario { id, options, .. } = self.current() else {
            return None;
        };
        match self.answers.get(&AnswerKey::Question(*id))? {
            AnswerValue::Text(t) => Some(t.as_str()),
            AnswerValue::Index(i) => options.get(*i).map(|o| o.text.as_str()),
        }
    }

    /// Outcome of the scenario option at `position`, judged by its own flag.
    /// Unselected options report `Unanswered`.
    pub fn scenario_option_outcome(&self, position: usize) -> Outcome {
        let CheckQuestion::Scenario { options, .. } = self.current() else {
            return Outcome::Unanswered;
        };
        match (options.get(position), self.scenario_selected()) {
            (Some(option), Some(selected)) if option.text == selected => {
                Outcome::from_bool(option.correct)
            }
            _ => Outcome::Unanswered,
        }
    }

    /// Selected option text for a matching item, resolved through the
    /// shuffled list.
    fn item_selected_text(&self, id: u32, item_idx: usize, item: &MatchItem) -> Option<String> {
        match self.answers.get(&AnswerKey::Item(id, item_idx))? {
            AnswerValue::Index(i) => item.options.get(*i).cloned(),
            AnswerValue::Text(t) => Some(t.clone()),
        }
    }

    pub fn item_selected(&self, item: usize) -> Option<usize> {
        self.answers
            .get(&AnswerKey::Item(self.current().id(), item))
            .and_then(AnswerValue::as_index)
    }

    pub fn item_outcome(&self, item_idx: usize) -> Outcome {
        let CheckQuestion::Matching { id, items, .. } = self.current() else {
            return Outcome::Unanswered;
        };
        let Some(item) = items.get(item_idx) else {
            return Outcome::Unanswered;
        };
        match self.item_selected_text(*id, item_idx, item) {
            Some(selected) => {
                Outcome::from_bool(item_correct_text(item) == Some(selected.as_str()))
            }
            None => Outcome::Unanswered,
        }
    }

    /// Outcome of one option button under a matching item.
    pub fn item_option_outcome(&self, item: usize, position: usize) -> Outcome {
        if self.item_selected(item) == Some(position) {
            self.item_outcome(item)
        } else {
            Outcome::Unanswered
        }
    }

    /// Tri-state outcome of the current question.
    ///
    /// Matching questions are `Unanswered` until some item is answered and
    /// `Correct` only when every item is.
    pub fn outcome(&self) -> Outcome {
        match self.current() {
            CheckQuestion::Scenario { id, options, .. } => {
                if !self.answers.contains(&AnswerKey::Question(*id)) {
                    return Outcome::Unanswered;
                }
                // A recorded answer naming no option counts as wrong.
                self.scenario_selected()
                    .and_then(|selected| options.iter().find(|o| o.text == selected))
                    .map(|o| Outcome::from_bool(o.correct))
                    .unwrap_or(Outcome::Incorrect)
            }
            CheckQuestion::Matching { items, .. } => {
                let outcomes: Vec<Outcome> =
                    (0..items.len()).map(|i| self.item_outcome(i)).collect();
                if outcomes.iter().all(|o| *o == Outcome::Unanswered) {
                    Outcome::Unanswered
                } else {
                    Outcome::from_bool(outcomes.iter().all(|o| *o == Outcome::Correct))
                }
            }
        }
    }
}
