pub mod answer;
pub mod check;
pub mod cursor;
pub mod quiz;
pub mod shuffle;

pub use answer::{AnswerKey, AnswerRecord, AnswerValue, Outcome};
pub use check::CheckSession;
pub use cursor::Cursor;
pub use quiz::QuizSession;
