use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::content::deck::{Deck, Lesson};
use crate::content::question::CheckQuestion;
use crate::session::{CheckSession, Cursor, QuizSession};
use crate::slides::{SLIDE_COUNT, SlideView, slide_view};
use crate::ui::lesson_theme::{self, StyleBundle};
use crate::ui::theme::Theme;

/// Session owned by the mounted slide. Dropped when the slide or lesson changes.
pub enum ActiveSession {
    DoNow(QuizSession),
    Check(CheckSession),
}

pub struct App {
    pub deck: Deck,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub presentation: bool,
    pub session: Option<ActiveSession>,
    /// Matching item that digit keys answer.
    pub focused_item: usize,
    pub should_quit: bool,
    slide: Cursor,
    lesson_id: u32,
    rng: SmallRng,
}

impl App {
    pub fn new(deck: Deck, config: &Config, theme: Theme) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let lesson_id = deck.start_lesson();
        let mut app = Self {
            deck,
            theme,
            sidebar_open: config.sidebar_open,
            presentation: config.start_presentation,
            session: None,
            focused_item: 0,
            should_quit: false,
            slide: Cursor::new(SLIDE_COUNT),
            lesson_id,
            rng,
        };
        app.mount_slide();
        app
    }

    pub fn slide_index(&self) -> usize {
        self.slide.index()
    }

    pub fn slide_count(&self) -> usize {
        self.slide.len()
    }

    pub fn lesson_id(&self) -> u32 {
        self.lesson_id
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.deck.lesson(self.lesson_id)
    }

    pub fn current_view(&self) -> SlideView {
        slide_view(self.slide.index())
    }

    pub fn lesson_style(&self) -> StyleBundle {
        lesson_theme::resolve(self.deck.theme_for(self.lesson_id))
    }

    pub fn next_slide(&mut self) -> bool {
        let moved = self.slide.advance();
        if moved {
            self.mount_slide();
        }
        moved
    }

    pub fn prev_slide(&mut self) -> bool {
        let moved = self.slide.retreat();
        if moved {
            self.mount_slide();
        }
        moved
    }

    /// Switches lesson and always returns to the first slide.
    pub fn select_lesson(&mut self, id: u32) -> bool {
        if self.deck.lesson(id).is_none() {
            warn!("ignoring unknown lesson {id}");
            return false;
        }
        self.lesson_id = id;
        self.slide.reset();
        self.mount_slide();
        true
    }

    pub fn select_next_lesson(&mut self) -> bool {
        let Some(pos) = self.deck.position(self.lesson_id) else {
            return false;
        };
        match self.deck.lessons.get(pos + 1).map(|l| l.id) {
            Some(id) => self.select_lesson(id),
            None => false,
        }
    }

    pub fn select_prev_lesson(&mut self) -> bool {
        match self.deck.position(self.lesson_id) {
            Some(pos) if pos > 0 => {
                let id = self.deck.lessons[pos - 1].id;
                self.select_lesson(id)
            }
            _ => false,
        }
    }

    pub fn toggle_presentation(&mut self) {
        self.presentation = !self.presentation;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Sidebar is never drawn in presentation mode.
    pub fn sidebar_visible(&self) -> bool {
        !self.presentation
    }

    fn mount_slide(&mut self) {
        let view = self.current_view();
        self.focused_item = 0;
        self.session = match view {
            SlideView::DoNow => {
                let questions = self.deck.do_now_for(self.lesson_id).to_vec();
                match QuizSession::new(questions) {
                    Ok(session) => Some(ActiveSession::DoNow(session)),
                    Err(e) => {
                        warn!("lesson {} has no usable Do Now set: {e}", self.lesson_id);
                        None
                    }
                }
            }
            SlideView::Check => {
                let questions = self.deck.check_for(self.lesson_id);
                match CheckSession::new(questions, &mut self.rng) {
                    Ok(session) => Some(ActiveSession::Check(session)),
                    Err(e) => {
                        warn!("lesson {} has no usable check set: {e}", self.lesson_id);
                        None
                    }
                }
            }
            _ => None,
        };
        debug!(
            "lesson {} slide {} mounted {:?} (session: {})",
            self.lesson_id,
            self.slide.index(),
            view,
            self.session.is_some()
        );
    }

    /// Digit-key answer: option `n` (zero-based) on the active question.
    pub fn select_option(&mut self, n: usize) {
        let focused = self.focused_item;
        match self.session {
            Some(ActiveSession::DoNow(ref mut s)) => s.select_answer(n),
            Some(ActiveSession::Check(ref mut s)) => {
                if !s.select_scenario_option(n) {
                    s.select_item_option(focused, n);
                }
            }
            None => {}
        }
    }

    pub fn next_question(&mut self) {
        let moved = match self.session {
            Some(ActiveSession::DoNow(ref mut s)) => s.advance(),
            Some(ActiveSession::Check(ref mut s)) => s.advance(),
            None => false,
        };
        if moved {
            self.focused_item = 0;
        }
    }

    pub fn prev_question(&mut self) {
        let moved = match self.session {
            Some(ActiveSession::DoNow(ref mut s)) => s.retreat(),
            Some(ActiveSession::Check(ref mut s)) => s.retreat(),
            None => false,
        };
        if moved {
            self.focused_item = 0;
        }
    }

    pub fn reveal_feedback(&mut self) {
        if let Some(ActiveSession::Check(ref mut s)) = self.session {
            s.reveal_feedback();
        }
    }

    fn matching_item_count(&self) -> usize {
        match self.session {
            Some(ActiveSession::Check(ref s)) => match s.current() {
                CheckQuestion::Matching { items, .. } => items.len(),
                _ => 0,
            },
            _ => 0,
        }
    }

    pub fn focus_next_item(&mut self) {
        let count = self.matching_item_count();
        if self.focused_item + 1 < count {
            self.focused_item += 1;
        }
    }

    pub fn focus_prev_item(&mut self) {
        self.focused_item = self.focused_item.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right => {
                self.next_slide();
            }
            KeyCode::Left => {
                self.prev_slide();
            }
            KeyCode::Enter if self.current_view() == SlideView::Title => {
                self.next_slide();
            }
            KeyCode::Char(ch @ '1'..='9') => {
                let n = ch as usize - '1' as usize;
                self.select_option(n);
            }
            KeyCode::Up | KeyCode::Char('k') => self.focus_prev_item(),
            KeyCode::Down | KeyCode::Char('j') => self.focus_next_item(),
            KeyCode::Char('f') => self.reveal_feedback(),
            KeyCode::Char(']') => self.next_question(),
            KeyCode::Char('[') => self.prev_question(),
            KeyCode::Tab => self.toggle_sidebar(),
            KeyCode::PageDown => {
                self.select_next_lesson();
            }
            KeyCode::PageUp => {
                self.select_prev_lesson();
            }
            KeyCode::Char('p') | KeyCode::F(5) => self.toggle_presentation(),
            _ => {}
        }
    }
}
