use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::{Outcome, QuizSession};
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::theme::{Theme, ThemeColors};

/// Colour for an option or feedback panel in a given state.
pub fn outcome_color(colors: &ThemeColors, outcome: Outcome) -> Color {
    match outcome {
        Outcome::Correct => colors.correct(),
        Outcome::Incorrect => colors.incorrect(),
        Outcome::Unanswered => colors.fg(),
    }
}

/// Option button line: `[n] text`, highlighted once selected.
pub fn option_line(
    colors: &ThemeColors,
    number: usize,
    text: &str,
    outcome: Outcome,
    presentation: bool,
) -> Line<'static> {
    let marker = match outcome {
        Outcome::Correct => " ✓",
        Outcome::Incorrect => " ✗",
        Outcome::Unanswered => "",
    };
    let mut style = Style::default().fg(outcome_color(colors, outcome));
    if outcome.is_answered() || presentation {
        style = style.add_modifier(Modifier::BOLD);
    }
    Line::from(vec![
        Span::styled(format!("  [{number}] "), Style::default().fg(colors.text_muted())),
        Span::styled(format!("{text}{marker}"), style),
    ])
}

/// Previous/next row shared by both quiz widgets.
pub fn nav_line(colors: &ThemeColors, is_first: bool, is_last: bool, done: &str) -> Line<'static> {
    let prev_style = if is_first {
        Style::default().fg(colors.border())
    } else {
        Style::default().fg(colors.fg())
    };
    let next = if is_last {
        Span::styled(
            format!("✓ {done}"),
            Style::default().fg(colors.correct()).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Next → ]",
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        Span::styled("[ ← Previous", prev_style),
        Span::raw("      "),
        next,
    ])
}

pub struct QuizView<'a> {
    pub session: &'a QuizSession,
    pub presentation: bool,
    pub theme: &'a Theme,
}

impl<'a> QuizView<'a> {
    pub fn new(session: &'a QuizSession, presentation: bool, theme: &'a Theme) -> Self {
        Self {
            session,
            presentation,
            theme,
        }
    }
}

impl Widget for QuizView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let s = self.session;
        let q = s.current();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let label = format!("Question {} of {}", s.index() + 1, s.len());
        ProgressBar::new(&label, s.progress(), self.theme).render(layout[0], buf);

        let mut lines = vec![
            Line::from(Span::styled(
                q.question.clone(),
                Style::default().fg(colors.header_fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (i, option) in q.options.iter().enumerate() {
            lines.push(option_line(colors, i + 1, option, s.option_outcome(i), self.presentation));
            if self.presentation {
                lines.push(Line::from(""));
            }
        }

        if s.feedback_visible() {
            let outcome = s.outcome();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                s.feedback_message(),
                Style::default()
                    .fg(outcome_color(colors, outcome))
                    .add_modifier(Modifier::BOLD),
            )));
        }

        lines.push(Line::from(""));
        lines.push(nav_line(colors, s.is_first(), s.is_last(), "Quiz Complete"));

        let card = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.surface()));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card)
            .render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::question::QuizQuestion;

    fn session() -> QuizSession {
        QuizSession::new(vec![
            QuizQuestion {
                id: 1,
                question: "Which came first?".into(),
                options: vec!["Alpha".into(), "Beta".into()],
                correct: 0,
            },
            QuizQuestion {
                id: 2,
                question: "Which came second?".into(),
                options: vec!["Alpha".into(), "Beta".into()],
                correct: 1,
            },
        ])
        .unwrap()
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_question_and_options() {
        let theme = Theme::default();
        let s = session();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        QuizView::new(&s, false, &theme).render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("Question 1 of 2"));
        assert!(out.contains("Which came first?"));
        assert!(out.contains("[1] Alpha"));
        assert!(out.contains("[2] Beta"));
        assert!(!out.contains("Incorrect"));
    }

    #[test]
    fn test_renders_incorrect_feedback() {
        let theme = Theme::default();
        let mut s = session();
        s.select_answer(1);
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        QuizView::new(&s, false, &theme).render(area, &mut buf);
        assert!(text(&buf).contains("The correct answer is: Alpha"));
    }

    #[test]
    fn test_last_question_shows_complete() {
        let theme = Theme::default();
        let mut s = session();
        s.advance();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        QuizView::new(&s, true, &theme).render(area, &mut buf);
        assert!(text(&buf).contains("Quiz Complete"));
    }
}
