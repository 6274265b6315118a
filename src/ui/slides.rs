use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::app::{ActiveSession, App};
use crate::slides::SlideView;
use crate::ui::components::check_view::CheckView;
use crate::ui::components::phase_header::PhaseHeader;
use crate::ui::components::quiz_view::QuizView;
use crate::ui::components::slide_frame::SlideFrame;
use crate::ui::layout::centered_column;
use crate::ui::lesson_theme;
use crate::ui::theme::Theme;

/// Renders whichever slide the shell currently points at.
pub struct SlideWidget<'a> {
    app: &'a App,
    view: SlideView,
}

impl<'a> SlideWidget<'a> {
    pub fn new(app: &'a App) -> Self {
        Self::with_view(app, app.current_view())
    }

    /// Renders `view` with the app's lesson and session state.
    pub fn with_view(app: &'a App, view: SlideView) -> Self {
        Self { app, view }
    }

    fn theme(&self) -> &'a Theme {
        &self.app.theme
    }

    fn card(
        &self,
        title: Option<(String, Color)>,
        lines: Vec<Line<'static>>,
        accent: Color,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let colors = &self.theme().colors;
        let mut block = Block::bordered()
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(colors.surface()));
        if let Some((text, color)) = title {
            block = block.title(Span::styled(
                format!(" {text} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn muted(&self, text: impl Into<String>) -> Line<'static> {
        Line::from(Span::styled(
            text.into(),
            Style::default().fg(self.theme().colors.text_muted()),
        ))
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme().colors;
        let tint = self.app.lesson_style();
        let id = self.app.lesson_id();
        let title = self
            .app
            .lesson()
            .map(|l| l.title.split_once(": ").map_or(l.title.as_str(), |(_, t)| t))
            .unwrap_or("Lesson")
            .to_uppercase();

        let lines = vec![
            Line::from(Span::styled(
                "◉",
                Style::default().fg(tint.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(colors.header_fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("────────────────", Style::default().fg(tint.border))),
            Line::from(Span::styled(
                format!("{} Lesson {id:02}", self.app.deck.name).to_uppercase(),
                Style::default().fg(tint.accent),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " [Enter] START LESSON ",
                Style::default()
                    .fg(tint.accent)
                    .bg(tint.surface)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let height = lines.len() as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let centered = Rect::new(area.x, top, area.width, height.min(area.height));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }

    fn render_not_found(&self, area: Rect, buf: &mut Buffer) {
        let line = self.muted("Slide not found");
        let centered = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }

    fn render_text_card(&self, text: String, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme().colors;
        let height = area.height.min(5);
        let rect = Rect::new(area.x, area.y, area.width, height);
        self.card(None, vec![self.muted(text)], colors.border(), rect, buf);
    }

    fn render_evidence(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme().colors;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(5), Constraint::Min(0)])
            .split(area);
        for (r, row) in rows.iter().take(2).enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for (c, col) in cols.iter().enumerate() {
                let i = r * 2 + c + 1;
                self.card(
                    Some((format!("Study {i} (Author, Year)"), colors.header_fg())),
                    vec![self.muted("Replace with study details, sample size, design, findings.")],
                    colors.border(),
                    *col,
                    buf,
                );
            }
        }
    }

    fn render_evaluation(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme().colors;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(Rect::new(area.x, area.y, area.width, area.height.min(6)));
        let cards = [
            ("Strength", colors.correct(), "Replace with strength."),
            ("Limitation", colors.incorrect(), "Replace with limitation."),
            (
                "Alternative",
                lesson_theme::resolve("yellow").accent,
                "Replace with alternative explanation.",
            ),
        ];
        for ((label, color, body), col) in cards.into_iter().zip(cols.iter()) {
            self.card(
                Some((label.to_string(), color)),
                vec![self.muted(body)],
                color,
                *col,
                buf,
            );
        }
    }

    fn render_assessment(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme().colors;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(Rect::new(area.x, area.y, area.width, area.height.min(6)));
        let cards = [
            (
                "AO1 (Knowledge)",
                lesson_theme::resolve("cyan").accent,
                ["Define key concept", "Explain mechanism", "Link to question"],
            ),
            (
                "AO3 (Evaluation)",
                lesson_theme::resolve("amber").accent,
                ["Reference research", "Consider limitations", "Suggest alternatives"],
            ),
        ];
        for ((label, color, items), col) in cards.into_iter().zip(cols.iter()) {
            let lines = items
                .iter()
                .map(|item| {
                    Line::from(Span::styled(
                        format!("✓ {item}"),
                        Style::default().fg(colors.fg()),
                    ))
                })
                .collect();
            self.card(Some((label.to_string(), color)), lines, colors.border(), *col, buf);
        }
    }

    fn render_body(&self, view: SlideView, area: Rect, buf: &mut Buffer) {
        let app = self.app;
        let id = app.lesson_id();
        match (view, &app.session) {
            (SlideView::DoNow, Some(ActiveSession::DoNow(s))) => {
                QuizView::new(s, app.presentation, self.theme()).render(area, buf);
            }
            (SlideView::Check, Some(ActiveSession::Check(s))) => {
                CheckView::new(
                    s,
                    app.lesson_style(),
                    app.focused_item,
                    app.presentation,
                    self.theme(),
                )
                .render(area, buf);
            }
            (SlideView::DoNow | SlideView::Check, _) => {
                self.render_text_card("No questions for this lesson.".to_string(), area, buf);
            }
            (SlideView::Concept(n), _) => self.render_text_card(
                format!("Replace with Lesson {id} Concept {n} visualization and explanation."),
                area,
                buf,
            ),
            (SlideView::Application(1), _) => self.render_text_card(
                format!("Replace with interactive simulation component for Lesson {id}."),
                area,
                buf,
            ),
            (SlideView::Application(_), _) => self.render_text_card(
                "Continue with simulation or task conclusion.".to_string(),
                area,
                buf,
            ),
            (SlideView::Evidence, _) => self.render_evidence(area, buf),
            (SlideView::Evaluation, _) => self.render_evaluation(area, buf),
            (SlideView::Assessment, _) => self.render_assessment(area, buf),
            (SlideView::Title, _) => self.render_title(area, buf),
            (SlideView::NotFound, _) => self.render_not_found(area, buf),
        }
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let presentation = self.app.presentation;
        let frame = SlideFrame::new(presentation, self.theme());
        let inner = frame.inner(area);
        frame.render(area, buf);

        let max_width = if presentation { 110 } else { 84 };
        let column = centered_column(max_width, inner);
        let view = self.view;

        let Some(phase) = view.phase() else {
            self.render_body(view, column, buf);
            return;
        };

        let header_height = PhaseHeader::height(presentation);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header_height), Constraint::Min(0)])
            .split(column);
        PhaseHeader::new(phase, self.app.lesson_style().accent, presentation, self.theme())
            .render(rows[0], buf);
        self.render_body(view, rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::deck::Deck;
    use crate::slides::{SLIDE_COUNT, slide_view};

    fn app() -> App {
        let config = Config {
            shuffle_seed: Some(1),
            ..Config::default()
        };
        App::new(Deck::load_default().unwrap(), &config, Theme::default())
    }

    fn render(app: &App) -> String {
        render_widget(SlideWidget::new(app))
    }

    fn render_widget(widget: SlideWidget<'_>) -> String {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_slide_renders() {
        let mut app = app();
        let expected = [
            "START LESSON",
            "Do Now Quiz",
            "Concept 1",
            "Concept 2",
            "Understanding Check",
            "Simulation (Part 1)",
            "Simulation (Part 2)",
            "Research Studies",
            "Critical Analysis",
            "Essay Plan & Exam Prep",
        ];
        for (i, needle) in expected.iter().enumerate() {
            let out = render(&app);
            assert!(out.contains(needle), "slide {i} missing {needle:?}");
            app.next_slide();
        }
    }

    #[test]
    fn test_title_slide_names_deck_and_lesson() {
        let app = app();
        let out = render(&app);
        assert!(out.contains("LESSON TITLE"));
        assert!(out.contains("REFERENCE MODULE LESSON 01"));
    }

    #[test]
    fn test_presentation_mode_renders() {
        let mut app = app();
        app.toggle_presentation();
        app.next_slide();
        let out = render(&app);
        assert!(out.contains("DO NOW QUIZ"));
        assert!(out.contains("Question 1 of 5"));
    }

    #[test]
    fn test_unmapped_slide_renders_placeholder() {
        let app = app();
        let out = render_widget(SlideWidget::with_view(&app, slide_view(SLIDE_COUNT)));
        assert!(out.contains("Slide not found"));
        assert!(!out.contains("START LESSON"));
    }
}
