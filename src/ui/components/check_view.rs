use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::question::CheckQuestion;
use crate::session::{CheckSession, Outcome};
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::components::quiz_view::{nav_line, option_line};
use crate::ui::lesson_theme::StyleBundle;
use crate::ui::theme::Theme;

pub struct CheckView<'a> {
    pub session: &'a CheckSession,
    pub tint: StyleBundle,
    pub focused_item: usize,
    pub presentation: bool,
    pub theme: &'a Theme,
}

impl<'a> CheckView<'a> {
    pub fn new(
        session: &'a CheckSession,
        tint: StyleBundle,
        focused_item: usize,
        presentation: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            tint,
            focused_item,
            presentation,
            theme,
        }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let colors = &self.theme.colors;
        let s = self.session;
        let mut lines = Vec::new();

        match s.current() {
            CheckQuestion::Scenario { options, .. } => {
                for (i, option) in options.iter().enumerate() {
                    lines.push(option_line(
                        colors,
                        i + 1,
                        &option.text,
                        s.scenario_option_outcome(i),
                        self.presentation,
                    ));
                }
            }
            CheckQuestion::Matching { items, .. } => {
                for (idx, item) in items.iter().enumerate() {
                    let focused = idx == self.focused_item;
                    let indicator = if focused { "> " } else { "  " };
                    let label_style = if focused {
                        Style::default().fg(self.tint.accent).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors.header_fg())
                    };
                    lines.push(Line::from(Span::styled(
                        format!("{indicator}{}", item.label),
                        label_style,
                    )));
                    for (pos, option) in item.options.iter().enumerate() {
                        let mut line = option_line(
                            colors,
                            pos + 1,
                            option,
                            s.item_option_outcome(idx, pos),
                            self.presentation,
                        );
                        line.spans.insert(0, Span::raw("  "));
                        lines.push(line);
                    }
                    lines.push(Line::from(""));
                }
            }
        }
        lines
    }

    fn feedback_lines(&self) -> Vec<Line<'static>> {
        let colors = &self.theme.colors;
        let s = self.session;

        if !s.feedback_visible() {
            return vec![Line::from(Span::styled(
                "  [f] Show Feedback",
                Style::default().fg(colors.selection_fg()).bg(colors.selection_bg()),
            ))];
        }

        let (icon, color) = match s.outcome() {
            Outcome::Correct => ("✓", colors.correct()),
            Outcome::Incorrect => ("✗", colors.incorrect()),
            Outcome::Unanswered => ("!", colors.unanswered()),
        };
        vec![Line::from(vec![
            Span::styled(
                format!("{icon} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(s.feedback().to_string(), Style::default().fg(color)),
        ])]
    }
}

impl Widget for CheckView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let s = self.session;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let label = format!("Question {} of {}", s.index() + 1, s.len());
        ProgressBar::new(&label, s.progress(), self.theme)
            .fill(self.tint.border)
            .render(layout[0], buf);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("◉ {}", s.current().prompt()),
                Style::default().fg(self.tint.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(self.body_lines());
        lines.push(Line::from(""));
        lines.extend(self.feedback_lines());
        lines.push(Line::from(""));
        lines.push(nav_line(colors, s.is_first(), s.is_last(), "Check Complete"));

        let card = Block::bordered()
            .border_style(Style::default().fg(self.tint.border))
            .style(Style::default().bg(self.tint.surface));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(card)
            .render(layout[2], buf);
    }
}
