use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::deck::Lesson;
use crate::ui::theme::Theme;

pub const SIDEBAR_OPEN_WIDTH: u16 = 28;
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;

pub struct LessonSidebar<'a> {
    pub lessons: &'a [Lesson],
    pub selected: u32,
    pub open: bool,
    pub theme: &'a Theme,
}

impl<'a> LessonSidebar<'a> {
    pub fn new(lessons: &'a [Lesson], selected: u32, open: bool, theme: &'a Theme) -> Self {
        Self {
            lessons,
            selected,
            open,
            theme,
        }
    }

    pub fn width(open: bool) -> u16 {
        if open { SIDEBAR_OPEN_WIDTH } else { SIDEBAR_COLLAPSED_WIDTH }
    }
}

impl Widget for LessonSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let (toggle, border) = if self.open {
            (" ✕ ", colors.border_focused())
        } else {
            (" ☰ ", colors.border())
        };
        let block = Block::bordered()
            .title(toggle)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.surface()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from("")];
        for lesson in self.lessons {
            let is_selected = lesson.id == self.selected;
            let text = if self.open {
                let done = if lesson.complete { " ✓" } else { "" };
                format!(" {}{done}", lesson.title)
            } else {
                format!(" {:02}", lesson.id)
            };
            let style = if is_selected {
                Style::default()
                    .fg(colors.selection_fg())
                    .bg(colors.selection_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_muted())
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        if self.open {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " [PgUp/PgDn] Lesson",
                Style::default().fg(colors.border()),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
