use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::slides::Phase;
use crate::ui::theme::Theme;

pub struct PhaseHeader<'a> {
    pub phase: Phase,
    pub accent: Color,
    pub presentation: bool,
    pub theme: &'a Theme,
}

impl<'a> PhaseHeader<'a> {
    pub fn new(phase: Phase, accent: Color, presentation: bool, theme: &'a Theme) -> Self {
        Self {
            phase,
            accent,
            presentation,
            theme,
        }
    }

    pub fn height(presentation: bool) -> u16 {
        if presentation { 5 } else { 4 }
    }
}

impl Widget for PhaseHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let icon_width = if self.presentation { 9 } else { 7 };

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(icon_width),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let icon_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(cols[0]);
        let icon = Paragraph::new(Line::from(Span::styled(
            self.phase.icon.glyph(),
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::bordered()
                .border_style(Style::default().fg(colors.border()))
                .style(Style::default().bg(colors.surface())),
        );
        icon.render(icon_rows[0], buf);

        let title = if self.presentation {
            self.phase.title.to_uppercase()
        } else {
            self.phase.title.to_string()
        };
        let lines = vec![
            Line::from(Span::styled(
                self.phase.phase,
                Style::default().fg(colors.text_muted()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                title,
                Style::default().fg(colors.header_fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.phase.time,
                Style::default().fg(colors.text_muted()),
            )),
        ];
        Paragraph::new(lines).render(cols[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::SlideView;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_renders_phase_title_and_time() {
        let theme = Theme::default();
        let phase = SlideView::DoNow.phase().unwrap();
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        PhaseHeader::new(phase, Color::Cyan, false, &theme).render(area, &mut buf);

        assert!(row(&buf, 0).contains("Phase 1: Activation"));
        assert!(row(&buf, 1).contains("Do Now Quiz"));
        assert!(row(&buf, 2).contains("5 MINS"));
    }

    #[test]
    fn test_presentation_uppercases_title() {
        let theme = Theme::default();
        let phase = SlideView::Check.phase().unwrap();
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        PhaseHeader::new(phase, Color::Cyan, true, &theme).render(area, &mut buf);
        assert!(row(&buf, 1).contains("UNDERSTANDING CHECK"));
    }
}
