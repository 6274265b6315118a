use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Full-area wrapper for one slide. Presentation mode drops the border and
/// pads more generously; content that does not fit is clipped.
pub struct SlideFrame<'a> {
    pub presentation: bool,
    pub theme: &'a Theme,
}

impl<'a> SlideFrame<'a> {
    pub fn new(presentation: bool, theme: &'a Theme) -> Self {
        Self {
            presentation,
            theme,
        }
    }

    fn block(&self) -> Block<'static> {
        let colors = &self.theme.colors;
        let block = if self.presentation {
            Block::default()
        } else {
            Block::bordered().border_style(Style::default().fg(colors.border()))
        };
        block.style(Style::default().bg(colors.bg()))
    }

    fn padding(&self) -> Margin {
        if self.presentation {
            Margin::new(6, 2)
        } else {
            Margin::new(2, 1)
        }
    }

    /// Area left for slide content once the frame is drawn.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area).inner(self.padding())
    }
}

impl Widget for SlideFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_pads_more() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 40);
        let normal = SlideFrame::new(false, &theme).inner(area);
        let present = SlideFrame::new(true, &theme).inner(area);
        assert_eq!(normal, Rect::new(3, 2, 94, 36));
        assert_eq!(present, Rect::new(6, 2, 88, 36));
    }

    #[test]
    fn test_tiny_area_does_not_underflow() {
        let theme = Theme::default();
        let inner = SlideFrame::new(true, &theme).inner(Rect::new(0, 0, 4, 2));
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }
}
