use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::components::lesson_sidebar::LessonSidebar;

/// Screen regions for the shell. Presentation mode gives the whole screen
/// to the slide.
pub struct ShellLayout {
    pub sidebar: Option<Rect>,
    pub toolbar: Option<Rect>,
    pub slide: Rect,
    pub nav: Option<Rect>,
}

impl ShellLayout {
    pub fn new(area: Rect, presentation: bool, sidebar_open: bool) -> Self {
        if presentation {
            return Self {
                sidebar: None,
                toolbar: None,
                slide: area,
                nav: None,
            };
        }

        let sidebar_width = LessonSidebar::width(sidebar_open).min(area.width);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(horizontal[1]);

        Self {
            sidebar: Some(horizontal[0]),
            toolbar: Some(vertical[0]),
            slide: vertical[1],
            nav: Some(vertical[2]),
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// Centre a box of at most `max_width` columns inside `area`.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = max_width.min(area.width);
    let left = area.x + (area.width - width) / 2;
    Rect::new(left, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_uses_full_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = ShellLayout::new(area, true, true);
        assert_eq!(layout.slide, area);
        assert!(layout.sidebar.is_none());
        assert!(layout.toolbar.is_none());
        assert!(layout.nav.is_none());
    }

    #[test]
    fn test_sidebar_width_follows_open_flag() {
        let area = Rect::new(0, 0, 120, 40);
        let open = ShellLayout::new(area, false, true);
        let closed = ShellLayout::new(area, false, false);
        assert_eq!(open.sidebar.unwrap().width, 28);
        assert_eq!(closed.sidebar.unwrap().width, 6);
        assert!(closed.slide.width > open.slide.width);
        assert_eq!(open.toolbar.unwrap().height, 1);
        assert_eq!(open.nav.unwrap().height, 1);
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let hints = ["[←/→] Slide", "[p] Present", "[q] Quit"];
        assert_eq!(pack_hint_lines(&hints, 80).len(), 1);
        assert_eq!(pack_hint_lines(&hints, 16).len(), 3);
        assert!(pack_hint_lines(&hints, 0).is_empty());
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(10, 2, 100, 20);
        assert_eq!(centered_column(60, area), Rect::new(30, 2, 60, 20));
        assert_eq!(centered_column(200, area), area);
    }
}
