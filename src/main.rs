use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use lectern::app::App;
use lectern::config::Config;
use lectern::content::deck::Deck;
use lectern::error::ContentError;
use lectern::event::{AppEvent, EventHandler};
use lectern::ui::components::lesson_sidebar::LessonSidebar;
use lectern::ui::layout::{ShellLayout, pack_hint_lines};
use lectern::ui::slides::SlideWidget;
use lectern::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "lectern", version, about = "Terminal lesson deck with retrieval quizzes")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Deck file (.toml or .json)")]
    deck: Option<PathBuf>,

    #[arg(short, long, help = "Lesson id to open")]
    lesson: Option<u32>,

    #[arg(short, long, help = "Start in presentation mode")]
    presentation: bool,

    #[arg(long, help = "Seed for option shuffling")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|err| {
        warn!("ignoring unreadable config: {err:#}");
        Config::default()
    });
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.deck {
        config.deck_path = Some(path.to_string_lossy().into_owned());
    }
    if cli.presentation {
        config.start_presentation = true;
    }
    if cli.seed.is_some() {
        config.shuffle_seed = cli.seed;
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(
            "unknown theme {:?} (available: {}), using default",
            config.theme,
            Theme::available_themes().join(", ")
        );
        Theme::default()
    });

    let deck = match &config.deck_path {
        Some(path) => Deck::from_path(Path::new(path))
            .with_context(|| format!("failed to load deck {path}"))?,
        None => Deck::load_default().context("failed to load bundled deck")?,
    };
    info!("loaded deck {:?} with {} lessons", deck.name, deck.lessons.len());

    let mut app = App::new(deck, &config, theme);
    if let Some(id) = cli.lesson {
        if !app.select_lesson(id) {
            return Err(ContentError::UnknownLesson(id).into());
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = {
        let events = EventHandler::new(Duration::from_millis(100));
        run_app(&mut terminal, &mut app, &events)
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = ShellLayout::new(area, app.presentation, app.sidebar_open);

    if let Some(sidebar) = layout.sidebar {
        frame.render_widget(
            LessonSidebar::new(&app.deck.lessons, app.lesson_id(), app.sidebar_open, &app.theme),
            sidebar,
        );
    }

    if let Some(toolbar) = layout.toolbar {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(toolbar);
        let header_style = Style::default().fg(colors.header_fg()).bg(colors.header_bg());
        let position = Line::from(vec![
            Span::styled(
                format!(" {} ", app.deck.name),
                header_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" Slide {} of {}", app.slide_index() + 1, app.slide_count()),
                header_style,
            ),
        ]);
        frame.render_widget(Paragraph::new(position).style(header_style), halves[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[p] Present ",
                header_style.fg(colors.accent()),
            ))
            .alignment(ratatui::layout::Alignment::Right)
            .style(header_style),
            halves[1],
        );
    }

    frame.render_widget(SlideWidget::new(app), layout.slide);

    if let Some(nav) = layout.nav {
        let hints = [
            "[←/→] Slide",
            "[1-9] Answer",
            "[[/]] Question",
            "[f] Feedback",
            "[Tab] Sidebar",
            "[q] Quit",
        ];
        let line = pack_hint_lines(&hints, nav.width as usize)
            .into_iter()
            .next()
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Span::styled(line, Style::default().fg(colors.text_muted()))),
            nav,
        );
    }
}
