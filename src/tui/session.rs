use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use calboard::{
    app::{AppState, Mode, ViewMode},
    storage::config::Config,
    ui::theme::Theme,
    input::{command_mode, insert_mode, normal_mode},
};
use crate::cli::CliOptions;
use crate::tui::{
    presentation::ui,
    sample_events::add_sample_events,
};

pub fn run_tui(options: CliOptions) -> anyhow::Result<()> {
    let config = Config::load_or_create().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default config: {}", e);
        Config::default()
    });

    let mut app = build_app(&config, &options);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        println!("Error: {:?}", err);
    }

    tracing::info!("calboard exiting with {} events in memory", app.store.len());
    Ok(())
}

fn build_app(config: &Config, options: &CliOptions) -> AppState {
    let theme_name = options.theme.as_deref().unwrap_or(&config.ui.theme);
    let view_mode = if options.table {
        ViewMode::Table
    } else {
        ViewMode::from_name(&config.ui.initial_view).unwrap_or_else(|| {
            tracing::warn!("Unknown initial_view '{}', using calendar", config.ui.initial_view);
            ViewMode::Calendar
        })
    };

    let mut app = AppState::new()
        .with_theme(Theme::get_by_name(theme_name))
        .with_view_mode(view_mode)
        .with_defaults(config.event_defaults());

    if options.sample {
        add_sample_events(&mut app);
    }
    app
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        app.refresh_previews();

        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if app.show_help {
                handle_help_keys(key.code, app);
                continue;
            }

            match app.input_mode() {
                Mode::Insert => insert_mode::handle_key(key.code, app),
                Mode::Command => {
                    if command_mode::handle_key(key.code, app) {
                        return Ok(());
                    }
                }
                Mode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    code => {
                        app.notice = None;
                        normal_mode::handle_key(code, app);
                    }
                },
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
