//! OD Survey TUI - terminal data-entry form for origin-destination surveys
//!
//! Interviewers fill one trip record at a time; saved records are appended
//! to a `;`-delimited file that can be exported for analysis.

mod app;
mod config;
mod error;
mod platform;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use config::SurveyConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to a file: stderr would draw over the alternate screen
    let log_guard = init_logging();

    let (config, config_path) = SurveyConfig::load_or_default(SurveyConfig::config_path());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, config_path);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting on error: {err:#}");
        drop(log_guard);
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize logging into the platform log file.
///
/// The returned guard flushes buffered lines when dropped.
fn init_logging() -> WorkerGuard {
    let log_dir = platform::log_dir();
    let writer: Box<dyn Write + Send> = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(platform::LOG_FILE_NAME)
        .build(&log_dir)
    {
        Ok(appender) => Box::new(appender),
        // No writable log location: drop log output rather than corrupt the screen
        Err(_) => Box::new(io::sink()),
    };
    let (writer, guard) = tracing_appender::non_blocking(writer);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "od_survey_tui=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    guard
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Redrawn on the next iteration
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
