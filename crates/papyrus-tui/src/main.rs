use std::io;
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

mod action;
mod app;
mod backend;
mod config_file;
mod input;
mod theme;
mod tui_event;
mod view;

use app::App;
use papyrus_core::ApiClient;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// papyrus: terminal search client for the CORD-19 corpus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run this search immediately on startup
    query: Option<String>,

    /// Backend API base URL (e.g. http://127.0.0.1:8000/api)
    #[arg(long)]
    base_url: Option<String>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

/// Log to a rolling file so output never corrupts the alternate screen.
/// Level comes from PAPYRUS_LOG, then RUST_LOG, defaulting to warn.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_dir()?.join("papyrus").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let filter = std::env::var("PAPYRUS_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let appender = tracing_appender::rolling::daily(log_dir, "papyrus.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_logging();

    let config = config_file::load_config();

    // Resolve settings: CLI flags > env vars > config file > defaults
    let base_url = args
        .base_url
        .or_else(|| std::env::var("PAPYRUS_API_URL").ok())
        .or_else(|| config.api.as_ref().and_then(|a| a.base_url.clone()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let theme_name = args
        .theme
        .or_else(|| config.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "hacker".to_string());
    let theme = theme::Theme::from_name(&theme_name);

    let mut params = backend::RequestParams::default();
    if let Some(search) = config.search.as_ref() {
        if let Some(limit) = search.limit {
            params.search_limit = limit;
        }
        if let Some(alpha) = search.alpha {
            params.alpha = alpha;
        }
    }
    if let Some(limit) = config.suggest.as_ref().and_then(|s| s.limit) {
        params.suggest_limit = limit;
    }

    let client = ApiClient::new(&base_url);
    tracing::info!(%base_url, "starting papyrus");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<tui_event::BackendCommand>();

    let mut app = App::new(theme);
    app.backend_cmd_tx = Some(cmd_tx);

    tokio::spawn(backend::run_gateway(client, params, cmd_rx, event_tx));

    // Run an initial query handed on the command line
    if let Some(query) = args.query {
        app.query_input = query;
        app.submit_query();
    }

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.input_mode);
                        app.update(action);
                    }
                }
            } => {}
        }

        // Process tick (advances the spinner and fires the debounce window)
        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
