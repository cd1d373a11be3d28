//! Cinerec TUI entry point.

use cinerec_tui::api_client::RestClient;
use cinerec_tui::config::TuiConfig;
use cinerec_tui::error::TuiError;
use cinerec_tui::events::{self, TuiEvent};
use cinerec_tui::state::App;
use cinerec_tui::telemetry;
use cinerec_tui::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    telemetry::init_logging(&config)?;
    let api = RestClient::new(&config)?;
    tracing::info!(endpoints = ?api.endpoints(), "Starting cinerec");

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config, Arc::new(api), event_tx.clone());

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    spawn_input_reader(event_tx);
    app.probe_health();

    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        if let Some(event) = events::next_event(&mut event_rx, &mut ticker).await {
            if app.handle_event(event) {
                break;
            }
        }
    }

    app.shutdown();
    tracing::info!("Exiting cinerec");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                        sender.blocking_send(TuiEvent::Input(key))
                    }
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}
