//! Event Loop - main TUI entry point
//!
//! Mounts the panel (one fetch), then pumps fetch results and terminal events
//! until the user quits. Teardown cancels the fetch if it is still in flight.

use crate::loader::{apply_message, PanelMessage, PanelMount};
use crate::panel::PanelState;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use errboard_common::{ErrorGroupSource, HttpErrorGroupSource, PanelConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::input::{handle_event, Flow};
use super::layout;
use super::render::draw_ui;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the panel against the configured aggregation service
pub async fn run(config: PanelConfig) -> Result<()> {
    let source = HttpErrorGroupSource::new(&config)?;
    info!("Using error groups endpoint {}", source.groups_url());
    run_with_source(config, Arc::new(source)).await
}

/// Run the panel against any error group source
pub async fn run_with_source(config: PanelConfig, source: Arc<dyn ErrorGroupSource>) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = PanelState::new(config.api.url.clone());
    let (tx, mut rx) = mpsc::channel(4);
    let mut mount = PanelMount::start(&mut state, source, tx);
    debug!("Mounted panel generation {}", mount.generation());

    let result = run_event_loop(&mut terminal, &mut state, &mut rx).await;

    mount.teardown(&mut state);
    let cleanup_result = restore_terminal(&mut terminal);
    if let Err(e) = &cleanup_result {
        warn!("Terminal restore failed: {}", e);
    }
    info!("Panel closed");

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut PanelState,
    rx: &mut mpsc::Receiver<PanelMessage>,
) -> Result<()> {
    loop {
        while let Ok(msg) = rx.try_recv() {
            apply_message(state, msg);
        }

        let area = terminal.size()?;
        state.sync_viewport(layout::visible_rows(layout::compute_layout(area).table));

        terminal.draw(|f| draw_ui(f, state))?;

        // crossterm polling blocks; keep it off the async workers
        let polled = tokio::task::block_in_place(|| -> io::Result<Option<event::Event>> {
            if event::poll(EVENT_POLL_INTERVAL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })?;

        if let Some(event) = polled {
            if handle_event(state, &event, area) == Flow::Quit {
                break;
            }
        }
    }

    Ok(())
}
