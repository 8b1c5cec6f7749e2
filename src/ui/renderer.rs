//! Terminal setup and the main event loop

use crate::backend::RestBackend;
use crate::config::Config;
use crate::logger::Logger;
use crate::storage::PreferenceStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Build the app from config and run it until the user quits
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let backend = RestBackend::new(&config.api.base_url, config.api.request_timeout())
        .with_context(|| format!("Failed to create client for {}", config.api.base_url))?;
    log::info!("Using task service at {}", backend.base_url());

    let preferences = match PreferenceStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            log::warn!("Theme preference will not persist: {}", e);
            PreferenceStore::in_memory()
        }
    };

    let mut app = AppComponent::new(Arc::new(backend), preferences, logger, config.ui.default_filter);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut event_handler = EventHandler::new();
    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                if app.apply_background_actions() {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
