mod animation;
mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use anyhow::{Context, Result};
use compass_core::{Catalog, ChatWidget, Config, RoadmapBrowser};

use crate::app::App;
use crate::tui::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    // A broken config file should not keep the app from starting
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_path = logging::init(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %log_path.display(), "career compass starting");
    match config_error {
        Some(e) => tracing::warn!(error = %e, "could not load config, using defaults"),
        None => match Config::get_config_path().and_then(|path| config.write_if_missing(&path)) {
            Ok(true) => tracing::info!("wrote default config"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "could not write default config"),
        },
    }

    let catalog = Catalog::builtin().context("Built-in roadmap catalog is invalid")?;
    tracing::info!(roadmaps = catalog.roadmaps().len(), "catalog loaded");

    let chat = ChatWidget::new(Box::new(config.reply_delay()));
    let roadmaps = RoadmapBrowser::with_start_base(catalog, config.start_url_base.clone());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();
    let mut app = App::new(chat, roadmaps, events.sender());

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    tracing::info!("career compass stopped");
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event)?,
            None => break,
        }
    }
    Ok(())
}
