use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use catalog_browser::config::AppConfig;
use catalog_browser::core::catalog::Catalog;
use catalog_browser::core::controller::Controller;
use catalog_browser::core::logging;
use catalog_browser::core::store::FileStore;
use catalog_browser::tui::app::{AppState, DynStore};

#[derive(Parser)]
#[command(name = "catalog-browser")]
#[command(about = "Browse, filter and sort the product catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Address fragment whose control gets focus on startup, e.g. `#contact`.
    fragment: Option<String>,

    /// Print the page markup for the saved view state and exit.
    #[arg(long)]
    html: bool,

    /// Override the data directory (view state, logs).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = Some(dir);
    }
    let data_dir = config.data_dir();

    // Initialize logging
    let log_guard = if cli.html {
        logging::init(&data_dir)
    } else {
        logging::init_tui(&data_dir)
    };
    tracing::info!(
        data_dir = %data_dir.display(),
        "{} v{} starting",
        catalog_browser::NAME,
        catalog_browser::VERSION
    );

    let store: DynStore = Box::new(
        FileStore::in_dir(&data_dir).with_quota(config.catalog.storage_quota_bytes),
    );
    let controller = Controller::new(Catalog::builtin(), store)
        .with_pending_window(config.catalog.add_pending_window());

    if cli.html {
        println!("{}", controller.page_markup());
        return Ok(());
    }

    let mut app = AppState::new(controller);
    if let Some(fragment) = cli.fragment.as_deref() {
        app.focus_fragment(fragment);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = app.run(&mut terminal, config.tui.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "Event loop failed");
        eprintln!("Error: {e}");
        drop(log_guard);
        std::process::exit(1);
    }

    tracing::info!("Shutting down");
    Ok(())
}
