use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

mod actions;
mod capabilities;
mod dispatcher;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use middleware::{
    app_config_middleware::AppConfigMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, navigation_middleware::NavigationMiddleware,
    schema_middleware::SchemaMiddleware,
};
use state::AppState;
use store::Store;

/// Browse a JSON Schema in Miller columns
#[derive(Parser, Debug)]
#[command(name = "schema-finder", version, about, long_about = None)]
struct Args {
    /// JSON Schema file to browse
    schema: PathBuf,

    /// Configuration file (default: ./schema-finder.toml, then the user config dir)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log file (default: <tmp>/schema-finder/schema-finder-<date>.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = logger::init(args.log_file.as_deref())?;
    log::info!(
        "Starting schema-finder on {} (logging to {})",
        args.schema.display(),
        log_file.display()
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut store = Store::new(AppState::new(args.schema));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(AppConfigMiddleware::new(args.config)));
    store.add_middleware(Box::new(SchemaMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("schema-finder stopped: {:#}", err);
    }
    log::info!("Exiting schema-finder");
    result
}

/// Maximum time spent on queued actions before the next frame is drawn
const ACTION_BUDGET: Duration = Duration::from_millis(16);

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    store
        .dispatcher()
        .dispatch(Action::Bootstrap(BootstrapAction::Start));

    loop {
        let start = Instant::now();
        while let Some(action) = store.dispatcher().pop() {
            store.dispatch(action);

            // Remaining actions stay queued for the next iteration
            if start.elapsed() >= ACTION_BUDGET {
                break;
            }
        }

        terminal.draw(|frame| views::render(store.state(), frame.area(), frame))?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
