//! TableMap — San Marcos restaurant guide in the terminal.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tablemap_core::directory::Directory;
use tablemap_tui::app::AppState;
use tablemap_tui::{input, ui};
use tablemap_tui::persistence;

#[derive(Parser)]
#[command(name = "tablemap", about = "TableMap — San Marcos restaurant guide")]
struct Cli {
    /// Restaurant directory TOML. Defaults to the built-in San Marcos set.
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Discard persisted UI state and start fresh.
    #[arg(long, default_value_t = false)]
    reset_state: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Dataset
    let directory = match &cli.directory {
        Some(path) => Directory::from_file(path)
            .with_context(|| format!("load restaurant directory from {}", path.display()))?,
        None => Directory::san_marcos(),
    };

    // Paths
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tablemap")
        .join("state.json");

    // Load persisted state
    let persisted = if cli.reset_state {
        persistence::PersistedState::default()
    } else {
        persistence::load(&state_path)
    };

    // Build app state
    let mut app = AppState::new(directory, state_path.clone());
    persistence::apply(&mut app, persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render the current snapshot
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
