use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use termlife::config::Config;
use termlife::grid::Grid;
use termlife::session::Exit;
use termlife::session::Session;
use termlife::terminal::CrosstermTerminal;

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    init_tracing(&config)?;

    // Size the grid before touching the screen, so a tiny terminal fails with a readable message
    let (cols, rows) = terminal::size().context("Failed to query terminal size")?;
    let grid = Grid::for_terminal(cols, rows).context("Cannot start")?;
    info!(width = grid.width(), height = grid.height(), "Created grid");

    let mut session = Session::new(grid, config);

    let exit = {
        let mut term = CrosstermTerminal::new().context("Failed to set up terminal")?;
        session.run(&mut term)?
    };

    match exit {
        Exit::Quit => info!("Quit by user"),
        Exit::Extinct { generations } => info!(generations, "Simulation ended"),
    }

    Ok(())
}
