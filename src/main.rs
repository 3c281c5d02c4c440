use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use hovertip::app::App;
use hovertip::config::{self, Config};

/// Hover/focus tooltip demo for the terminal
#[derive(Parser, Debug)]
#[command(name = "hovertip", version, about)]
struct Args {
    /// Config file (defaults to ~/.config/hovertip/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cells between the trigger and the tooltip
    #[arg(long)]
    gap: Option<u16>,

    /// Tooltip text
    #[arg(long)]
    text: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logger();

    let loaded = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let config = apply_overrides(loaded.config, &args);

    let mut app = App::new(&config)?;
    app.config_warning = loaded.warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(gap) = args.gap {
        config.tooltip.gap = gap;
    }
    if let Some(text) = &args.text {
        config.tooltip.text = text.clone();
    }
    config
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_event(event::read()?);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logger() {
    const LOG_FILE: &str = "hovertip.log";

    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
