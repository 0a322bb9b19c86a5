//! jot terminal application
//!
//! Parses CLI args, sets up logging and the terminal, and drives the
//! blocking single-threaded event loop.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use jot_core::{NoteDataSource, Strings};
use jot_tui::app::{Action, App};
use jot_tui::error::{Result, TuiError};
use jot_tui::theme::ThemeMode;
use jot_tui::ui;

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "A minimal terminal screen for jotting down notes")]
struct Args {
    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeMode,

    /// Start with an empty note list instead of the demo notes
    #[arg(long)]
    empty: bool,

    /// Write logs to this file (the terminal itself stays clean)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    init_logging(args.log_file.as_deref())?;
    tracing::info!("starting jot");

    let notes = if args.empty {
        Vec::new()
    } else {
        NoteDataSource.load_notes()
    };
    let mut app = App::new(notes, Strings::default(), args.theme.palette());
    // Row clicks are an extension point; the stock wiring does nothing.
    app.on_note_clicked = Box::new(|_| {});

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::info!("jot stopped");

    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Some(Action::Quit) {
                return Ok(());
            }
        }
    }
}

/// Route logs away from the raw-mode screen: into a file when asked
/// for, otherwise nowhere.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["jot_core=debug", "jot_tui=debug"] {
        filter = filter.add_directive(directive.parse().map_err(|_| {
            TuiError::Logging(format!("invalid log directive: {directive}"))
        })?);
    }

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}
