// quicktrace: step-by-step QuickSort in the terminal

use std::io::{self, Write};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use quicktrace::cli::Args;
use quicktrace::generator::generate;
use quicktrace::snapshot::SnapshotHistory;
use quicktrace::ui::App;

/// Write one line per snapshot
fn print_trace(history: &SnapshotHistory) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (step, snapshot) in history.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<55} {:?}  depth {}",
            step + 1,
            snapshot.description,
            snapshot.values_by_column(),
            snapshot.max_depth_reached
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stderr only; stays quiet unless RUST_LOG asks for more
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    let mut controls = args.controls();

    let input = match args.resolve_input(&mut controls) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: quicktrace [--values \"3,1,2\" | --demo] [--size N] [--seed S] [--print]");
            std::process::exit(1);
        }
    };
    info!(values = ?input, "input array");

    if args.print {
        print_trace(&generate(&input))?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(input, controls, args.play_interval());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
