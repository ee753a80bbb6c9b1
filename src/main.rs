// toylang: lexer and type-checking parser with a terminal viewer

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use toylang::ui::App;
use toylang::{analyze, Verdict};

const DEMO_SOURCE: &str = include_str!("../demos/demo.txt");

/// Tokenize and type check a toy language program, then browse the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program to analyse. The bundled demo program is used when omitted.
    file: Option<PathBuf>,

    /// Print the token listing and the verdict instead of starting the UI.
    #[arg(short, long)]
    print: bool,

    /// Write the lexer trace to stderr.
    #[arg(short, long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: File '{}' not found", path.display());
                std::process::exit(1);
            }
            fs::read_to_string(path)?
        }
        None => DEMO_SOURCE.to_string(),
    };

    let name = args
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "demo program".to_string());
    eprintln!("Analyzing {}...", name);
    let analysis = analyze(&source);
    eprintln!("{}", analysis.verdict);

    if args.trace {
        for event in analysis.trace() {
            eprintln!("{}", event);
        }
    }

    if args.print {
        for entry in analysis.listing() {
            println!("{}", entry);
        }
        println!("{}", analysis.verdict);
        if matches!(analysis.verdict, Verdict::Rejected(_)) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, args.file);
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
