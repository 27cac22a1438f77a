//! Gradebook Binary
//!
//! Runs the student grade menu on stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use gradebook::presentation::renderer_for;
use gradebook::{menu, Config, Gradebook, TableStyle};
use tracing_subscriber::{fmt, EnvFilter};

/// Student Grade Management System
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "File-backed student grade record manager")]
#[command(version)]
struct Args {
    /// JSON file holding all student records
    #[arg(short, long, default_value = Config::DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Use the minimal table layout instead of the grid
    #[arg(long)]
    plain: bool,

    /// Spaces per indentation level in the saved file
    #[arg(long, default_value = "4")]
    indent: usize,
}

fn main() {
    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Gradebook v{}", gradebook::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    let style = if args.plain {
        TableStyle::Plain
    } else {
        TableStyle::Grid
    };

    let config = Config::builder()
        .data_file(&args.data_file)
        .json_indent(args.indent)
        .table_style(style)
        .build();

    let renderer = renderer_for(config.table_style);
    let book = Gradebook::open(config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    if let Err(e) = menu::run(&book, renderer.as_ref(), &mut input, &mut stdout) {
        tracing::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}
