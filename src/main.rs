mod console;
mod drawing;
mod geometry;
mod shapes;
mod svg;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drawing::Drawing;

/// Build, transform and persist simple SVG figures from a console menu
#[derive(Parser, Debug)]
#[command(name = "svgfig")]
#[command(version, about, long_about = None)]
struct Args {
    /// SVG document to load from and save to
    #[arg(value_name = "FILE", default_value = "output.svg")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Log to stderr so the interactive prompt on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut drawing = Drawing::new(args.file);
    drawing.load_from_file()?;
    if !drawing.is_empty() {
        println!(
            "Loaded {} figure(s) from {}",
            drawing.figure_count(),
            drawing.path().display()
        );
    }

    console::run(&mut drawing)
}
