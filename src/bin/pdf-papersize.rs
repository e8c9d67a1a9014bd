//! PDF paper size CLI tool
//!
//! A command-line tool for normalizing every page of a PDF to one paper size.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdf_papersize::paper;
use pdf_papersize::pdf::{resize_pdf, ResizeOptions};
use pdf_papersize::Error;

/// PDF Paper Size - Resize every page of a PDF to a target paper size
#[derive(Parser)]
#[command(name = "pdf-papersize")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Normalize every page to A4 (the default)
    pdf-papersize --file scan.pdf

    # Use a named preset
    pdf-papersize -f scan.pdf -s Letter

    # Custom size in points; a wide pair is treated as landscape
    pdf-papersize -f scan.pdf -c 300 200

    # List the recognized size names
    pdf-papersize --options")]
struct Cli {
    /// Print all recognized paper sizes and exit
    #[arg(long)]
    options: bool,

    /// Input PDF file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Paper size preset name (default: A4)
    #[arg(short, long)]
    size: Option<String>,

    /// Custom paper size in points
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    custom: Option<Vec<u32>>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.options {
        print!("{}", paper::catalog());
        return Ok(());
    }

    let input = cli.file.ok_or(Error::MissingInput)?;
    if !input.exists() {
        return Err(Error::FileNotFound(input).into());
    }

    println!("FILE: {}", input.display());

    let options = ResizeOptions {
        input_path: input,
        size: cli.size,
        custom: cli.custom.map(|pair| (pair[0], pair[1])),
    };

    let report = resize_pdf(&options)?;

    println!("\nPDF converted: {}", report.output_path.display());

    Ok(())
}
