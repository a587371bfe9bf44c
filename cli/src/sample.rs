//! deckscan-sample - render a representative sample of deck pages to PNG.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use deckscan::{render_sample, PdfiumBackend, RENDER_DPI};

#[derive(Parser)]
#[command(name = "deckscan-sample")]
#[command(version)]
#[command(about = "Render a representative sample of deck pages to PNG files", long_about = None)]
struct Args {
    /// PDF file to sample
    #[arg(value_name = "FILE")]
    pdf_path: PathBuf,

    /// Output directory for rendered images
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Rasterization resolution in dots per inch
    #[arg(long, default_value_t = RENDER_DPI)]
    dpi: f32,

    /// Password for encrypted documents
    #[arg(short, long)]
    password: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> deckscan::Result<()> {
    let backend = PdfiumBackend::new()?;
    let doc = backend.open(&args.pdf_path, args.password.as_deref())?;

    println!("Rendering pages from: {}", args.pdf_path.display());
    println!("Output directory: {}", args.output.display());

    let saved = render_sample(&doc, &args.output, args.dpi)?;
    log::debug!("rendered {} pages", saved.len());

    for (index, path) in &saved {
        println!("Saved page {} to {}", index + 1, path.display());
    }

    Ok(())
}
