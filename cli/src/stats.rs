//! deckscan-stats - color and font usage statistics for a slide deck.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use deckscan::{collect_stats, PdfiumBackend, TOP_COLOR_COUNT, TOP_FONT_COUNT};

#[derive(Parser)]
#[command(name = "deckscan-stats")]
#[command(version)]
#[command(about = "Collect color and font usage statistics from a PDF slide deck", long_about = None)]
struct Args {
    /// PDF file to analyze
    #[arg(value_name = "FILE")]
    pdf_path: PathBuf,

    /// Password for encrypted documents
    #[arg(short, long)]
    password: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args.pdf_path, args.password.as_deref()) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(path: &Path, password: Option<&str>) -> deckscan::Result<()> {
    let backend = PdfiumBackend::new()?;
    let doc = backend.open(path, password)?;

    println!("Analyzing: {}", path.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Scanning pages...");

    let stats = collect_stats(&doc)?;
    pb.finish_and_clear();
    log::debug!(
        "{} text colors, {} fonts, {} shape colors",
        stats.text_colors.len(),
        stats.fonts.len(),
        stats.shape_colors.len()
    );

    println!("Total pages: {}", stats.page_count);
    println!("Page size: {}", stats.page_size);
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", "=== GLOBAL STATISTICS ===".bold());
    println!("{}", "=".repeat(60));
    println!();

    println!("{}", "Top Colors (Text + Shapes):".bold());
    for (color, count) in stats.top_colors(TOP_COLOR_COUNT) {
        println!("  {color}: {count} occurrences");
    }
    println!();

    println!("{}", "Top Fonts:".bold());
    for (font, count) in stats.top_fonts(TOP_FONT_COUNT) {
        println!("  {font}: {count} occurrences");
    }

    Ok(())
}
