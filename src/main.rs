use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tangram_figures::color_utils::parse_color_result;
use tangram_figures::style::Color;
use tangram_figures::{find_figure, render_figures, ExportOptions, Figure, OutputFormat, FIGURES};

#[derive(Parser, Debug)]
#[command(name = "tangram-figures")]
#[command(about = "Generate the Egyptian Tangram booklet figures", long_about = None)]
struct Args {
    /// Figures to render (defaults to all of them)
    #[arg(value_name = "FIGURE")]
    figures: Vec<String>,

    /// Directory the figures are written to
    #[arg(short, long, value_name = "DIR", default_value = "figures")]
    out_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Output pixels per puzzle unit (the rectangle is 4 x 3 units)
    #[arg(long, default_value_t = 60.0)]
    unit: f64,

    /// Background color: #RRGGBB, #RRGGBBAA or transparent (PNG defaults to white)
    #[arg(long, value_parser = parse_color_result)]
    background: Option<Color>,

    /// PNG compression quality 0-100 (higher = smaller files, slower)
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// PNG density; 96 renders one pixel per unit of the SVG
    #[arg(long)]
    dpi: Option<u32>,

    /// List the available figures and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for figure in FIGURES {
            println!("{:<26} {}", figure.name, figure.title);
        }
        return Ok(());
    }

    let selected: Vec<&Figure> = if args.figures.is_empty() {
        FIGURES.iter().collect()
    } else {
        args.figures
            .iter()
            .map(|name| find_figure(name))
            .collect::<Result<_, _>>()?
    };

    let options = ExportOptions {
        format: args.format,
        background: args.background,
        quality: args.quality,
        dpi: args.dpi,
    };

    let written = render_figures(&selected, args.unit, &args.out_dir, &options)
        .with_context(|| format!("Failed to write figures to {:?}", args.out_dir))?;

    println!(
        "Successfully wrote {} figures to {}",
        written.len(),
        args.out_dir.display()
    );

    Ok(())
}
