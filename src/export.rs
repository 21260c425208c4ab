use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

use crate::converter::convert_svg_to_png;
use crate::error::FigureError;
use crate::figures::Figure;
use crate::models::Drawing;
use crate::renderer::generate_svg;
use crate::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Vector drawing
    Svg,
    /// Raster image of the SVG
    Png,
    /// Paths, styles and labels as JSON
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: OutputFormat,
    pub background: Option<Color>,
    pub quality: u8,
    pub dpi: Option<u32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            background: None,
            quality: 90,
            dpi: None,
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), FigureError> {
    fs::write(path, contents).map_err(|source| FigureError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `drawing` to `<out_dir>/<name>.<ext>` and return the path
pub fn export_drawing(
    drawing: &Drawing,
    out_dir: &Path,
    options: &ExportOptions,
) -> Result<PathBuf, FigureError> {
    let output_path = out_dir.join(format!("{}.{}", drawing.name, options.format.extension()));

    match options.format {
        OutputFormat::Svg => {
            let svg_content = generate_svg(drawing, options.background);
            write_file(&output_path, &svg_content)?;
        }
        OutputFormat::Png => {
            let svg_content = generate_svg(drawing, None);
            convert_svg_to_png(
                &svg_content,
                &output_path,
                options.background,
                options.quality,
                options.dpi,
            )?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(drawing)?;
            write_file(&output_path, &json)?;
        }
    }

    log::info!("wrote {}", output_path.display());
    Ok(output_path)
}

/// Build and write each figure in turn, stopping at the first failure
pub fn render_figures(
    figures: &[&Figure],
    unit: f64,
    out_dir: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, FigureError> {
    fs::create_dir_all(out_dir).map_err(|source| FigureError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(figures.len());
    for figure in figures {
        let drawing = figure.build(unit);
        log::debug!(
            "{}: {} shapes, {} labels",
            figure.name,
            drawing.shapes().count(),
            drawing.labels().count()
        );
        written.push(export_drawing(&drawing, out_dir, options)?);
    }
    Ok(written)
}
