use resvg::usvg::{self, Tree};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::Pixmap;

use crate::error::FigureError;
use crate::style::Color;

/// Rasterize an SVG document to PNG. Labels use the system fonts.
///
/// `background` defaults to opaque white; `dpi` scales the output relative
/// to 96 DPI.
pub fn convert_svg_to_png(
    svg_content: &str,
    output_path: &Path,
    background: Option<Color>,
    quality: u8,
    dpi: Option<u32>,
) -> Result<(), FigureError> {
    let mut options = usvg::Options::default();
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    log::debug!("loaded {} font faces", fontdb.len());
    options.fontdb = Arc::new(fontdb);

    let tree = Tree::from_str(svg_content, &options)?;

    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(1);
    let height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height).ok_or(FigureError::Pixmap { width, height })?;

    let bg = background.unwrap_or(Color::new(255, 255, 255, 255));
    if bg.alpha > 0 {
        pixmap.fill(tiny_skia::Color::from_rgba8(
            bg.red, bg.green, bg.blue, bg.alpha,
        ));
    }

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    save_png_with_quality(&pixmap, output_path, quality)
}

/// Save a pixmap to PNG with compression quality control (0-100).
/// Maps 0-100 to PNG compression types:
/// - 0-25: Fast (fastest encoding, larger files)
/// - 26-75: Default (balanced)
/// - 76-100: Best (slowest encoding, smallest files)
pub fn save_png_with_quality(
    pixmap: &Pixmap,
    output_path: &Path,
    quality: u8,
) -> Result<(), FigureError> {
    let file = File::create(output_path).map_err(|source| FigureError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_filter(png::FilterType::Paeth);

    let compression_type = if quality <= 25 {
        png::Compression::Fast
    } else if quality <= 75 {
        png::Compression::Default
    } else {
        png::Compression::Best
    };
    encoder.set_compression(compression_type);

    let mut writer = encoder.write_header()?;

    // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    writer.write_image_data(&data)?;

    Ok(())
}
