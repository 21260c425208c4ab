pub mod color_utils;
pub mod converter;
pub mod error;
pub mod export;
pub mod figures;
pub mod math_utils;
pub mod models;
pub mod path;
pub mod renderer;
pub mod style;
pub mod tangram;

pub use converter::convert_svg_to_png;
pub use error::FigureError;
pub use export::{export_drawing, render_figures, ExportOptions, OutputFormat};
pub use figures::{find_figure, Figure, FIGURES};
pub use models::{Drawing, Item, Label};
pub use renderer::{calculate_viewbox, generate_svg};

#[cfg(test)]
mod tests;
