use std::path::PathBuf;

/// Failures while writing figures. Geometry itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    #[error("unknown figure `{0}` (use --list to see the available figures)")]
    UnknownFigure(String),

    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("generated SVG could not be parsed: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("failed to create a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to serialize drawing: {0}")]
    Json(#[from] serde_json::Error),
}
