use serde::{Deserialize, Serialize};

use crate::color_utils::parse_color;

/// Colors carry alpha so pieces can be tinted over guide lines.
pub type Color = palette::Srgba<u8>;

pub const INK: Color = Color::new(0x1e, 0x1e, 0x1e, 255);
pub const GUIDE: Color = Color::new(0x86, 0x8e, 0x96, 255);
pub const PAPER: Color = Color::new(0xfb, 0xf6, 0xe9, 255);
pub const ACCENT: Color = Color::new(0xc0, 0x39, 0x2b, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Dash pattern scaled by line width, or None for solid strokes
    pub fn dash_array(self, line_width: f64) -> Option<Vec<f64>> {
        match self {
            // [8, 8 + lineWidth]
            LineStyle::Dashed => Some(vec![8.0, 8.0 + line_width.max(0.0)]),
            // [1.5, 6 + lineWidth]
            LineStyle::Dotted => Some(vec![1.5, 6.0 + line_width.max(0.0)]),
            LineStyle::Solid => None,
        }
    }
}

/// Rendering attributes attached to one path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub line_width: f64,
    pub line_style: LineStyle,
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            line_style: LineStyle::Solid,
            stroke: Some(INK),
            fill: None,
        }
    }
}

impl Style {
    /// Ink outline, no fill
    pub fn outline() -> Self {
        Self::default()
    }

    /// Filled with `fill`, outlined in ink
    pub fn filled(fill: &str) -> Self {
        Self {
            fill: Some(parse_color(fill)),
            ..Self::default()
        }
    }

    /// Fill only, no outline
    pub fn solid(fill: &str) -> Self {
        Self {
            line_width: 0.0,
            stroke: None,
            fill: Some(parse_color(fill)),
            ..Self::default()
        }
    }

    /// Thin dashed grey construction line
    pub fn guide() -> Self {
        Self {
            line_width: 1.0,
            line_style: LineStyle::Dashed,
            stroke: Some(GUIDE),
            fill: None,
        }
    }

    pub fn width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    pub fn dotted(mut self) -> Self {
        self.line_style = LineStyle::Dotted;
        self
    }

    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Current dash pattern as an SVG attribute value (e.g. "8,9.5")
    pub fn dasharray_attr(&self) -> Option<String> {
        self.line_style.dash_array(self.line_width).map(|dash| {
            dash.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}
