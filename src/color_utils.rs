/// Color parsing and style fill/stroke detection utilities
use crate::style::{Color, Style};

/// Parse a hex color string into a color
/// Accepts:
/// - "transparent" => (0, 0, 0, 0)
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
/// - Empty string => (0, 0, 0, 0)
/// - Invalid format => (0, 0, 0, 255) - defaults to black
pub fn parse_color(color_str: &str) -> Color {
    if color_str.is_empty() {
        return Color::new(0, 0, 0, 0);
    }
    parse_color_result(color_str).unwrap_or(Color::new(0, 0, 0, 255))
}

/// Parse a hex color string with Result type (for error handling)
/// Used as the clap value parser for `--background`
pub fn parse_color_result(color_str: &str) -> Result<Color, String> {
    let trimmed = color_str.trim();
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(Color::new(0, 0, 0, 0));
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.is_ascii() {
        return Err(format!("Invalid color `{color_str}`"));
    }

    let component = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| format!("Invalid hex digit in {name} component"))
    };

    match hex.len() {
        6 => Ok(Color::new(
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            255,
        )),
        8 => Ok(Color::new(
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            component(6..8, "A")?,
        )),
        _ => Err(format!(
            "Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA), got {}",
            hex.len()
        )),
    }
}

/// `#rrggbb` form of a color, alpha dropped
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Alpha as an SVG opacity in `0..=1`
pub fn opacity(color: Color) -> f64 {
    f64::from(color.alpha) / 255.0
}

/// Check if a color is fully transparent
pub fn is_transparent(color: Color) -> bool {
    color.alpha == 0
}

/// Determine if a style should render a stroke
/// Returns true if:
/// - a stroke color is set and not fully transparent
/// - line_width > 0.0
pub fn has_stroke(style: &Style) -> bool {
    style.line_width > 0.0 && style.stroke.is_some_and(|c| !is_transparent(c))
}

/// Determine if a style should render a fill
pub fn has_fill(style: &Style) -> bool {
    style.fill.is_some_and(|c| !is_transparent(c))
}
