use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use crate::color_utils::{has_fill, has_stroke, opacity, to_hex};
use crate::models::{Anchor, Drawing, Item, Label, ViewBox};
use crate::path::{arc_point, Path, PathCmd};
use crate::style::{Color, Style};

const PADDING: f64 = 24.0;
const FONT_FAMILY: &str = "DejaVu Serif, Times New Roman, serif";

/// Viewbox in SVG space (y flipped) enclosing every path and label
pub fn calculate_viewbox(drawing: &Drawing) -> ViewBox {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (path, style) in drawing.shapes() {
        if let Some(bounds) = path.bounds() {
            let half_width = style.line_width / 2.0;
            min_x = min_x.min(bounds.min.x - half_width);
            max_x = max_x.max(bounds.max.x + half_width);
            min_y = min_y.min(-bounds.max.y - half_width);
            max_y = max_y.max(-bounds.min.y + half_width);
        }
    }

    for label in drawing.labels() {
        let width = label_width(label);
        let x = label.at.x;
        let y = -label.at.y;
        let (left, right) = match label.anchor {
            Anchor::Start => (x, x + width),
            Anchor::Middle => (x - width / 2.0, x + width / 2.0),
            Anchor::End => (x - width, x),
        };
        min_x = min_x.min(left);
        max_x = max_x.max(right);
        min_y = min_y.min(y - label.font_size / 2.0);
        max_y = max_y.max(y + label.font_size / 2.0);
    }

    if !min_x.is_finite() || !min_y.is_finite() {
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
    }

    ViewBox {
        min_x: min_x - PADDING,
        min_y: min_y - PADDING,
        width: max_x - min_x + PADDING * 2.0,
        height: max_y - min_y + PADDING * 2.0,
    }
}

/// Rough advance width; serif digits and capitals run about 0.6 em
fn label_width(label: &Label) -> f64 {
    label.text.chars().count() as f64 * label.font_size * 0.6
}

/// Format a coordinate with at most three decimals and no trailing zeros
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// SVG path data with y flipped into screen space
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    let mut has_current = false;

    for cmd in path.commands() {
        if !d.is_empty() {
            d.push(' ');
        }
        match *cmd {
            PathCmd::MoveTo(p) => {
                let _ = write!(d, "M {} {}", fmt_num(p.x), fmt_num(-p.y));
                has_current = true;
            }
            PathCmd::LineTo(p) => {
                let _ = write!(d, "L {} {}", fmt_num(p.x), fmt_num(-p.y));
                has_current = true;
            }
            PathCmd::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => {
                let start = arc_point(center, radius, start_angle);
                let op = if has_current { "L" } else { "M" };
                let _ = write!(d, "{} {} {}", op, fmt_num(start.x), fmt_num(-start.y));
                // Counter-clockwise in puzzle space is the negative-angle
                // direction once y points down.
                let sweep_flag = if sweep_angle > 0.0 { 0 } else { 1 };
                let r = fmt_num(radius);
                if sweep_angle.abs() >= TAU - 1e-9 {
                    // A single arc command cannot describe a full circle.
                    let half = sweep_angle / 2.0;
                    for end_angle in [start_angle + half, start_angle + sweep_angle] {
                        let end = arc_point(center, radius, end_angle);
                        let _ = write!(
                            d,
                            " A {r} {r} 0 0 {sweep_flag} {} {}",
                            fmt_num(end.x),
                            fmt_num(-end.y)
                        );
                    }
                } else {
                    let large_arc = if sweep_angle.abs() > PI { 1 } else { 0 };
                    let end = arc_point(center, radius, start_angle + sweep_angle);
                    let _ = write!(
                        d,
                        " A {r} {r} 0 {large_arc} {sweep_flag} {} {}",
                        fmt_num(end.x),
                        fmt_num(-end.y)
                    );
                }
                has_current = true;
            }
            PathCmd::Close => {
                d.push('Z');
                has_current = false;
            }
        }
    }
    d
}

fn paint_attrs(style: &Style) -> String {
    let mut attrs = String::new();
    match style.fill {
        Some(fill) if has_fill(style) => {
            let _ = write!(attrs, r#" fill="{}""#, to_hex(fill));
            if fill.alpha < 255 {
                let _ = write!(attrs, r#" fill-opacity="{}""#, fmt_num(opacity(fill)));
            }
        }
        _ => attrs.push_str(r#" fill="none""#),
    }
    match style.stroke {
        Some(stroke) if has_stroke(style) => {
            let _ = write!(
                attrs,
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round""#,
                to_hex(stroke),
                fmt_num(style.line_width)
            );
            if stroke.alpha < 255 {
                let _ = write!(attrs, r#" stroke-opacity="{}""#, fmt_num(opacity(stroke)));
            }
            if let Some(dash) = style.dasharray_attr() {
                let _ = write!(attrs, r#" stroke-dasharray="{}""#, dash);
            }
        }
        _ => attrs.push_str(r#" stroke="none""#),
    }
    attrs
}

fn render_shape(path: &Path, style: &Style) -> String {
    if path.is_empty() {
        return String::new();
    }
    format!(r#"<path d="{}"{}/>"#, path_data(path), paint_attrs(style))
}

fn get_text_anchor(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn render_label(label: &Label) -> String {
    let style_attr = if label.italic {
        r#" font-style="italic""#
    } else {
        ""
    };
    format!(
        r#"<text x="{}" y="{}" font-size="{}" font-family="{}"{} fill="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
        fmt_num(label.at.x),
        fmt_num(-label.at.y),
        fmt_num(label.font_size),
        FONT_FAMILY,
        style_attr,
        to_hex(label.color),
        get_text_anchor(label.anchor),
        escape_xml(&label.text)
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render a drawing as a standalone SVG document
pub fn generate_svg(drawing: &Drawing, background: Option<Color>) -> String {
    let viewbox = calculate_viewbox(drawing);

    let mut body = Vec::with_capacity(drawing.items.len() + 1);
    if let Some(bg) = background.filter(|c| c.alpha > 0) {
        let mut rect = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            fmt_num(viewbox.min_x),
            fmt_num(viewbox.min_y),
            fmt_num(viewbox.width),
            fmt_num(viewbox.height),
            to_hex(bg)
        );
        if bg.alpha < 255 {
            let _ = write!(rect, r#" fill-opacity="{}""#, fmt_num(opacity(bg)));
        }
        rect.push_str("/>");
        body.push(rect);
    }

    for item in &drawing.items {
        let rendered = match item {
            Item::Shape { path, style } => render_shape(path, style),
            Item::Label(label) => render_label(label),
        };
        if !rendered.is_empty() {
            body.push(rendered);
        }
    }

    format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"{} {} {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n  <title>{}</title>\n  {}\n</svg>\n",
        fmt_num(viewbox.min_x),
        fmt_num(viewbox.min_y),
        escape_xml(&drawing.title),
        body.join("\n  "),
        w = fmt_num(viewbox.width),
        h = fmt_num(viewbox.height),
    )
}
