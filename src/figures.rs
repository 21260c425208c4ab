//! The booklet figures.
//!
//! Every routine derives its points from the puzzle frame at a given unit
//! length and appends shapes and labels to a fresh drawing. Routines share
//! nothing but the helpers below.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::FigureError;
use crate::math_utils::{
    altitude_foot, centroid, distance, heading, midpoint, normalize_angle, reflected_point,
    rotated_point, scaled_point, translated, Point,
};
use crate::models::{Anchor, Drawing, Label};
use crate::path::{arc_point, Path};
use crate::renderer::fmt_num;
use crate::style::{Style, ACCENT, GUIDE, PAPER};
use crate::tangram::{spiral, EgyptianRectangle, Piece, PieceKind, RightTriangle, Silhouette};

const DOT_RADIUS: f64 = 3.0;
const LABEL_SIZE: f64 = 16.0;
const PIECE_LABEL_SIZE: f64 = 14.0;
const HALF_FILL: &str = "#f3e3b5";

pub type FigureFn = fn(&mut Drawing, f64);

/// A registered figure routine
pub struct Figure {
    pub name: &'static str,
    pub title: &'static str,
    draw: FigureFn,
}

impl Figure {
    /// Run the routine with `unit` output pixels per puzzle unit
    pub fn build(&self, unit: f64) -> Drawing {
        let mut drawing = Drawing::new(self.name, self.title);
        (self.draw)(&mut drawing, unit);
        drawing
    }
}

pub static FIGURES: &[Figure] = &[
    Figure {
        name: "egyptian_triangle",
        title: "The Egyptian triangle 3-4-5",
        draw: egyptian_triangle,
    },
    Figure {
        name: "egyptian_rectangle",
        title: "The 4 x 3 rectangle and its diagonal",
        draw: egyptian_rectangle,
    },
    Figure {
        name: "altitude_construction",
        title: "The foot of the altitude as a midpoint",
        draw: altitude_construction,
    },
    Figure {
        name: "similar_split",
        title: "Three similar pieces",
        draw: similar_split,
    },
    Figure {
        name: "tangram",
        title: "The Egyptian Tangram",
        draw: tangram,
    },
    Figure {
        name: "tangram_silhouette",
        title: "The puzzle outline",
        draw: tangram_silhouette,
    },
    Figure {
        name: "tangram_exploded",
        title: "The pieces pulled apart",
        draw: tangram_exploded,
    },
    Figure {
        name: "silhouette_kite",
        title: "Kite",
        draw: silhouette_kite,
    },
    Figure {
        name: "silhouette_tall_triangle",
        title: "Isosceles triangle 5-5-6",
        draw: silhouette_tall_triangle,
    },
    Figure {
        name: "silhouette_wide_triangle",
        title: "Isosceles triangle 5-5-8",
        draw: silhouette_wide_triangle,
    },
    Figure {
        name: "silhouette_parallelogram",
        title: "Parallelogram",
        draw: silhouette_parallelogram,
    },
    Figure {
        name: "incircle",
        title: "The incircle has radius 1",
        draw: incircle,
    },
    Figure {
        name: "thales_circle",
        title: "Thales circle over the diagonal",
        draw: thales_circle,
    },
    Figure {
        name: "pythagoras_outer",
        title: "Four triangles around the square on the hypotenuse",
        draw: pythagoras_outer,
    },
    Figure {
        name: "pythagoras_inner",
        title: "Four triangles inside the square on the hypotenuse",
        draw: pythagoras_inner,
    },
    Figure {
        name: "similar_spiral",
        title: "A spiral of similar triangles",
        draw: similar_spiral,
    },
    Figure {
        name: "piece_catalog",
        title: "The three piece shapes",
        draw: piece_catalog,
    },
];

pub fn find_figure(name: &str) -> Result<&'static Figure, FigureError> {
    FIGURES
        .iter()
        .find(|figure| figure.name == name)
        .ok_or_else(|| FigureError::UnknownFigure(name.to_string()))
}

// Shared drawing helpers

fn dot(drawing: &mut Drawing, at: Point) {
    drawing.push(Path::circle(at, DOT_RADIUS), Style::solid("#1e1e1e"));
}

/// Italic point name pushed away from `away_from`
fn point_label(drawing: &mut Drawing, name: &str, at: Point, away_from: Point, unit: f64) {
    let offset = 0.3 * unit / distance(away_from, at);
    let pos = scaled_point(away_from, at, 1.0 + offset);
    drawing.label(Label::new(name, pos).size(LABEL_SIZE).italic());
}

/// Label at the middle of `p q`, on the side opposite `inside`
fn side_label(drawing: &mut Drawing, text: &str, p: Point, q: Point, inside: Point, unit: f64) {
    let m = midpoint(p, q);
    let foot = altitude_foot(inside, p, q);
    let offset = 0.3 * unit / distance(inside, foot);
    let pos = scaled_point(inside, foot, 1.0 + offset);
    let pos = translated(pos, m.x - foot.x, m.y - foot.y);
    drawing.label(Label::new(text, pos).size(LABEL_SIZE));
}

/// Small square in the corner at `vertex` between the rays to `p` and `q`
fn right_angle_mark(vertex: Point, p: Point, q: Point, size: f64) -> Path {
    let a = scaled_point(vertex, p, size / distance(vertex, p));
    let b = scaled_point(vertex, q, size / distance(vertex, q));
    let corner = translated(a, b.x - vertex.x, b.y - vertex.y);
    Path::polyline(&[a, corner, b])
}

/// Arc at `vertex` from the ray towards `from` to the ray towards `to`,
/// taking the shorter way round
fn angle_arc(vertex: Point, from: Point, to: Point, radius: f64) -> (Path, Point) {
    let start = heading(vertex, from);
    let sweep = normalize_angle(heading(vertex, to) - start);
    let label_at = arc_point(vertex, radius * 1.7, start + sweep / 2.0);
    (Path::arc_between(vertex, radius, start, sweep), label_at)
}

fn draw_piece(drawing: &mut Drawing, piece: &Piece) {
    drawing.push(
        piece.path(),
        Style::filled(piece.kind.fill(piece.copy)).width(1.5),
    );
}

fn label_piece(drawing: &mut Drawing, piece: &Piece) {
    drawing.label(
        Label::new(piece.label(), piece.centroid())
            .size(PIECE_LABEL_SIZE)
            .color(PAPER),
    );
}

/// Segment `p q` extended by `overshoot` of its length at both ends
fn extended_segment(p: Point, q: Point, overshoot: f64) -> Path {
    Path::segment(scaled_point(p, q, -overshoot), scaled_point(p, q, 1.0 + overshoot))
}

// Figure routines

fn egyptian_triangle(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let t = rect.lower_triangle();
    let (a, b, c) = (t.a, t.right, t.c);
    let g = centroid(&t.vertices());

    drawing.push(t.path(), Style::filled(HALF_FILL).width(2.0));
    drawing.push(right_angle_mark(b, a, c, 0.3 * unit), Style::outline().width(1.0));

    side_label(drawing, "4", a, b, c, unit);
    side_label(drawing, "3", b, c, a, unit);
    side_label(drawing, "5", a, c, b, unit);

    point_label(drawing, "A", a, g, unit);
    point_label(drawing, "B", b, g, unit);
    point_label(drawing, "C", c, g, unit);
}

fn egyptian_rectangle(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let o = rect.center();

    drawing.push(rect.lower_triangle().path(), Style::solid(HALF_FILL));
    drawing.push(rect.upper_triangle().path(), Style::solid("#c9d6ea"));
    drawing.push(Path::polygon(&rect.corners()), Style::outline().width(2.0));
    drawing.push(Path::segment(rect.a, rect.c), Style::outline());
    dot(drawing, o);

    for (name, p) in ["A", "B", "C", "D"].iter().zip(rect.corners()) {
        point_label(drawing, name, p, o, unit);
    }
    drawing.label(
        Label::new("O", translated(o, 0.3 * unit, -0.1 * unit))
            .size(LABEL_SIZE)
            .italic(),
    );
}

fn altitude_construction(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let t = rect.lower_triangle();
    let (a, b, c) = (t.a, t.right, t.c);
    let b_mirror = reflected_point(b, a, c);
    let f = midpoint(b, b_mirror);

    drawing.push(
        RightTriangle::new(a, b_mirror, c).path(),
        Style::guide(),
    );
    drawing.push(t.path(), Style::filled(HALF_FILL).width(2.0));
    drawing.push(Path::segment(b, b_mirror), Style::guide().dotted());
    drawing.push(Path::segment(b, f), Style::outline().stroke_color(ACCENT).width(2.0));
    drawing.push(right_angle_mark(f, c, b, 0.25 * unit), Style::outline().width(1.0));
    dot(drawing, f);
    dot(drawing, b_mirror);

    let g = centroid(&t.vertices());
    point_label(drawing, "A", a, g, unit);
    point_label(drawing, "B", b, g, unit);
    point_label(drawing, "C", c, g, unit);
    point_label(drawing, "B'", b_mirror, f, unit);
    drawing.label(
        Label::new("F", translated(f, -0.3 * unit, 0.1 * unit))
            .size(LABEL_SIZE)
            .italic(),
    );
}

fn similar_split(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let pieces = rect.lower_pieces();
    for piece in &pieces {
        draw_piece(drawing, piece);
    }

    let (a, b, c) = (rect.a, rect.b, rect.c);
    let f = rect.foot_f();
    let k = rect.foot_k();
    let arc_style = Style::outline().width(1.0);
    for (vertex, from, to) in [(a, k, f), (b, c, f), (f, k, b)] {
        let (arc, label_at) = angle_arc(vertex, from, to, 0.4 * unit);
        drawing.push(arc, arc_style.clone());
        drawing.label(Label::new("α", label_at).size(PIECE_LABEL_SIZE).italic());
    }

    for piece in &pieces {
        drawing.label(
            Label::new(piece.kind.name(), piece.centroid())
                .size(PIECE_LABEL_SIZE)
                .color(PAPER),
        );
    }

    let g = centroid(&rect.lower_triangle().vertices());
    for (name, p) in [("A", a), ("B", b), ("C", c), ("F", f), ("K", k)] {
        point_label(drawing, name, p, g, unit);
    }
}

fn tangram(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let pieces = rect.pieces();
    for piece in &pieces {
        draw_piece(drawing, piece);
    }
    drawing.push(Path::polygon(&rect.corners()), Style::outline().width(3.0));
    for piece in &pieces {
        label_piece(drawing, piece);
    }
}

fn tangram_silhouette(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    drawing.push(
        Path::polygon(&Silhouette::Rectangle.outline(&rect)),
        Style::solid("#3b3024"),
    );
}

fn tangram_exploded(drawing: &mut Drawing, unit: f64) {
    const SPREAD: f64 = 1.35;

    let rect = EgyptianRectangle::new(unit);
    let o = rect.center();
    drawing.push(Path::polygon(&rect.corners()), Style::guide());

    let pieces = rect.pieces();
    let moved: Vec<Piece> = pieces
        .iter()
        .map(|piece| {
            let from = piece.centroid();
            let to = scaled_point(o, from, SPREAD);
            piece.map(|p| translated(p, to.x - from.x, to.y - from.y))
        })
        .collect();
    for piece in &moved {
        draw_piece(drawing, piece);
    }
    for piece in &moved {
        label_piece(drawing, piece);
    }
    dot(drawing, o);
}

fn silhouette_figure(drawing: &mut Drawing, silhouette: Silhouette, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let axis = match silhouette {
        Silhouette::Kite => Some((rect.a, rect.c)),
        Silhouette::TallTriangle => Some((rect.a, rect.b)),
        Silhouette::WideTriangle => Some((rect.b, rect.c)),
        Silhouette::Rectangle | Silhouette::Parallelogram => None,
    };

    let pieces = silhouette.arrange(&rect);
    for piece in &pieces {
        draw_piece(drawing, piece);
    }
    drawing.push(
        Path::polygon(&silhouette.outline(&rect)),
        Style::outline().width(3.0),
    );
    match axis {
        Some((p, q)) => {
            drawing.push(extended_segment(p, q, 0.15), Style::guide().stroke_color(ACCENT));
        }
        None => {
            let pivot = match silhouette {
                Silhouette::Parallelogram => midpoint(rect.b, rect.c),
                _ => rect.center(),
            };
            dot(drawing, pivot);
        }
    }
    for piece in &pieces {
        label_piece(drawing, piece);
    }
}

fn silhouette_kite(drawing: &mut Drawing, unit: f64) {
    silhouette_figure(drawing, Silhouette::Kite, unit);
}

fn silhouette_tall_triangle(drawing: &mut Drawing, unit: f64) {
    silhouette_figure(drawing, Silhouette::TallTriangle, unit);
}

fn silhouette_wide_triangle(drawing: &mut Drawing, unit: f64) {
    silhouette_figure(drawing, Silhouette::WideTriangle, unit);
}

fn silhouette_parallelogram(drawing: &mut Drawing, unit: f64) {
    silhouette_figure(drawing, Silhouette::Parallelogram, unit);
}

fn incircle(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let t = rect.lower_triangle();
    let (a, b, c) = (t.a, t.right, t.c);
    let i = t.incenter();
    let r = t.inradius();

    drawing.push(t.path(), Style::filled(HALF_FILL).width(2.0));
    drawing.push(Path::circle(i, r), Style::outline().stroke_color(ACCENT).width(2.0));

    let touch_ab = altitude_foot(i, a, b);
    drawing.push(Path::segment(i, touch_ab), Style::guide());
    for (p, q) in [(a, b), (b, c), (a, c)] {
        dot(drawing, altitude_foot(i, p, q));
    }
    dot(drawing, i);

    drawing.label(
        Label::new(
            format!("r = {}", fmt_num(r / unit)),
            translated(midpoint(i, touch_ab), 0.45 * unit, 0.0),
        )
        .size(LABEL_SIZE)
        .color(ACCENT),
    );
    let g = centroid(&t.vertices());
    point_label(drawing, "A", a, g, unit);
    point_label(drawing, "B", b, g, unit);
    point_label(drawing, "C", c, g, unit);
    drawing.label(
        Label::new("I", translated(i, -0.12 * unit, 0.2 * unit))
            .size(LABEL_SIZE)
            .anchor(Anchor::End)
            .italic(),
    );
}

fn thales_circle(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let o = rect.lower_triangle().circumcenter();
    let radius = distance(o, rect.a);

    drawing.push(Path::circle(o, radius), Style::guide());
    drawing.push(Path::polygon(&rect.corners()), Style::filled(HALF_FILL).width(1.5));
    drawing.push(Path::segment(rect.a, rect.c), Style::outline());
    // Lower semicircle from A through B to C
    drawing.push(
        Path::arc_between(o, radius, heading(o, rect.a), PI),
        Style::outline().stroke_color(ACCENT).width(2.5),
    );
    drawing.push(Path::segment(o, rect.b), Style::guide().dotted());
    drawing.push(Path::segment(o, rect.d), Style::guide().dotted());
    drawing.push(
        right_angle_mark(rect.b, rect.a, rect.c, 0.3 * unit),
        Style::outline().width(1.0),
    );
    drawing.push(
        right_angle_mark(rect.d, rect.c, rect.a, 0.3 * unit),
        Style::outline().width(1.0),
    );
    dot(drawing, o);

    for (name, p) in ["A", "B", "C", "D"].iter().zip(rect.corners()) {
        point_label(drawing, name, p, o, unit);
    }
    drawing.label(
        Label::new("O", translated(o, 0.0, 0.3 * unit))
            .size(LABEL_SIZE)
            .italic(),
    );
    drawing.label(
        Label::new(
            format!("R = {}", fmt_num(radius / unit)),
            translated(midpoint(o, rect.b), 0.15 * unit, 0.15 * unit),
        )
        .size(LABEL_SIZE)
        .anchor(Anchor::Start)
        .color(ACCENT),
    );
}

/// Center of the square erected on AC away from B
fn hypotenuse_square_center(rect: &EgyptianRectangle) -> Point {
    rotated_point(rect.a, rect.center(), -FRAC_PI_2)
}

fn quarter_turns(t: RightTriangle, pivot: Point) -> Vec<RightTriangle> {
    (0..4)
        .map(|k| t.map(|p| rotated_point(p, pivot, k as f64 * FRAC_PI_2)))
        .collect()
}

fn pythagoras_outer(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let q = hypotenuse_square_center(&rect);
    let t = rect.lower_triangle();
    let square: Vec<Point> = (0..4)
        .map(|k| rotated_point(rect.a, q, k as f64 * FRAC_PI_2))
        .collect();
    let outer: Vec<Point> = (0..4)
        .map(|k| rotated_point(rect.b, q, k as f64 * FRAC_PI_2))
        .collect();

    drawing.push(Path::polygon(&square), Style::filled(HALF_FILL).width(2.0));
    for (k, tri) in quarter_turns(t, q).iter().enumerate() {
        let kind = PieceKind::ALL[k % PieceKind::ALL.len()];
        drawing.push(tri.path(), Style::filled(kind.fill(1 + (k / 3) as u8)));
    }
    drawing.push(Path::polygon(&outer), Style::outline().width(3.0));

    side_label(drawing, "4", t.a, t.right, t.c, unit);
    side_label(drawing, "3", t.right, t.c, t.a, unit);
    drawing.label(Label::new("5 × 5", q).size(LABEL_SIZE + 4.0));
}

fn pythagoras_inner(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let q = hypotenuse_square_center(&rect);
    let t = rect.lower_triangle();
    let inside = t.map(|p| reflected_point(p, rect.a, rect.c));
    let square: Vec<Point> = (0..4)
        .map(|k| rotated_point(rect.a, q, k as f64 * FRAC_PI_2))
        .collect();
    let hole: Vec<Point> = (0..4)
        .map(|k| rotated_point(inside.right, q, k as f64 * FRAC_PI_2))
        .collect();

    for (k, tri) in quarter_turns(inside, q).iter().enumerate() {
        let kind = PieceKind::ALL[k % PieceKind::ALL.len()];
        drawing.push(tri.path(), Style::filled(kind.fill(1 + (k / 3) as u8)));
    }
    drawing.push(Path::polygon(&hole), Style::outline().fill_color(PAPER).stroke_color(ACCENT));
    drawing.push(Path::polygon(&square), Style::outline().width(3.0));
    side_label(drawing, "5", rect.a, rect.c, q, unit);
    drawing.label(
        Label::new("1", translated(q, 0.0, 0.75 * unit))
            .size(LABEL_SIZE)
            .color(ACCENT),
    );
}

fn similar_spiral(drawing: &mut Drawing, unit: f64) {
    const DEPTH: usize = 9;
    const SHADES: [&str; 6] = [
        "#d4a017", "#1f4e9c", "#b5512f", "#e8c15a", "#4f7cc4", "#d27d5c",
    ];

    let rect = EgyptianRectangle::new(unit);
    for (i, t) in spiral(rect.lower_triangle(), DEPTH).iter().enumerate() {
        drawing.push(t.path(), Style::filled(SHADES[i % SHADES.len()]).width(1.0));
    }
    drawing.push(
        Path::polygon(&rect.lower_triangle().ccw_vertices()),
        Style::outline().width(2.5),
    );
}

fn piece_catalog(drawing: &mut Drawing, unit: f64) {
    let rect = EgyptianRectangle::new(unit);
    let gap = 0.8 * unit;
    let mut left = 0.0;

    for piece in rect.lower_pieces() {
        let vertices = piece.triangle.vertices();
        let min_x = vertices.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = vertices.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = vertices.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let placed = piece.map(|p| translated(p, left - min_x, -min_y));

        draw_piece(drawing, &placed);
        let t = placed.triangle;
        for (p, q, opposite) in [(t.a, t.right, t.c), (t.right, t.c, t.a), (t.a, t.c, t.right)] {
            let length = fmt_num(distance(p, q) / unit);
            side_label(drawing, &length, p, q, opposite, unit);
        }
        let bottom = Point::new(left + (max_x - min_x) / 2.0, -0.9 * unit);
        drawing.label(
            Label::new(piece.kind.name(), bottom)
                .size(LABEL_SIZE)
                .color(GUIDE),
        );
        left += max_x - min_x + gap;
    }
}
