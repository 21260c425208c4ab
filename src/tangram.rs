//! Construction of the Egyptian Tangram.
//!
//! The frame is the 4 x 3 rectangle ABCD whose diagonal AC (length 5) cuts
//! it into two Egyptian triangles. Dropping the altitude from the right
//! angle onto the hypotenuse splits a right triangle into two triangles
//! similar to it; doing so twice in the lower half gives the three piece
//! shapes, and a half turn about the center gives their second copies.

use serde::Serialize;
use std::f64::consts::PI;

use crate::math_utils::{
    altitude_foot, centroid, distance, midpoint, polygon_area, reflected_point, rotated_point,
    weighted_point, Point,
};
use crate::path::Path;

pub const WIDTH_UNITS: f64 = 4.0;
pub const HEIGHT_UNITS: f64 = 3.0;

/// A right triangle with the right angle at `right` and hypotenuse `a c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RightTriangle {
    pub a: Point,
    pub right: Point,
    pub c: Point,
}

impl RightTriangle {
    pub fn new(a: Point, right: Point, c: Point) -> Self {
        Self { a, right, c }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.right, self.c]
    }

    /// Vertices in counter-clockwise order
    pub fn ccw_vertices(&self) -> [Point; 3] {
        let v = self.vertices();
        if polygon_area(&v) < 0.0 {
            [v[2], v[1], v[0]]
        } else {
            v
        }
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices()).abs()
    }

    pub fn hypotenuse(&self) -> f64 {
        distance(self.a, self.c)
    }

    /// Foot of the altitude from the right angle onto the hypotenuse
    pub fn altitude_foot(&self) -> Point {
        altitude_foot(self.right, self.a, self.c)
    }

    /// Split along the altitude into two triangles similar to `self`.
    /// The first keeps vertex `a`, the second keeps vertex `c`.
    pub fn split(&self) -> (RightTriangle, RightTriangle) {
        let foot = self.altitude_foot();
        (
            RightTriangle::new(self.a, foot, self.right),
            RightTriangle::new(self.right, foot, self.c),
        )
    }

    /// Incircle center: the vertices weighted by their opposite side lengths
    pub fn incenter(&self) -> Point {
        let side_a = distance(self.right, self.c);
        let side_right = self.hypotenuse();
        let side_c = distance(self.a, self.right);
        let ab = weighted_point(self.a, self.right, side_a, side_right);
        weighted_point(ab, self.c, side_a + side_right, side_c)
    }

    /// For a right triangle the inradius is `(leg + leg - hypotenuse) / 2`
    pub fn inradius(&self) -> f64 {
        (distance(self.a, self.right) + distance(self.right, self.c) - self.hypotenuse()) / 2.0
    }

    /// Circumcenter, the midpoint of the hypotenuse
    pub fn circumcenter(&self) -> Point {
        midpoint(self.a, self.c)
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        Self::new(f(self.a), f(self.right), f(self.c))
    }

    pub fn path(&self) -> Path {
        Path::polygon(&self.ccw_vertices())
    }
}

/// Split `t` `depth` times, always continuing with the child that keeps
/// vertex `c`. Returns the peeled-off triangles followed by the last child.
pub fn spiral(t: RightTriangle, depth: usize) -> Vec<RightTriangle> {
    let mut out = Vec::with_capacity(depth + 1);
    let mut current = t;
    for _ in 0..depth {
        let (first, second) = current.split();
        out.push(first);
        current = second;
    }
    out.push(current);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Large,
    Medium,
    Small,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::Large, PieceKind::Medium, PieceKind::Small];

    pub fn letter(self) -> char {
        match self {
            PieceKind::Large => 'L',
            PieceKind::Medium => 'M',
            PieceKind::Small => 'S',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Large => "large",
            PieceKind::Medium => "medium",
            PieceKind::Small => "small",
        }
    }

    /// Fill color for the given copy (1 or 2)
    pub fn fill(self, copy: u8) -> &'static str {
        match (self, copy) {
            (PieceKind::Large, 1) => "#d4a017",
            (PieceKind::Large, _) => "#e8c15a",
            (PieceKind::Medium, 1) => "#1f4e9c",
            (PieceKind::Medium, _) => "#4f7cc4",
            (PieceKind::Small, 1) => "#b5512f",
            (PieceKind::Small, _) => "#d27d5c",
        }
    }
}

/// One triangular piece of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub copy: u8,
    pub triangle: RightTriangle,
}

impl Piece {
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.letter(), self.copy)
    }

    pub fn centroid(&self) -> Point {
        centroid(&self.triangle.vertices())
    }

    pub fn area(&self) -> f64 {
        self.triangle.area()
    }

    pub fn path(&self) -> Path {
        self.triangle.path()
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        Self {
            triangle: self.triangle.map(f),
            ..*self
        }
    }
}

/// The 4 x 3 frame of the puzzle, scaled by `unit`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EgyptianRectangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl EgyptianRectangle {
    pub fn new(unit: f64) -> Self {
        let w = WIDTH_UNITS * unit;
        let h = HEIGHT_UNITS * unit;
        Self {
            a: Point::new(0.0, 0.0),
            b: Point::new(w, 0.0),
            c: Point::new(w, h),
            d: Point::new(0.0, h),
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn center(&self) -> Point {
        midpoint(self.a, self.c)
    }

    /// Triangle ABC, right angle at B
    pub fn lower_triangle(&self) -> RightTriangle {
        RightTriangle::new(self.a, self.b, self.c)
    }

    /// Triangle CDA, right angle at D
    pub fn upper_triangle(&self) -> RightTriangle {
        RightTriangle::new(self.c, self.d, self.a)
    }

    /// Foot F of the altitude from B onto AC
    pub fn foot_f(&self) -> Point {
        self.lower_triangle().altitude_foot()
    }

    /// Foot K of the altitude from F onto AB
    pub fn foot_k(&self) -> Point {
        altitude_foot(self.foot_f(), self.a, self.b)
    }

    /// The three pieces cut from triangle ABC
    pub fn lower_pieces(&self) -> [Piece; 3] {
        let (afb, bfc) = self.lower_triangle().split();
        let (akf, fkb) = afb.split();
        [
            Piece {
                kind: PieceKind::Large,
                copy: 1,
                triangle: akf,
            },
            Piece {
                kind: PieceKind::Medium,
                copy: 1,
                triangle: bfc,
            },
            Piece {
                kind: PieceKind::Small,
                copy: 1,
                triangle: fkb,
            },
        ]
    }

    /// All six pieces in their home position
    pub fn pieces(&self) -> Vec<Piece> {
        Silhouette::Rectangle.arrange(self)
    }
}

/// Rearrangements of the six pieces. The lower half stays put and a
/// rigid motion of it supplies the second copy of every piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Silhouette {
    /// Half turn about the center O
    Rectangle,
    /// Reflection across the diagonal AC
    Kite,
    /// Reflection across AB; isosceles with sides 5, 5, 6
    TallTriangle,
    /// Reflection across BC; isosceles with sides 5, 5, 8
    WideTriangle,
    /// Half turn about the midpoint of BC
    Parallelogram,
}

impl Silhouette {
    pub const ALL: [Silhouette; 5] = [
        Silhouette::Rectangle,
        Silhouette::Kite,
        Silhouette::TallTriangle,
        Silhouette::WideTriangle,
        Silhouette::Parallelogram,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Silhouette::Rectangle => "rectangle",
            Silhouette::Kite => "kite",
            Silhouette::TallTriangle => "tall triangle",
            Silhouette::WideTriangle => "wide triangle",
            Silhouette::Parallelogram => "parallelogram",
        }
    }

    fn place(self, rect: &EgyptianRectangle, p: Point) -> Point {
        match self {
            Silhouette::Rectangle => rotated_point(p, rect.center(), PI),
            Silhouette::Kite => reflected_point(p, rect.a, rect.c),
            Silhouette::TallTriangle => reflected_point(p, rect.a, rect.b),
            Silhouette::WideTriangle => reflected_point(p, rect.b, rect.c),
            Silhouette::Parallelogram => rotated_point(p, midpoint(rect.b, rect.c), PI),
        }
    }

    /// Outer boundary, counter-clockwise
    pub fn outline(self, rect: &EgyptianRectangle) -> Vec<Point> {
        let (a, b, c) = (rect.a, rect.b, rect.c);
        match self {
            Silhouette::Rectangle => rect.corners().to_vec(),
            Silhouette::Kite => vec![a, b, c, self.place(rect, b)],
            Silhouette::TallTriangle => vec![a, self.place(rect, c), c],
            Silhouette::WideTriangle => vec![a, self.place(rect, a), c],
            Silhouette::Parallelogram => vec![a, b, self.place(rect, a), c],
        }
    }

    /// Lower pieces followed by their placed second copies
    pub fn arrange(self, rect: &EgyptianRectangle) -> Vec<Piece> {
        let lower = rect.lower_pieces();
        let mut pieces = lower.to_vec();
        pieces.extend(lower.iter().map(|piece| Piece {
            copy: 2,
            ..piece.map(|p| self.place(rect, p))
        }));
        pieces
    }
}
