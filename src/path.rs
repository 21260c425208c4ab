//! Path representation and commands.

use euclid::default::Box2D;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::math_utils::Point;

/// A path command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCmd {
    /// Move to a point (starts a new subpath).
    MoveTo(Point),
    /// Line to a point.
    LineTo(Point),
    /// Circular arc. Positive sweep runs counter-clockwise.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
    /// Close the current subpath.
    Close,
}

/// Point on the circle of `radius` around `center` at `angle`
pub fn arc_point(center: Point, radius: f64, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    Point::new(center.x + radius * c, center.y + radius * s)
}

/// An ordered list of path commands forming one polygon or curve.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    /// Closed polygon through `points`, in the order given
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::polyline(points);
        if !path.is_empty() {
            path.close();
        }
        path
    }

    /// Open polyline through `points`
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
        }
        path
    }

    pub fn segment(a: Point, b: Point) -> Self {
        Self::polyline(&[a, b])
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        let mut path = Self::new();
        path.arc(center, radius, 0.0, TAU);
        path.close();
        path
    }

    /// Open arc from `start_angle` sweeping by `sweep_angle`
    pub fn arc_between(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> Self {
        let mut path = Self::new();
        path.arc(center, radius, start_angle, sweep_angle);
        path
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo(p));
    }

    /// Arc around `center`. Joined to the current point by a straight
    /// segment, or starting a new subpath when there is none.
    pub fn arc(&mut self, center: Point, radius: f64, start_angle: f64, sweep_angle: f64) {
        self.cmds.push(PathCmd::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// True when the last command closes the subpath
    pub fn is_closed(&self) -> bool {
        matches!(self.cmds.last(), Some(PathCmd::Close))
    }

    /// Points visited by move-to, line-to and arc endpoints, in order
    pub fn vertices(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => out.push(p),
                PathCmd::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    out.push(arc_point(center, radius, start_angle));
                    out.push(arc_point(center, radius, start_angle + sweep_angle));
                }
                PathCmd::Close => {}
            }
        }
        out
    }

    /// Vertex ring of a closed path with the start repeated at the end.
    /// Open paths return their vertices unchanged.
    pub fn ring(&self) -> Vec<Point> {
        let mut ring = self.vertices();
        if self.is_closed() {
            if let Some(first) = ring.first().copied() {
                if ring.last() != Some(&first) {
                    ring.push(first);
                }
            }
        }
        ring
    }

    /// Bounding box of everything the path can touch, arcs included
    pub fn bounds(&self) -> Option<Box2D<f64>> {
        const ARC_SAMPLES: usize = 32;

        let mut points = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => points.push(p),
                PathCmd::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    points.extend((0..=ARC_SAMPLES).map(|i| {
                        let t = i as f64 / ARC_SAMPLES as f64;
                        arc_point(center, radius, start_angle + sweep_angle * t)
                    }));
                }
                PathCmd::Close => {}
            }
        }
        if points.is_empty() {
            None
        } else {
            Some(Box2D::from_points(points))
        }
    }
}
