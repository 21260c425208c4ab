/// Planar geometry helpers used to derive puzzle vertices
///
/// All helpers are closed-form and never fail. Degenerate input (zero total
/// weight, a segment whose endpoints coincide) produces non-finite
/// coordinates, which callers pass through unchanged.
use euclid::default::Point2D;

/// A point in puzzle space. The y axis grows upward.
pub type Point = Point2D<f64>;

/// Weighted average of `p` and `q`: `(wp * p + wq * q) / (wp + wq)`
///
/// Equal weights give the midpoint; weights `1, 3` give the point a quarter
/// of the way from `q` to `p`.
pub fn weighted_point<T>(p: Point2D<T>, q: Point2D<T>, wp: T, wq: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    let total = wp + wq;
    Point2D::new((p.x * wp + q.x * wq) / total, (p.y * wp + q.y * wq) / total)
}

/// Midpoint of the segment `p q`
pub fn midpoint<T>(p: Point2D<T>, q: Point2D<T>) -> Point2D<T>
where
    T: num_traits::Float,
{
    weighted_point(p, q, T::one(), T::one())
}

/// Point reached by walking from `p` towards `q` by `s` times their distance
///
/// `s = 0` gives `p`, `s = 1` gives `q`, `s = -1` mirrors `q` through `p`.
pub fn scaled_point<T>(p: Point2D<T>, q: Point2D<T>, s: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    Point2D::new(p.x + (q.x - p.x) * s, p.y + (q.y - p.y) * s)
}

/// Rotate `p` about `pivot` by `angle` radians (counter-clockwise)
pub fn rotated_point<T>(p: Point2D<T>, pivot: Point2D<T>, angle: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    let (sa, ca) = angle.sin_cos();
    Point2D::new(pivot.x + dx * ca - dy * sa, pivot.y + dx * sa + dy * ca)
}

/// Mirror `p` across the line through `a` and `b`
pub fn reflected_point<T>(p: Point2D<T>, a: Point2D<T>, b: Point2D<T>) -> Point2D<T>
where
    T: num_traits::Float,
{
    let foot = projected_point(p, a, b);
    Point2D::new(foot.x + foot.x - p.x, foot.y + foot.y - p.y)
}

/// Orthogonal projection of `p` onto the line through `a` and `b`
fn projected_point<T>(p: Point2D<T>, a: Point2D<T>, b: Point2D<T>) -> Point2D<T>
where
    T: num_traits::Float,
{
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / (dx * dx + dy * dy);
    Point2D::new(a.x + dx * t, a.y + dy * t)
}

/// Foot of the perpendicular dropped from `p` onto the line `a b`
///
/// Built as the midpoint between `p` and its mirror image, which is how the
/// booklet constructs it with ruler and compass.
pub fn altitude_foot<T>(p: Point2D<T>, a: Point2D<T>, b: Point2D<T>) -> Point2D<T>
where
    T: num_traits::Float,
{
    midpoint(p, reflected_point(p, a, b))
}

/// Calculate distance between two points
pub fn distance<T>(p1: Point2D<T>, p2: Point2D<T>) -> T
where
    T: num_traits::Float,
{
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Signed shoelace area; positive for counter-clockwise rings
pub fn polygon_area<T>(points: &[Point2D<T>]) -> T
where
    T: num_traits::Float,
{
    if points.len() < 3 {
        return T::zero();
    }
    let twice = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .fold(T::zero(), |acc, (p, q)| acc + p.x * q.y - q.x * p.y);
    twice / (T::one() + T::one())
}

/// Average of the vertices. For triangles this is the centroid.
pub fn centroid<T>(points: &[Point2D<T>]) -> Point2D<T>
where
    T: num_traits::Float,
{
    let n = T::from(points.len()).unwrap_or_else(T::one);
    let (sx, sy) = points
        .iter()
        .fold((T::zero(), T::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2D::new(sx / n, sy / n)
}

pub fn translated<T>(p: Point2D<T>, dx: T, dy: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    Point2D::new(p.x + dx, p.y + dy)
}

/// Direction of `to` seen from `from`, in radians
pub fn heading<T>(from: Point2D<T>, to: Point2D<T>) -> T
where
    T: num_traits::Float,
{
    (to.y - from.y).atan2(to.x - from.x)
}

/// Wrap an angle into `(-pi, pi]`
pub fn normalize_angle<T>(angle: T) -> T
where
    T: num_traits::Float + num_traits::FloatConst,
{
    let tau = T::TAU();
    let mut a = angle % tau;
    if a <= -T::PI() {
        a = a + tau;
    } else if a > T::PI() {
        a = a - tau;
    }
    a
}
