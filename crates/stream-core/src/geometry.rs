// File: crates/stream-core/src/geometry.rs
// Summary: Lightweight geometry helpers: points, path commands, SVG path data, hit-testing.

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic bezier: two control points then the end point.
    CubicTo(Point, Point, Point),
    Close,
}

/// Backend-neutral path, recorded as commands.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.cmds.push(PathCmd::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.cmds.push(PathCmd::LineTo(Point::new(x, y)));
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.cmds.push(PathCmd::CubicTo(Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y)));
    }

    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.cmds.len() * 24);
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    let _ = write!(d, "M{},{}", fmt_num(p.x), fmt_num(p.y));
                }
                PathCmd::LineTo(p) => {
                    let _ = write!(d, "L{},{}", fmt_num(p.x), fmt_num(p.y));
                }
                PathCmd::CubicTo(c1, c2, p) => {
                    let _ = write!(
                        d,
                        "C{},{},{},{},{},{}",
                        fmt_num(c1.x),
                        fmt_num(c1.y),
                        fmt_num(c2.x),
                        fmt_num(c2.y),
                        fmt_num(p.x),
                        fmt_num(p.y)
                    );
                }
                PathCmd::Close => d.push('Z'),
            }
        }
        d
    }

    /// Approximate every subpath by a polyline, `steps` segments per cubic.
    pub fn flatten(&self, steps: usize) -> Vec<Vec<Point>> {
        let steps = steps.max(1);
        let mut out: Vec<Vec<Point>> = Vec::new();
        let mut cur: Vec<Point> = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    if cur.len() > 1 {
                        out.push(std::mem::take(&mut cur));
                    }
                    cur.clear();
                    cur.push(p);
                }
                PathCmd::LineTo(p) => cur.push(p),
                PathCmd::CubicTo(c1, c2, p) => {
                    let p0 = cur.last().copied().unwrap_or(c1);
                    for s in 1..=steps {
                        let t = s as f64 / steps as f64;
                        cur.push(cubic_point(p0, c1, c2, p, t));
                    }
                }
                PathCmd::Close => {
                    if cur.len() > 1 {
                        out.push(std::mem::take(&mut cur));
                    }
                }
            }
        }
        if cur.len() > 1 {
            out.push(cur);
        }
        out
    }

    /// Even-odd containment test over the flattened outline.
    pub fn contains(&self, p: Point) -> bool {
        self.flatten(16).iter().filter(|poly| polygon_contains(poly, p)).count() % 2 == 1
    }

    /// `(min, max)` corners of all recorded points, control points included.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut grow = |p: Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => grow(p),
                PathCmd::CubicTo(a, b, p) => {
                    grow(a);
                    grow(b);
                    grow(p);
                }
                PathCmd::Close => {}
            }
        }
        if min.x.is_finite() { Some((min, max)) } else { None }
    }
}

fn cubic_point(p0: Point, c1: Point, c2: Point, p: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p.x,
        a * p0.y + b * c1.y + c * c2.y + d * p.y,
    )
}

/// Ray-casting point-in-polygon; the polygon is implicitly closed.
pub fn polygon_contains(poly: &[Point], p: Point) -> bool {
    let mut inside = false;
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Compact number formatting for SVG output: at most three decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        // avoid "-0"
        return format!("{}", rounded as i64);
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
