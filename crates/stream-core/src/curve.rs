// File: crates/stream-core/src/curve.rs
// Summary: Curve interpolation (linear, uniform B-spline basis) and area path generation.

use crate::geometry::{Path, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Straight segments through every point.
    Linear,
    /// Uniform cubic B-spline; passes through the end points only.
    #[default]
    Basis,
}

impl Curve {
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::Basis => "basis",
        }
    }
}

/// Closed area between `top` (drawn forward) and `bottom` (drawn backward).
/// Both slices are in x order and have the same length.
pub fn area_path(top: &[Point], bottom: &[Point], curve: Curve) -> Path {
    let mut path = Path::new();
    if top.is_empty() {
        return path;
    }
    let mut line = LineState::Forward;
    trace(&mut path, top.iter().copied(), curve, &mut line);
    trace(&mut path, bottom.iter().rev().copied(), curve, &mut line);
    path
}

/// Open line through `points`.
pub fn line_path(points: &[Point], curve: Curve) -> Path {
    let mut path = Path::new();
    let mut line = LineState::Standalone;
    trace(&mut path, points.iter().copied(), curve, &mut line);
    path
}

// Tracks which edge of an area is being drawn. The first edge starts with a
// move; the return edge continues with a line and closes the outline.
#[derive(Clone, Copy, PartialEq, Eq)]
enum LineState {
    Standalone,
    Forward,
    Backward,
}

fn trace(path: &mut Path, points: impl Iterator<Item = Point>, curve: Curve, line: &mut LineState) {
    match curve {
        Curve::Linear => {
            let mut first = true;
            for p in points {
                if first && *line != LineState::Backward {
                    path.move_to(p.x, p.y);
                } else {
                    path.line_to(p.x, p.y);
                }
                first = false;
            }
        }
        Curve::Basis => {
            let mut b = Basis::new(*line == LineState::Backward);
            for p in points {
                b.point(path, p);
            }
            b.end(path);
        }
    }
    match *line {
        LineState::Forward => *line = LineState::Backward,
        LineState::Backward => {
            path.close();
            *line = LineState::Standalone;
        }
        LineState::Standalone => {}
    }
}

// Incremental uniform B-spline: every new point emits the bezier segment
// between the previous two knots.
struct Basis {
    continues: bool,
    count: u8,
    p0: Point,
    p1: Point,
}

impl Basis {
    fn new(continues: bool) -> Self {
        Self { continues, count: 0, p0: Point::default(), p1: Point::default() }
    }

    fn point(&mut self, path: &mut Path, p: Point) {
        match self.count {
            0 => {
                self.count = 1;
                if self.continues {
                    path.line_to(p.x, p.y);
                } else {
                    path.move_to(p.x, p.y);
                }
            }
            1 => self.count = 2,
            2 => {
                self.count = 3;
                path.line_to((5.0 * self.p0.x + self.p1.x) / 6.0, (5.0 * self.p0.y + self.p1.y) / 6.0);
                self.segment(path, p);
            }
            _ => self.segment(path, p),
        }
        self.p0 = self.p1;
        self.p1 = p;
    }

    fn end(&mut self, path: &mut Path) {
        match self.count {
            3 => {
                let last = self.p1;
                self.segment(path, last);
                path.line_to(last.x, last.y);
            }
            2 => path.line_to(self.p1.x, self.p1.y),
            _ => {}
        }
    }

    fn segment(&self, path: &mut Path, p: Point) {
        let (a, b) = (self.p0, self.p1);
        path.cubic_to(
            (2.0 * a.x + b.x) / 3.0,
            (2.0 * a.y + b.y) / 3.0,
            (a.x + 2.0 * b.x) / 3.0,
            (a.y + 2.0 * b.y) / 3.0,
            (a.x + 4.0 * b.x + p.x) / 6.0,
            (a.y + 4.0 * b.y + p.y) / 6.0,
        );
    }
}
