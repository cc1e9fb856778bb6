// File: crates/stream-core/src/scene.rs
// Summary: Retained scene description produced by the renderers; backend-neutral.

use crate::catalog::SeriesId;
use crate::color::Rgba;
use crate::geometry::{Path, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: Option<u16>,
    pub anchor: TextAnchor,
    pub fill: Rgba,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_size: 10.0, font_weight: None, anchor: TextAnchor::Start, fill: Rgba::BLACK }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Group {
    pub class: Option<&'static str>,
    pub translate: (f64, f64),
    pub children: Vec<Node>,
}

impl Group {
    pub fn at(x: f64, y: f64) -> Self {
        Self { class: None, translate: (x, y), children: Vec::new() }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

/// A filled and/or stroked path. `series` marks the hover region of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub class: Option<&'static str>,
    pub path: Path,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
    pub series: Option<SeriesId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub class: Option<&'static str>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    /// Baseline shift in ems of the font size.
    pub dy_em: f64,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Path(PathNode),
    Rect(RectNode),
    Line(LineNode),
    Text(TextNode),
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Node::Group(g)
    }
}

impl From<PathNode> for Node {
    fn from(p: PathNode) -> Self {
        Node::Path(p)
    }
}

impl From<RectNode> for Node {
    fn from(r: RectNode) -> Self {
        Node::Rect(r)
    }
}

impl From<LineNode> for Node {
    fn from(l: LineNode) -> Self {
        Node::Line(l)
    }
}

impl From<TextNode> for Node {
    fn from(t: TextNode) -> Self {
        Node::Text(t)
    }
}

impl Node {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Node::Group(g) => g.class,
            Node::Path(p) => p.class,
            Node::Rect(r) => r.class,
            Node::Line(_) | Node::Text(_) => None,
        }
    }
}

/// Hover region of one series, in surface coordinates via `origin`.
#[derive(Clone, Copy, Debug)]
pub struct Region<'a> {
    pub series: SeriesId,
    pub path: &'a Path,
    pub fill: Option<Rgba>,
    pub origin: Point,
}

/// A complete drawable surface.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<Node>,
}

impl Scene {
    /// A cleared surface of the given size.
    pub fn empty(width: f64, height: f64) -> Self {
        Self { width, height, nodes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first visit of every node with its accumulated translation.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Node, Point)) {
        fn go<'a>(nodes: &'a [Node], origin: Point, f: &mut impl FnMut(&'a Node, Point)) {
            for n in nodes {
                f(n, origin);
                if let Node::Group(g) = n {
                    go(&g.children, origin.offset(g.translate.0, g.translate.1), f);
                }
            }
        }
        go(&self.nodes, Point::default(), &mut f);
    }

    /// Number of nodes (at any depth) carrying `class`.
    pub fn count_class(&self, class: &str) -> usize {
        let mut n = 0;
        self.walk(|node, _| {
            if node.class() == Some(class) {
                n += 1;
            }
        });
        n
    }

    /// Every node with `class`, in document order.
    pub fn find_class(&self, class: &str) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(|node, _| {
            if node.class() == Some(class) {
                out.push(node);
            }
        });
        out
    }

    /// Series hover regions in drawing order.
    pub fn regions(&self) -> Vec<Region<'_>> {
        let mut out = Vec::new();
        self.walk(|node, origin| {
            if let Node::Path(p) = node {
                if let Some(series) = p.series {
                    out.push(Region { series, path: &p.path, fill: p.fill, origin });
                }
            }
        });
        out
    }

    /// Topmost region containing `p` (surface coordinates).
    pub fn hit_test(&self, p: Point) -> Option<SeriesId> {
        self.regions()
            .iter()
            .rev()
            .find(|r| r.path.contains(Point::new(p.x - r.origin.x, p.y - r.origin.y)))
            .map(|r| r.series)
    }

    /// Every text label (at any depth), in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(|node, _| {
            if let Node::Text(t) = node {
                out.push(t.text.as_str());
            }
        });
        out
    }
}
