// File: crates/stream-core/src/svg.rs
// Summary: SVG serialisation of scenes.

use std::fmt::Write as _;

use crate::geometry::fmt_num;
use crate::scene::{Node, Scene, TextStyle};

impl Scene {
    /// Standalone SVG document for this scene.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );
        for node in &self.nodes {
            write_node(&mut out, node);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn class_attr(class: Option<&str>) -> String {
    class.map(|c| format!(r#" class="{c}""#)).unwrap_or_default()
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group(g) => {
            let _ = write!(out, "<g{}", class_attr(g.class));
            if g.translate != (0.0, 0.0) {
                let _ = write!(out, r#" transform="translate({},{})""#, fmt_num(g.translate.0), fmt_num(g.translate.1));
            }
            out.push('>');
            for child in &g.children {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
        Node::Path(p) => {
            let _ = write!(out, r#"<path{} d="{}""#, class_attr(p.class), p.path.to_svg_d());
            match p.fill {
                Some(c) => {
                    let _ = write!(out, r#" fill="{}""#, c.to_hex());
                    if !c.is_opaque() {
                        let _ = write!(out, r#" fill-opacity="{}""#, fmt_num(c.opacity() as f64));
                    }
                }
                None => out.push_str(r#" fill="none""#),
            }
            if let Some(s) = p.stroke {
                let _ = write!(out, r#" stroke="{}" stroke-width="{}""#, s.color.to_hex(), fmt_num(s.width));
            }
            if let Some(id) = p.series {
                let _ = write!(out, r#" data-series="{}""#, id.index());
            }
            out.push_str("/>");
        }
        Node::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect{} x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                class_attr(r.class),
                fmt_num(r.x),
                fmt_num(r.y),
                fmt_num(r.width),
                fmt_num(r.height),
                r.fill.to_hex()
            );
        }
        Node::Line(l) => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt_num(l.x1),
                fmt_num(l.y1),
                fmt_num(l.x2),
                fmt_num(l.y2),
                l.stroke.color.to_hex(),
                fmt_num(l.stroke.width)
            );
        }
        Node::Text(t) => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" dy="{}em"{}>{}</text>"#,
                fmt_num(t.x),
                fmt_num(t.y),
                fmt_num(t.dy_em),
                text_attrs(&t.style),
                escape_xml(&t.text)
            );
        }
    }
}

fn text_attrs(style: &TextStyle) -> String {
    let mut s = format!(
        r#" font-size="{}" text-anchor="{}" fill="{}""#,
        fmt_num(style.font_size),
        style.anchor.as_str(),
        style.fill.to_hex()
    );
    if let Some(w) = style.font_weight {
        let _ = write!(s, r#" font-weight="{w}""#);
    }
    s
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
