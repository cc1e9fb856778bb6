// File: crates/stream-core/src/axis.rs
// Summary: Axis builders producing scene groups (domain line, tick marks, labels).

use crate::geometry::Path;
use crate::scene::{Group, LineNode, PathNode, Stroke, TextAnchor, TextNode, TextStyle};
use crate::types::AxisStyle;

// Half-pixel shift keeps 1px strokes crisp.
const CRISP: f64 = 0.5;
const LEFT_LABEL_DY_EM: f64 = 0.32;

/// A tick at pixel position `pos` along the axis, with its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

impl Tick {
    pub fn new(pos: f64, label: impl Into<String>) -> Self {
        Self { pos, label: label.into() }
    }
}

fn label_style(style: &AxisStyle, anchor: TextAnchor) -> TextStyle {
    TextStyle {
        font_size: style.font_size,
        font_weight: style.font_weight,
        anchor,
        fill: style.tick_stroke,
    }
}

/// Horizontal axis with ticks hanging below the domain line.
/// `range` is the pixel extent of the scale; the group sits at the origin.
pub fn bottom_axis(ticks: &[Tick], range: (f64, f64), style: &AxisStyle) -> Group {
    let mut g = Group::at(0.0, 0.0).class("axis");
    let size = style.tick_size;

    let mut domain = Path::new();
    domain.move_to(range.0 + CRISP, size);
    domain.line_to(range.0 + CRISP, CRISP);
    domain.line_to(range.1 + CRISP, CRISP);
    domain.line_to(range.1 + CRISP, size);
    g.push(PathNode {
        class: Some("domain"),
        path: domain,
        fill: None,
        stroke: Some(Stroke::new(style.domain_stroke, style.stroke_width)),
        series: None,
    });

    for t in ticks {
        let mut tick = Group::at(t.pos + CRISP, 0.0).class("tick");
        tick.push(LineNode {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: size,
            stroke: Stroke::new(style.tick_stroke, style.stroke_width),
        });
        tick.push(TextNode {
            x: 0.0,
            y: size.max(0.0) + style.tick_padding,
            dy_em: style.label_dy_em,
            text: t.label.clone(),
            style: label_style(style, TextAnchor::Middle),
        });
        g.push(tick);
    }
    g
}

/// Vertical axis with ticks extending left of the domain line.
pub fn left_axis(ticks: &[Tick], range: (f64, f64), style: &AxisStyle) -> Group {
    let mut g = Group::at(0.0, 0.0).class("axis");
    let size = style.tick_size;

    let mut domain = Path::new();
    domain.move_to(-size, range.0 + CRISP);
    domain.line_to(CRISP, range.0 + CRISP);
    domain.line_to(CRISP, range.1 + CRISP);
    domain.line_to(-size, range.1 + CRISP);
    g.push(PathNode {
        class: Some("domain"),
        path: domain,
        fill: None,
        stroke: Some(Stroke::new(style.domain_stroke, style.stroke_width)),
        series: None,
    });

    for t in ticks {
        let mut tick = Group::at(0.0, t.pos + CRISP).class("tick");
        tick.push(LineNode {
            x1: 0.0,
            y1: 0.0,
            x2: -size,
            y2: 0.0,
            stroke: Stroke::new(style.tick_stroke, style.stroke_width),
        });
        tick.push(TextNode {
            x: -(size.max(0.0) + style.tick_padding),
            y: 0.0,
            dy_em: LEFT_LABEL_DY_EM,
            text: t.label.clone(),
            style: label_style(style, TextAnchor::End),
        });
        g.push(tick);
    }
    g
}
