// File: crates/stream-core/src/legend.rs
// Summary: Static colour legend, listed top-down in reverse stacking order.

use crate::catalog::SeriesCatalog;
use crate::scene::{Group, RectNode, TextAnchor, TextNode, TextStyle};
use crate::types::LegendLayout;

const LABEL_DY_EM: f64 = 0.35;

/// Legend group at `(x, y)`. The top entry is the last stacked series, which
/// matches the visual order of the layers.
pub fn legend(catalog: &SeriesCatalog, layout: &LegendLayout, x: f64, y: f64) -> Group {
    let mut g = Group::at(x, y).class("legend");
    for (row, id) in catalog.ids().rev().enumerate() {
        let mut item = Group::at(0.0, row as f64 * layout.row_height).class("legend-item");
        item.push(RectNode {
            class: Some("legend-swatch"),
            x: 0.0,
            y: 0.0,
            width: layout.swatch,
            height: layout.swatch,
            fill: catalog.color(id),
        });
        item.push(TextNode {
            x: layout.label_x,
            y: layout.swatch / 2.0,
            dy_em: LABEL_DY_EM,
            text: catalog.name(id).to_string(),
            style: TextStyle { font_size: layout.font_size, anchor: TextAnchor::Start, ..TextStyle::default() },
        });
        g.push(item);
    }
    g
}
