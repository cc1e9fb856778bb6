// File: crates/stream-core/tests/render.rs
// Purpose: Scene structure of the main chart: regions, colours, axis, legend, empty input.

use chrono::NaiveDate;
use stream_core::scene::Node;
use stream_core::{Rgba, Row, SeriesCatalog, StreamGraph};

fn monthly_rows() -> Vec<Row> {
    (1..=12)
        .map(|m| {
            let f = m as f64;
            Row::on(NaiveDate::from_ymd_opt(2024, m, 1).unwrap())
                .with("GPT-4", 50.0 + 5.0 * f)
                .with("Gemini", 20.0 + f * f / 4.0)
                .with("PaLM-2", (30.0 - 2.0 * f).max(0.0))
                .with("Claude", 15.0 + 3.0 * f)
                .with("LLaMA-3.1", 10.0 + (f * 0.7).sin() * 8.0)
        })
        .collect()
}

fn legend_labels(scene: &stream_core::Scene) -> Vec<String> {
    let mut out = Vec::new();
    for node in scene.find_class("legend-item") {
        if let Node::Group(g) = node {
            for child in &g.children {
                if let Node::Text(t) = child {
                    out.push(t.text.clone());
                }
            }
        }
    }
    out
}

#[test]
fn one_region_per_series_in_catalog_colours() {
    let graph = StreamGraph::default();
    let frame = graph.render(&monthly_rows());
    let regions = frame.scene.regions();
    assert_eq!(regions.len(), graph.catalog().len());
    for (i, r) in regions.iter().enumerate() {
        assert_eq!(r.series.index(), i, "regions follow catalog order");
        assert_eq!(r.fill, Some(graph.catalog().color(r.series)));
        assert!(!r.path.is_empty());
    }
    assert_eq!(regions[0].fill, Some(Rgba::from_hex("#e41a1c").unwrap()));
    assert_eq!(regions[4].fill, Some(Rgba::from_hex("#ff7f00").unwrap()));
}

#[test]
fn surface_has_fixed_size_and_margins() {
    let frame = StreamGraph::default().render(&monthly_rows());
    assert_eq!((frame.scene.width, frame.scene.height), (600.0, 500.0));
    let regions = frame.scene.regions();
    assert_eq!((regions[0].origin.x, regions[0].origin.y), (80.0, 20.0));
    let (min, max) = regions.iter().filter_map(|r| r.path.bounds()).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), (a, b)| (lo.min(a.y), hi.max(b.y)),
    );
    // smoothed layers stay inside the plot area
    assert!(min >= -1e-6, "top {min}");
    assert!(max <= 420.0 + 1e-6, "bottom {max}");
    assert!(max - min > 200.0, "layers should use most of the height");
}

#[test]
fn legend_is_reverse_catalog_order() {
    let frame = StreamGraph::default().render(&monthly_rows());
    assert_eq!(legend_labels(&frame.scene), ["LLaMA-3.1", "Claude", "PaLM-2", "Gemini", "GPT-4"]);

    let custom = SeriesCatalog::from_hex([("A", "#111"), ("B", "#222"), ("C", "#333"), ("D", "#444"), ("E", "#555")]).unwrap();
    let rows: Vec<Row> = monthly_rows().into_iter().map(|r| Row::new(r.date).with("A", 1.0).with("E", 2.0)).collect();
    let frame = StreamGraph::new(custom, Default::default()).render(&rows);
    assert_eq!(legend_labels(&frame.scene), ["E", "D", "C", "B", "A"]);

    // swatches carry the catalog colours in the same reversed order
    let swatches: Vec<Rgba> = frame
        .scene
        .find_class("legend-swatch")
        .into_iter()
        .filter_map(|n| if let Node::Rect(r) = n { Some(r.fill) } else { None })
        .collect();
    assert_eq!(swatches[0], Rgba::rgb(0x55, 0x55, 0x55));
    assert_eq!(swatches[4], Rgba::rgb(0x11, 0x11, 0x11));
}

#[test]
fn axis_labels_are_month_abbreviations() {
    let frame = StreamGraph::default().render(&monthly_rows());
    assert_eq!(frame.scene.count_class("axis"), 1);
    assert_eq!(frame.scene.count_class("tick"), 12);
    let texts = frame.scene.texts();
    for m in ["Jan", "Feb", "Jun", "Dec"] {
        assert!(texts.contains(&m), "missing tick label {m}");
    }
}

#[test]
fn empty_input_draws_nothing() {
    let frame = StreamGraph::default().render(&[]);
    assert!(frame.is_empty());
    assert!(frame.scene.is_empty());
    assert_eq!(frame.scene.regions().len(), 0);
    assert_eq!(frame.scene.count_class("axis"), 0);
    assert_eq!(frame.scene.count_class("legend"), 0);
}

#[test]
fn unknown_series_are_ignored_and_rendering_is_idempotent() {
    let mut rows = monthly_rows();
    for r in &mut rows {
        r.set("Mistral", 1_000.0);
    }
    let graph = StreamGraph::default();
    let with_extra = graph.render(&rows);
    let plain = graph.render(&monthly_rows());
    assert_eq!(with_extra.scene, plain.scene);
    assert_eq!(graph.render(&rows).scene, with_extra.scene);
}

#[test]
fn single_row_still_renders_every_region() {
    let rows = vec![Row::on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).with("Claude", 3.0)];
    let frame = StreamGraph::default().render(&rows);
    assert_eq!(frame.scene.regions().len(), 5);
    assert!(frame.context.is_some());
}
