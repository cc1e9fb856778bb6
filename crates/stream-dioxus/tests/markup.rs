// File: crates/stream-dioxus/tests/markup.rs
// Purpose: Host markup follows the chart and tooltip state without a window.

use stream_core::{InteractiveStreamGraph, Point, SeriesCatalog};
use stream_dioxus::{container_point, markup, sample_rows};

#[test]
fn sample_rows_cover_every_series_monthly() {
    let catalog = SeriesCatalog::default();
    let rows = sample_rows(&catalog, 12);
    assert_eq!(rows.len(), 12);
    for row in &rows {
        for name in catalog.names() {
            assert!(row.value_or_zero(name) > 0.0, "{name} should be positive");
        }
    }
    assert_eq!(rows[11].date.date().to_string(), "2024-12-01");
    assert_eq!(sample_rows(&catalog, 12), rows);
}

#[test]
fn panel_hidden_until_hover_then_follows_pointer() {
    let catalog = SeriesCatalog::default();
    let mut chart = InteractiveStreamGraph::default();
    chart.update(&sample_rows(&catalog, 12));

    let idle = markup(&chart);
    assert_eq!(idle.container_style, "position:relative; width:600px; height:500px;");
    assert!(idle.chart_svg.contains("class=\"stream\""));
    assert!(idle.panel_style.contains("visibility:hidden"));
    assert!(idle.tooltip_svg.is_empty());

    // scan down the middle of the plot until a stream is hit
    let y = (20..440)
        .step_by(2)
        .map(f64::from)
        .find(|&y| chart.pointer_at(Point::new(230.0, y)).is_some())
        .expect("some stream crosses the centre column");
    let shown = markup(&chart);
    assert!(shown.panel_style.contains("visibility:visible"));
    assert!(shown.panel_style.contains(&format!("left:230px; top:{}px;", y + 12.0)));
    assert!(shown.tooltip_svg.contains("class=\"bar\""));

    chart.pointer_exit();
    assert!(markup(&chart).panel_style.contains("visibility:hidden"));
}

#[test]
fn scrolled_container_shifts_the_pointer_position() {
    let catalog = SeriesCatalog::default();
    let mut chart = InteractiveStreamGraph::default();
    chart.update(&sample_rows(&catalog, 12));

    // container at (100, 50) in client space; pointer 10px into the left margin
    let client = (110.0, 250.0);
    assert_eq!(container_point(client, (100.0, 50.0)), Point::new(10.0, 200.0));
    assert_eq!(chart.pointer_at(container_point(client, (100.0, 50.0))), None);

    // after scrolling the container 150px left, the same client point is over the plot
    let scrolled = container_point(client, (-50.0, 50.0));
    assert_eq!(scrolled, Point::new(160.0, 200.0));
    let y = (20..440)
        .step_by(2)
        .map(f64::from)
        .find(|&y| chart.pointer_at(container_point((110.0, y + 50.0), (-50.0, 50.0))).is_some())
        .expect("some stream crosses x=160");
    assert!(markup(&chart).panel_style.contains(&format!("left:160px; top:{}px;", y + 12.0)));
}
