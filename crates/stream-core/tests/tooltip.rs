// File: crates/stream-core/tests/tooltip.rs
// Purpose: Tooltip state machine, mini chart content and hit-tested pointer dispatch.

use chrono::NaiveDate;
use stream_core::scene::Node;
use stream_core::{InteractiveStreamGraph, Point, PointerEvent, Row, SeriesId, TooltipState};

fn rows() -> Vec<Row> {
    (1..=6)
        .map(|m| {
            let f = m as f64;
            Row::on(NaiveDate::from_ymd_opt(2024, m, 1).unwrap())
                .with("GPT-4", 10.0 * f)
                .with("Gemini", 60.0 - 5.0 * f)
                .with("PaLM-2", 7.0)
                .with("Claude", 4.0 * f)
                .with("LLaMA-3.1", 12.0)
        })
        .collect()
}

fn flat_rows() -> Vec<Row> {
    (1..=3)
        .map(|m| {
            ["GPT-4", "Gemini", "PaLM-2", "Claude", "LLaMA-3.1"]
                .iter()
                .fold(Row::on(NaiveDate::from_ymd_opt(2024, m, 1).unwrap()), |r, n| r.with(*n, 10.0))
        })
        .collect()
}

fn bar_heights(graph: &InteractiveStreamGraph) -> Vec<f64> {
    graph
        .tooltip()
        .content()
        .expect("tooltip content")
        .find_class("bar")
        .into_iter()
        .filter_map(|n| if let Node::Rect(r) = n { Some(r.height) } else { None })
        .collect()
}

fn graph_with(rows: &[Row]) -> InteractiveStreamGraph {
    let mut g = InteractiveStreamGraph::default();
    g.update(rows);
    g
}

#[test]
fn starts_hidden() {
    let g = graph_with(&rows());
    assert_eq!(g.tooltip().state(), TooltipState::Hidden);
    assert!(!g.tooltip().is_visible());
    assert!(g.tooltip().content().is_none());
}

#[test]
fn moving_within_a_region_repositions_without_rebuilding() {
    let mut g = graph_with(&rows());
    let s = SeriesId(0);
    g.handle(PointerEvent::Enter { series: s, at: Point::new(100.0, 200.0) });
    assert_eq!(g.tooltip().state(), TooltipState::Shown(s));
    assert!(g.tooltip().is_visible());
    assert_eq!((g.tooltip().view().left, g.tooltip().view().top), (100.0, 212.0));
    let before = g.tooltip().content().cloned();
    let heights = bar_heights(&g);
    assert_eq!(heights.len(), 6);

    for i in 1..=5 {
        let at = Point::new(100.0 + i as f64 * 3.0, 200.0 - i as f64);
        g.handle(PointerEvent::Move { series: s, at });
        assert_eq!(g.tooltip().view().left, at.x);
        assert_eq!(g.tooltip().view().top, at.y + 12.0);
    }
    assert_eq!(g.tooltip().rebuilds(), 1);
    assert_eq!(g.tooltip().content().cloned(), before);
    assert_eq!(bar_heights(&g), heights);

    // re-entering the pinned series does not rebuild either
    g.handle(PointerEvent::Enter { series: s, at: Point::new(1.0, 1.0) });
    assert_eq!(g.tooltip().rebuilds(), 1);
}

#[test]
fn switching_series_rebuilds_content() {
    let mut g = graph_with(&rows());
    g.handle(PointerEvent::Enter { series: SeriesId(0), at: Point::new(50.0, 50.0) });
    let gpt = g.tooltip().content().cloned();
    g.handle(PointerEvent::Enter { series: SeriesId(1), at: Point::new(55.0, 60.0) });
    assert_eq!(g.tooltip().state(), TooltipState::Shown(SeriesId(1)));
    assert_eq!(g.tooltip().rebuilds(), 2);
    assert_ne!(g.tooltip().content().cloned(), gpt);

    // Gemini's bars use Gemini's colour
    let content = g.tooltip().content().unwrap();
    let colour = g.context().unwrap().catalog.color(SeriesId(1));
    for n in content.find_class("bar") {
        if let Node::Rect(r) = n {
            assert_eq!(r.fill, colour);
        }
    }
}

#[test]
fn leaving_hides_and_unpins() {
    let mut g = graph_with(&rows());
    g.handle(PointerEvent::Enter { series: SeriesId(2), at: Point::new(10.0, 10.0) });
    g.handle(PointerEvent::Leave);
    assert_eq!(g.tooltip().state(), TooltipState::Hidden);
    assert_eq!(g.tooltip().pinned(), None);
    assert!(!g.tooltip().is_visible());

    // coming back to the same series rebuilds, since the pin was cleared
    g.handle(PointerEvent::Enter { series: SeriesId(2), at: Point::new(10.0, 10.0) });
    assert_eq!(g.tooltip().rebuilds(), 2);
}

#[test]
fn mini_chart_is_self_normalised() {
    let mut g = graph_with(&rows());
    g.handle(PointerEvent::Enter { series: SeriesId(0), at: Point::default() });
    let heights = bar_heights(&g);
    // GPT-4 peaks at 60 in June: that bar fills the 140px plot height
    assert!((heights[5] - 140.0).abs() < 1e-9);
    assert!((heights[0] - 140.0 / 6.0).abs() < 1e-9);

    g.handle(PointerEvent::Enter { series: SeriesId(2), at: Point::default() });
    // PaLM-2 is constant: every bar reaches its own maximum
    assert!(bar_heights(&g).iter().all(|h| (h - 140.0).abs() < 1e-9));

    let content = g.tooltip().content().unwrap();
    assert_eq!((content.width, content.height), (280.0, 200.0));
    let widths: Vec<f64> = content
        .find_class("bar")
        .into_iter()
        .filter_map(|n| if let Node::Rect(r) = n { Some(r.width) } else { None })
        .collect();
    assert!(widths.iter().all(|w| (w - (205.0 / 6.0 - 2.0)).abs() < 1e-9));
    assert_eq!(content.count_class("axis"), 2);
}

#[test]
fn zero_series_draws_flat_bars() {
    let data: Vec<Row> = rows().into_iter().map(|r| Row::new(r.date).with("GPT-4", 1.0)).collect();
    let mut g = graph_with(&data);
    g.handle(PointerEvent::Enter { series: SeriesId(3), at: Point::default() });
    assert!(bar_heights(&g).iter().all(|h| *h == 0.0));
}

#[test]
fn update_clears_tooltip_and_empty_data_ignores_events() {
    let mut g = graph_with(&rows());
    g.handle(PointerEvent::Enter { series: SeriesId(1), at: Point::new(5.0, 5.0) });
    g.update(&rows());
    assert_eq!(g.tooltip().state(), TooltipState::Hidden);
    assert!(g.tooltip().content().is_none());

    g.update(&[]);
    assert!(g.scene().is_empty());
    g.handle(PointerEvent::Enter { series: SeriesId(1), at: Point::new(5.0, 5.0) });
    assert_eq!(g.tooltip().state(), TooltipState::Hidden);
    assert!(!g.tooltip().is_visible());
}

#[test]
fn move_without_enter_pins_the_series() {
    let mut g = graph_with(&rows());
    g.handle(PointerEvent::Move { series: SeriesId(4), at: Point::new(7.0, 8.0) });
    assert_eq!(g.tooltip().pinned(), Some(SeriesId(4)));
    assert!(g.tooltip().is_visible());
    assert_eq!(g.tooltip().rebuilds(), 1);
}

#[test]
fn hit_tested_pointer_drives_the_state_machine() {
    // Flat layers of 10: plot y domain [0, 50] -> [420, 0], plot origin (80, 20).
    let mut g = graph_with(&flat_rows());
    let bottom_layer = Point::new(230.0, 20.0 + 400.0);
    let top_layer = Point::new(230.0, 20.0 + 40.0);

    assert_eq!(g.pointer_at(bottom_layer), Some(SeriesId(0)));
    assert_eq!(g.tooltip().pinned(), Some(SeriesId(0)));

    assert_eq!(g.pointer_at(bottom_layer.offset(5.0, -2.0)), Some(SeriesId(0)));
    assert_eq!(g.tooltip().rebuilds(), 1);

    assert_eq!(g.pointer_at(top_layer), Some(SeriesId(4)));
    assert_eq!(g.tooltip().pinned(), Some(SeriesId(4)));
    assert_eq!(g.tooltip().rebuilds(), 2);

    // legend area is outside every region
    assert_eq!(g.pointer_at(Point::new(450.0, 30.0)), None);
    assert_eq!(g.tooltip().state(), TooltipState::Hidden);
    assert!(!g.tooltip().is_visible());
}

#[test]
fn pointer_exit_hides_panel() {
    let mut g = graph_with(&flat_rows());
    g.pointer_at(Point::new(230.0, 250.0));
    assert!(g.tooltip().is_visible());
    g.pointer_exit();
    assert!(!g.tooltip().is_visible());
    assert_eq!(g.tooltip().pinned(), None);
}

#[test]
fn series_outside_catalog_is_dropped() {
    let mut g = graph_with(&rows()[..1]);
    g.handle(PointerEvent::Enter { series: SeriesId(7), at: Point::default() });
    g.handle(PointerEvent::Move { series: SeriesId(7), at: Point::default() });
    assert_eq!(g.tooltip().state(), TooltipState::Hidden);
    assert!(g.tooltip().content().is_none());

    // a pinned series survives a stray id
    g.handle(PointerEvent::Enter { series: SeriesId(2), at: Point::new(4.0, 4.0) });
    g.handle(PointerEvent::Move { series: SeriesId(99), at: Point::new(9.0, 9.0) });
    assert_eq!(g.tooltip().pinned(), Some(SeriesId(2)));
    assert_eq!(g.tooltip().view().top, 16.0);
}
