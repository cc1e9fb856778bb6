// File: crates/stream-dioxus/src/lib.rs
// Summary: Dioxus host for the interactive streamgraph (desktop only) plus the
//          feature-independent markup it mounts.
// Notes:
// - UI deps live behind the `desktop` feature; `markup` and `sample_rows` are always
//   available so the hosting logic can be exercised without a window.
// - Pointer handling is delegated to `InteractiveStreamGraph::pointer_at`, which
//   hit-tests the scene; the component only converts client coordinates.

use chrono::{Months, NaiveDate};
use stream_core::{InteractiveStreamGraph, Point, Row, SeriesCatalog};

/// Strings the component mounts for one state of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Markup {
    pub container_style: String,
    pub chart_svg: String,
    pub panel_style: String,
    /// Empty until a series has been hovered.
    pub tooltip_svg: String,
}

pub fn markup(chart: &InteractiveStreamGraph) -> Markup {
    let opts = chart.graph().options();
    let view = chart.tooltip().view();
    Markup {
        container_style: format!("position:relative; width:{}px; height:{}px;", opts.width, opts.height),
        chart_svg: chart.scene().to_svg(),
        panel_style: opts.panel.css(view.left, view.top, view.visible),
        tooltip_svg: view.content.as_ref().map(|s| s.to_svg()).unwrap_or_default(),
    }
}

/// Pointer position relative to the container whose client-space top-left is `origin`.
pub fn container_point(client: (f64, f64), origin: (f64, f64)) -> Point {
    Point::new(client.0 - origin.0, client.1 - origin.1)
}

/// Deterministic monthly usage figures for every series in `catalog`, starting January 2024.
pub fn sample_rows(catalog: &SeriesCatalog, months: u32) -> Vec<Row> {
    let Some(start) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return Vec::new();
    };
    (0..months)
        .filter_map(|m| start.checked_add_months(Months::new(m)))
        .enumerate()
        .map(|(i, date)| {
            let t = i as f64;
            catalog.names().enumerate().fold(Row::on(date), |row, (k, name)| {
                let phase = k as f64 * 1.3;
                let trend = 1.0 + 0.08 * t * ((k % 3) as f64);
                row.with(name, ((t * 0.6 + phase).sin() * 0.5 + 1.2) * 40.0 * trend)
            })
        })
        .collect()
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;
    use std::rc::Rc;
    use stream_core::{RenderOptions, StreamGraph};

    #[derive(Props, Clone, PartialEq)]
    pub struct StreamChartProps {
        pub rows: Vec<Row>,
        #[props(default)]
        pub catalog: SeriesCatalog,
        #[props(default)]
        pub options: RenderOptions,
    }

    /// Streamgraph with hover tooltip. The scene is re-rendered whenever `rows` changes.
    #[component]
    pub fn StreamChart(props: StreamChartProps) -> Element {
        let mut chart = use_signal(|| {
            let mut c = InteractiveStreamGraph::new(StreamGraph::new(props.catalog.clone(), props.options));
            c.update(&props.rows);
            c
        });
        let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);
        // Client-space origin of the container, refreshed on every pointer event.
        let mut origin = use_signal(|| (0.0f64, 0.0f64));

        let rows = props.rows.clone();
        use_effect(use_reactive!(|(rows,)| {
            log::debug!("stream chart: {} rows", rows.len());
            chart.write().update(&rows);
        }));

        let m = markup(&chart.read());

        rsx! {
            div {
                style: m.container_style,
                onmounted: move |evt| mounted.set(Some(evt.data())),
                onmouseenter: move |_| async move {
                    if let Some(o) = client_origin(mounted).await {
                        origin.set(o);
                    }
                },
                onmousemove: move |evt| async move {
                    let client = evt.client_coordinates();
                    // the page may have scrolled since the pointer entered
                    if let Some(o) = client_origin(mounted).await {
                        origin.set(o);
                    }
                    let at = container_point((client.x, client.y), *origin.read());
                    chart.write().pointer_at(at);
                },
                onmouseleave: move |_| chart.write().pointer_exit(),
                div { dangerous_inner_html: m.chart_svg }
                div { style: m.panel_style, dangerous_inner_html: m.tooltip_svg }
            }
        }
    }

    /// Client-space top-left corner of the mounted container.
    async fn client_origin(mounted: Signal<Option<Rc<MountedData>>>) -> Option<(f64, f64)> {
        let node = mounted.read().clone()?;
        let rect = node.get_client_rect().await.ok()?;
        Some((rect.origin.x, rect.origin.y))
    }

    /// Tiny demo launcher mounting the component over a year of sample data.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let catalog = SeriesCatalog::default();
            let rows = sample_rows(&catalog, 12);
            rsx! { super::ui::StreamChart { rows, catalog } }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;font-family:sans-serif}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("stream-dioxus built without `desktop` feature; enable features to run UI demo")
}
