// File: crates/stream-examples/src/bin/streams.rs
// Summary: Minimal example that renders a weekly streamgraph and one tooltip to SVG.

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, NaiveDate};
use log::info;
use stream_core::{InteractiveStreamGraph, Point, PointerEvent, Row, SeriesCatalog, StreamGraph};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = SeriesCatalog::from_hex([
        ("Search", "#1b9e77"),
        ("Social", "#d95f02"),
        ("Email", "#7570b3"),
        ("Direct", "#e7298a"),
    ])?;
    let start = NaiveDate::from_ymd_opt(2024, 1, 7).ok_or_else(|| anyhow!("bad start date"))?;
    let rows: Vec<Row> = (0..26)
        .map(|w| {
            let t = w as f64;
            Row::on(start + Duration::weeks(w))
                .with("Search", 30.0 + 10.0 * (t / 4.0).sin())
                .with("Social", 12.0 + t * 0.8)
                .with("Email", 20.0 - 6.0 * (t / 6.0).cos())
                .with("Direct", if w % 5 == 0 { f64::NAN } else { 9.0 })
        })
        .collect();

    let mut chart = InteractiveStreamGraph::new(StreamGraph::new(catalog, Default::default()));
    chart.update(&rows);

    let out_dir = std::path::PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("create target/out")?;
    let out = out_dir.join("example_streams.svg");
    std::fs::write(&out, chart.scene().to_svg()).with_context(|| format!("write {}", out.display()))?;
    info!("wrote {}", out.display());

    // pin the first series as if the pointer entered its region at the plot origin
    let opts = *chart.graph().options();
    let first = chart.scene().regions().first().map(|r| r.series);
    if let Some(series) = first {
        chart.handle(PointerEvent::Enter { series, at: Point::new(opts.insets.left, opts.insets.top) });
    }
    if let Some(content) = chart.tooltip().content() {
        let tip = out_dir.join("example_streams_tooltip.svg");
        std::fs::write(&tip, content.to_svg()).with_context(|| format!("write {}", tip.display()))?;
        info!("wrote {}", tip.display());
    }
    Ok(())
}
