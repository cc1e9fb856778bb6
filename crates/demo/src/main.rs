// File: crates/demo/src/main.rs
// Summary: stream-demo CLI: CSV rows -> streamgraph SVG/PNG, plus the tooltip panel for a hovered series.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};
use stream_core::{Curve, InteractiveStreamGraph, PointerEvent, RenderOptions, Scene, SeriesCatalog, StackOffset, StreamGraph};
use stream_demo::{hover_point, load_rows, resolve_path, unknown_columns};
use stream_render_skia::SkiaRenderer;

/// Baseline offset applied when stacking
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OffsetArg {
    /// Minimise weighted slope change (streamgraph)
    #[default]
    Wiggle,
    /// Zero baseline
    None,
    /// Normalise each row to [0, 1]
    Expand,
    /// Centre each row around zero
    Silhouette,
}

impl From<OffsetArg> for StackOffset {
    fn from(o: OffsetArg) -> Self {
        match o {
            OffsetArg::Wiggle => StackOffset::Wiggle,
            OffsetArg::None => StackOffset::None,
            OffsetArg::Expand => StackOffset::Expand,
            OffsetArg::Silhouette => StackOffset::Silhouette,
        }
    }
}

/// Interpolation between data points
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum CurveArg {
    /// Uniform cubic B-spline
    #[default]
    Basis,
    /// Straight segments
    Linear,
}

impl From<CurveArg> for Curve {
    fn from(c: CurveArg) -> Self {
        match c {
            CurveArg::Basis => Curve::Basis,
            CurveArg::Linear => Curve::Linear,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stream-demo")]
#[command(version, about = "Render a streamgraph of per-model usage from a CSV file")]
struct Cli {
    /// CSV with a Date column and one column per series
    input: PathBuf,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Simulate hovering this series and write its tooltip panel
    #[arg(long)]
    hover: Option<String>,

    #[arg(long, value_enum, default_value = "wiggle")]
    offset: OffsetArg,

    #[arg(long, value_enum, default_value = "basis")]
    curve: CurveArg,

    /// Only write SVG output
    #[arg(long)]
    no_png: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let (path, used_alt) = resolve_path(&cli.input)?;
    info!("using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    let rows = load_rows(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!("loaded {} rows", rows.len());

    let catalog = SeriesCatalog::default();
    let ignored = unknown_columns(&rows, &catalog);
    if !ignored.is_empty() {
        warn!("columns outside the series catalog are ignored: {}", ignored.join(", "));
    }

    let opts = RenderOptions { offset: cli.offset.into(), curve: cli.curve.into(), ..RenderOptions::default() };
    let mut chart = InteractiveStreamGraph::new(StreamGraph::new(catalog, opts));
    chart.update(&rows);
    if chart.frame().is_empty() {
        warn!("no rows to draw; writing an empty chart");
    }

    std::fs::create_dir_all(&cli.out).with_context(|| format!("create {}", cli.out.display()))?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let renderer = SkiaRenderer::default();
    write_scene(chart.scene(), &cli.out.join(format!("stream_{stem}")), &renderer, !cli.no_png)?;

    if let Some(name) = &cli.hover {
        let Some(ctx) = chart.context().cloned() else {
            anyhow::bail!("nothing drawn; cannot hover {name}");
        };
        let series = ctx.catalog.require(name)?;
        let at = hover_point(&ctx, &opts, series).with_context(|| format!("no rows for {name}"))?;
        chart.handle(PointerEvent::Enter { series, at });
        if let Some(content) = chart.tooltip().content() {
            let view = chart.tooltip().view();
            info!("tooltip for {name} at ({:.1}, {:.1})", view.left, view.top);
            let safe = name.replace(|c: char| !c.is_ascii_alphanumeric(), "_");
            write_scene(content, &cli.out.join(format!("tooltip_{stem}_{safe}")), &renderer, !cli.no_png)?;
        }
    }
    Ok(())
}

/// Write `<base>.svg` and, when requested, `<base>.png`.
fn write_scene(scene: &Scene, base: &Path, renderer: &SkiaRenderer, png: bool) -> Result<()> {
    let svg = base.with_extension("svg");
    std::fs::write(&svg, scene.to_svg()).with_context(|| format!("write {}", svg.display()))?;
    println!("Wrote {}", svg.display());
    if png {
        let out = base.with_extension("png");
        renderer.render_to_png(scene, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}
