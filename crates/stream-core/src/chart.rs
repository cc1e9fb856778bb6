// File: crates/stream-core/src/chart.rs
// Summary: Streamgraph renderer: rows -> stacked layout -> scene, plus the handler context.

use std::sync::Arc;

use log::debug;

use crate::axis::{bottom_axis, Tick};
use crate::catalog::{SeriesCatalog, SeriesId};
use crate::curve::area_path;
use crate::data::{Dataset, Row};
use crate::geometry::Point;
use crate::legend::legend;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{Group, PathNode, Scene};
use crate::stack::{extent, stack, StackedSeries};
use crate::types::{RenderOptions, TooltipLayout};

/// Everything a pointer handler needs, captured once per render.
#[derive(Clone, Debug)]
pub struct ChartContext {
    pub catalog: SeriesCatalog,
    pub dataset: Dataset,
    pub layers: Vec<StackedSeries>,
    pub x: TimeScale,
    pub y: LinearScale,
    pub tooltip: TooltipLayout,
}

impl ChartContext {
    pub fn layer(&self, id: SeriesId) -> &StackedSeries {
        &self.layers[id.index()]
    }
}

/// Output of one render: the surface plus the context bound to its regions.
/// `context` is `None` when there was nothing to draw.
#[derive(Clone, Debug)]
pub struct Frame {
    pub scene: Scene,
    pub context: Option<Arc<ChartContext>>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.context.is_none()
    }
}

pub struct StreamGraph {
    catalog: SeriesCatalog,
    options: RenderOptions,
}

impl Default for StreamGraph {
    fn default() -> Self {
        Self::new(SeriesCatalog::default(), RenderOptions::default())
    }
}

impl StreamGraph {
    pub fn new(catalog: SeriesCatalog, options: RenderOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &SeriesCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Build the full scene for `rows`. Pure: the same rows give an equal frame.
    pub fn render(&self, rows: &[Row]) -> Frame {
        let opts = &self.options;
        let dataset = Dataset::project(rows, &self.catalog);
        let Some((first, last)) = dataset.date_extent() else {
            debug!("render: no rows, leaving surface blank");
            return Frame { scene: Scene::empty(opts.width, opts.height), context: None };
        };

        let (pw, ph) = (opts.plot_width(), opts.plot_height());
        let x = TimeScale::new((first, last), (0.0, pw));
        let layers = stack(&dataset, opts.offset);
        let (lo, hi) = extent(&layers).unwrap_or((0.0, 0.0));
        let y = LinearScale::new((lo, hi), (ph, 0.0));
        debug!(
            "render: {} rows x {} series, offset={}, y-domain=[{lo:.3}, {hi:.3}]",
            dataset.len(),
            self.catalog.len(),
            opts.offset.name()
        );

        let mut plot = Group::at(opts.insets.left, opts.insets.top).class("plot");
        let xs: Vec<f64> = dataset.dates.iter().map(|&d| x.map(d)).collect();
        for layer in &layers {
            let top: Vec<Point> = xs.iter().zip(&layer.points).map(|(&px, p)| Point::new(px, y.map(p[1]))).collect();
            let bottom: Vec<Point> = xs.iter().zip(&layer.points).map(|(&px, p)| Point::new(px, y.map(p[0]))).collect();
            plot.push(PathNode {
                class: Some("stream"),
                path: area_path(&top, &bottom, opts.curve),
                fill: Some(self.catalog.color(layer.id)),
                stroke: None,
                series: Some(layer.id),
            });
        }

        let ticks: Vec<Tick> = x
            .month_ticks(opts.axis.tick_count)
            .into_iter()
            .map(|(t, label)| Tick::new(x.map(t), label))
            .collect();
        let mut axis = bottom_axis(&ticks, x.range(), &opts.axis);
        axis.translate = (0.0, ph);
        plot.push(axis);

        let key = legend(&self.catalog, &opts.legend, pw + opts.insets.left + opts.legend.gap, opts.insets.top);

        let context = ChartContext {
            catalog: self.catalog.clone(),
            dataset,
            layers,
            x,
            y,
            tooltip: opts.tooltip,
        };
        Frame {
            scene: Scene { width: opts.width, height: opts.height, nodes: vec![plot.into(), key.into()] },
            context: Some(Arc::new(context)),
        }
    }
}
