// File: crates/stream-core/src/tooltip.rs
// Summary: Tooltip state machine and the per-series mini bar chart it displays.

use log::{debug, trace};

use crate::axis::{bottom_axis, left_axis, Tick};
use crate::catalog::SeriesId;
use crate::chart::ChartContext;
use crate::geometry::Point;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{Group, RectNode, Scene};

/// Which series, if any, the tooltip is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Shown(SeriesId),
}

/// What a host needs to draw the floating panel.
/// `left`/`top` are relative to the chart's containing element.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TooltipView {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: Option<Scene>,
}

/// Drives the tooltip from pointer events over series regions.
///
/// Content is rebuilt only when the pinned series changes; moving within a
/// region only repositions the panel.
#[derive(Clone, Debug, Default)]
pub struct TooltipController {
    state: TooltipState,
    view: TooltipView,
    rebuilds: u64,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn pinned(&self) -> Option<SeriesId> {
        match self.state {
            TooltipState::Shown(id) => Some(id),
            TooltipState::Hidden => None,
        }
    }

    pub fn view(&self) -> &TooltipView {
        &self.view
    }

    pub fn is_visible(&self) -> bool {
        self.view.visible
    }

    pub fn content(&self) -> Option<&Scene> {
        self.view.content.as_ref()
    }

    /// Number of times the mini chart has been (re)built.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Pointer entered the region of `series` at `at`.
    pub fn enter(&mut self, ctx: &ChartContext, series: SeriesId, at: Point) {
        if self.state != TooltipState::Shown(series) {
            debug!("tooltip: pin {}", ctx.catalog.name(series));
            self.state = TooltipState::Shown(series);
            self.view.content = Some(build_mini_chart(ctx, series));
            self.rebuilds += 1;
        }
        self.reposition(ctx, at);
    }

    /// Pointer moved inside the region of `series`.
    /// A move without a preceding enter pins the series first.
    pub fn moved(&mut self, ctx: &ChartContext, series: SeriesId, at: Point) {
        if self.state == TooltipState::Hidden {
            self.enter(ctx, series, at);
            return;
        }
        self.reposition(ctx, at);
    }

    /// Pointer left the regions: hide and unpin. The last content is kept
    /// until the next pin replaces it.
    pub fn leave(&mut self) {
        if self.state != TooltipState::Hidden {
            debug!("tooltip: hide");
        }
        self.state = TooltipState::Hidden;
        self.view.visible = false;
    }

    /// Reset to a hidden, empty panel (used when the chart is rebuilt).
    pub fn clear(&mut self) {
        self.state = TooltipState::Hidden;
        self.view = TooltipView::default();
    }

    fn reposition(&mut self, ctx: &ChartContext, at: Point) {
        self.view.left = at.x;
        self.view.top = at.y + ctx.tooltip.pointer_offset;
        self.view.visible = true;
        trace!("tooltip: at ({:.1}, {:.1})", self.view.left, self.view.top);
    }
}

/// Mini bar chart of one series over time, normalised to that series' own maximum.
pub fn build_mini_chart(ctx: &ChartContext, series: SeriesId) -> Scene {
    let layout = &ctx.tooltip;
    let (pw, ph) = (layout.plot_width(), layout.plot_height());
    let data = &ctx.dataset;
    let Some(extent) = data.date_extent() else {
        return Scene::empty(layout.width, layout.height);
    };
    let mut root = Group::at(layout.insets.left, layout.insets.top).class("tooltip-plot");

    let x = TimeScale::new(extent, (0.0, pw));
    // an all-zero series gets a unit domain so its bars stay flat
    let max = data.max_value(series).filter(|m| *m > 0.0).unwrap_or(1.0);
    let y = LinearScale::new((0.0, max), (ph, 0.0));

    let n = data.len() as f64;
    let bar_width = (pw / n - layout.bar_gap).max(0.0);
    let color = ctx.catalog.color(series);
    for (date, value) in data.series_points(series) {
        let top = y.map(value);
        root.push(RectNode {
            class: Some("bar"),
            x: x.map(date),
            y: top.min(ph),
            width: bar_width,
            height: (ph - top).abs(),
            fill: color,
        });
    }

    let time_ticks: Vec<Tick> = x
        .month_ticks(layout.axis.tick_count)
        .into_iter()
        .map(|(t, label)| Tick::new(x.map(t), label))
        .collect();
    let mut x_axis = bottom_axis(&time_ticks, x.range(), &layout.axis);
    x_axis.translate = (0.0, ph);
    root.push(x_axis);

    let value_ticks: Vec<Tick> = y
        .tick_labels(layout.value_ticks)
        .into_iter()
        .map(|(v, label)| Tick::new(y.map(v), label))
        .collect();
    root.push(left_axis(&value_ticks, y.range, &layout.axis));

    Scene { width: layout.width, height: layout.height, nodes: vec![root.into()] }
}
