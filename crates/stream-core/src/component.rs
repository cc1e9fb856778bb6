// File: crates/stream-core/src/component.rs
// Summary: Stateful streamgraph component: owns the current frame and the tooltip session.

use std::sync::Arc;

use log::debug;

use crate::catalog::SeriesId;
use crate::chart::{ChartContext, Frame, StreamGraph};
use crate::data::Row;
use crate::geometry::Point;
use crate::scene::Scene;
use crate::tooltip::TooltipController;

/// Pointer events over series regions; positions are relative to the chart container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { series: SeriesId, at: Point },
    Move { series: SeriesId, at: Point },
    Leave,
}

/// A streamgraph instance bound to a host. Every data update rebuilds the
/// whole frame; pointer events only touch the tooltip.
pub struct InteractiveStreamGraph {
    graph: StreamGraph,
    frame: Frame,
    tooltip: TooltipController,
    hovered: Option<SeriesId>,
}

impl Default for InteractiveStreamGraph {
    fn default() -> Self {
        Self::new(StreamGraph::default())
    }
}

impl InteractiveStreamGraph {
    pub fn new(graph: StreamGraph) -> Self {
        let frame = graph.render(&[]);
        Self { graph, frame, tooltip: TooltipController::new(), hovered: None }
    }

    /// Replace the data; discards the previous scene and tooltip surface.
    pub fn update(&mut self, rows: &[Row]) {
        self.frame = self.graph.render(rows);
        self.tooltip.clear();
        self.hovered = None;
    }

    pub fn graph(&self) -> &StreamGraph {
        &self.graph
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn scene(&self) -> &Scene {
        &self.frame.scene
    }

    pub fn context(&self) -> Option<&Arc<ChartContext>> {
        self.frame.context.as_ref()
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    /// Dispatch a region event. Ignored while nothing is drawn or when the
    /// series is not part of the catalog.
    pub fn handle(&mut self, event: PointerEvent) {
        let Some(ctx) = self.frame.context.clone() else {
            return;
        };
        if let PointerEvent::Enter { series, .. } | PointerEvent::Move { series, .. } = event {
            if ctx.catalog.get(series).is_none() {
                debug!("pointer event for unknown series {series:?} dropped");
                return;
            }
        }
        match event {
            PointerEvent::Enter { series, at } => {
                self.hovered = Some(series);
                self.tooltip.enter(&ctx, series, at);
            }
            PointerEvent::Move { series, at } => {
                self.hovered = Some(series);
                self.tooltip.moved(&ctx, series, at);
            }
            PointerEvent::Leave => {
                self.hovered = None;
                self.tooltip.leave();
            }
        }
    }

    /// Raw pointer position (container coordinates): hit-test the regions and
    /// translate into enter/move/leave. Returns the region under the pointer.
    pub fn pointer_at(&mut self, at: Point) -> Option<SeriesId> {
        let hit = self.frame.scene.hit_test(at);
        match (self.hovered, hit) {
            (Some(prev), Some(s)) if prev == s => self.handle(PointerEvent::Move { series: s, at }),
            (_, Some(s)) => self.handle(PointerEvent::Enter { series: s, at }),
            (Some(_), None) => self.handle(PointerEvent::Leave),
            (None, None) => {}
        }
        hit
    }

    /// Pointer left the chart container entirely.
    pub fn pointer_exit(&mut self) {
        if self.hovered.is_some() || self.tooltip.is_visible() {
            self.handle(PointerEvent::Leave);
        }
    }
}
