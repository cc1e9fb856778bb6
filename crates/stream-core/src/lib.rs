// File: crates/stream-core/src/lib.rs
// Summary: Core library entry point; exports the streamgraph model, renderer and tooltip state machine.

pub mod axis;
pub mod catalog;
pub mod chart;
pub mod color;
pub mod component;
pub mod curve;
pub mod data;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod scale;
pub mod scene;
pub mod stack;
pub mod svg;
pub mod tooltip;
pub mod types;

pub use catalog::{SeriesCatalog, SeriesId};
pub use chart::{ChartContext, Frame, StreamGraph};
pub use color::Rgba;
pub use component::{InteractiveStreamGraph, PointerEvent};
pub use curve::Curve;
pub use data::{Dataset, Row};
pub use error::{Result, StreamError};
pub use geometry::{Path, Point};
pub use scene::{Node, Scene};
pub use stack::{stack, StackOffset, StackedSeries};
pub use tooltip::{TooltipController, TooltipState, TooltipView};
pub use types::{Insets, RenderOptions};
