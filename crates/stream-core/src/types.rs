// File: crates/stream-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins, render configuration).

use crate::color::Rgba;
use crate::curve::Curve;
use crate::stack::StackOffset;

/// Default surface width in logical units.
pub const WIDTH: f64 = 600.0;
/// Default surface height in logical units.
pub const HEIGHT: f64 = 500.0;

/// Tooltip mini-chart width.
pub const TOOLTIP_WIDTH: f64 = 280.0;
/// Tooltip mini-chart height.
pub const TOOLTIP_HEIGHT: f64 = 200.0;

/// Vertical distance between the pointer and the tooltip's top edge.
pub const TOOLTIP_POINTER_OFFSET: f64 = 12.0;

/// Screen margins, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // wide right margin leaves room for the legend
        Self::new(80.0, 220.0, 20.0, 60.0)
    }
}

/// Legend placement and swatch geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    /// Gap between the plot's right edge and the legend.
    pub gap: f64,
    pub row_height: f64,
    pub swatch: f64,
    pub label_x: f64,
    pub font_size: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self { gap: 30.0, row_height: 25.0, swatch: 18.0, label_x: 24.0, font_size: 12.0 }
    }
}

/// Styling of the main chart's time axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub font_size: f64,
    pub font_weight: Option<u16>,
    /// Label baseline shift in ems.
    pub label_dy_em: f64,
    pub domain_stroke: Rgba,
    pub tick_stroke: Rgba,
    pub stroke_width: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 8.0,
            font_size: 10.0,
            font_weight: None,
            label_dy_em: 0.5,
            domain_stroke: Rgba::BLACK,
            tick_stroke: Rgba::BLACK,
            stroke_width: 1.0,
        }
    }
}

impl AxisStyle {
    /// Axis styling inside the tooltip mini chart.
    pub fn tooltip() -> Self {
        Self {
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            font_size: 12.0,
            font_weight: Some(500),
            label_dy_em: 0.71,
            domain_stroke: Rgba::DARK_GREY,
            tick_stroke: Rgba::DARK_GREY,
            stroke_width: 1.5,
        }
    }
}

/// Tooltip mini-chart geometry and styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipLayout {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    /// Horizontal gap between adjacent bars.
    pub bar_gap: f64,
    pub pointer_offset: f64,
    pub axis: AxisStyle,
    /// Tick count hint for the value axis.
    pub value_ticks: usize,
}

impl TooltipLayout {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.hsum()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.vsum()).max(0.0)
    }
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            width: TOOLTIP_WIDTH,
            height: TOOLTIP_HEIGHT,
            insets: Insets::new(50.0, 25.0, 25.0, 35.0),
            bar_gap: 2.0,
            pointer_offset: TOOLTIP_POINTER_OFFSET,
            axis: AxisStyle::tooltip(),
            value_ticks: 10,
        }
    }
}

/// Styling of the floating tooltip panel, for hosts that position it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPanelStyle {
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: f64,
    pub padding: f64,
    pub shadow: &'static str,
    pub z_index: i32,
}

impl Default for TooltipPanelStyle {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            border: Rgba::DARK_GREY,
            border_width: 2.0,
            padding: 15.0,
            shadow: "0 4px 12px rgba(0,0,0,0.3)",
            z_index: 1000,
        }
    }
}

impl TooltipPanelStyle {
    /// Inline CSS for an absolutely positioned panel.
    pub fn css(&self, left: f64, top: f64, visible: bool) -> String {
        format!(
            "position:absolute; left:{left}px; top:{top}px; visibility:{}; background:{}; border:{}px solid {}; padding:{}px; box-shadow:{}; pointer-events:none; z-index:{};",
            if visible { "visible" } else { "hidden" },
            self.background,
            self.border_width,
            self.border,
            self.padding,
            self.shadow,
            self.z_index,
        )
    }
}

/// Complete visual configuration of a streamgraph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    pub offset: StackOffset,
    pub curve: Curve,
    pub axis: AxisStyle,
    pub legend: LegendLayout,
    pub tooltip: TooltipLayout,
    pub panel: TooltipPanelStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            offset: StackOffset::Wiggle,
            curve: Curve::Basis,
            axis: AxisStyle::default(),
            legend: LegendLayout::default(),
            tooltip: TooltipLayout::default(),
            panel: TooltipPanelStyle::default(),
        }
    }
}

impl RenderOptions {
    /// Width of the plotting area inside the margins.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.hsum()).max(0.0)
    }

    /// Height of the plotting area inside the margins.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.vsum()).max(0.0)
    }
}
