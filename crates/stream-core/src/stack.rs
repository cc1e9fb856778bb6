// File: crates/stream-core/src/stack.rs
// Summary: Cumulative stacking with baseline offsets (none, expand, silhouette, wiggle).

use crate::catalog::SeriesId;
use crate::data::Dataset;

/// Baseline placement for the stacked layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StackOffset {
    /// Zero baseline; layers directly readable as values.
    None,
    /// Normalise every column to `[0, 1]`.
    Expand,
    /// Centre every column around zero.
    Silhouette,
    /// Shift the baseline to minimise weighted layer slope (streamgraph).
    #[default]
    Wiggle,
}

impl StackOffset {
    pub fn name(&self) -> &'static str {
        match self {
            StackOffset::None => "none",
            StackOffset::Expand => "expand",
            StackOffset::Silhouette => "silhouette",
            StackOffset::Wiggle => "wiggle",
        }
    }
}

/// One layer of the stack: an interval `[y0, y1]` per row.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeries {
    pub id: SeriesId,
    pub points: Vec<[f64; 2]>,
}

impl StackedSeries {
    pub fn baseline(&self, row: usize) -> f64 {
        self.points[row][0]
    }

    pub fn top(&self, row: usize) -> f64 {
        self.points[row][1]
    }

    /// `y1 - y0` per row.
    pub fn thickness(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1] - p[0])
    }
}

/// Stack the dataset's series in catalog order and apply `offset`.
/// Layer `i` always starts where layer `i - 1` ends.
pub fn stack(data: &Dataset, offset: StackOffset) -> Vec<StackedSeries> {
    let mut layers: Vec<Vec<[f64; 2]>> = data
        .columns()
        .iter()
        .map(|col| col.iter().map(|&v| [0.0, v]).collect())
        .collect();

    match offset {
        StackOffset::None => offset_none(&mut layers),
        StackOffset::Expand => offset_expand(&mut layers),
        StackOffset::Silhouette => offset_silhouette(&mut layers),
        StackOffset::Wiggle => offset_wiggle(&mut layers),
    }

    layers
        .into_iter()
        .enumerate()
        .map(|(i, points)| StackedSeries { id: SeriesId(i), points })
        .collect()
}

/// Lowest baseline and highest top across all layers.
pub fn extent(layers: &[StackedSeries]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in layers.iter().flat_map(|l| l.points.iter()) {
        lo = lo.min(p[0]);
        hi = hi.max(p[1]);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

// Each layer sits on the previous layer's top; the first keeps its own baseline.
fn offset_none(layers: &mut [Vec<[f64; 2]>]) {
    for i in 1..layers.len() {
        let (below, rest) = layers.split_at_mut(i);
        let prev = &below[i - 1];
        for (cur, p) in rest[0].iter_mut().zip(prev.iter()) {
            let base = if p[1].is_nan() { p[0] } else { p[1] };
            cur[0] = base;
            cur[1] += base;
        }
    }
}

fn offset_expand(layers: &mut [Vec<[f64; 2]>]) {
    let m = layers.first().map_or(0, Vec::len);
    for j in 0..m {
        let total: f64 = layers.iter().map(|l| l[j][1]).sum();
        if total != 0.0 {
            for l in layers.iter_mut() {
                l[j][1] /= total;
            }
        }
    }
    offset_none(layers);
}

fn offset_silhouette(layers: &mut [Vec<[f64; 2]>]) {
    let m = layers.first().map_or(0, Vec::len);
    for j in 0..m {
        let total: f64 = layers.iter().map(|l| l[j][1]).sum();
        let first = &mut layers[0][j];
        first[0] = -total / 2.0;
        first[1] += first[0];
    }
    offset_none(layers);
}

// Byron & Wattenberg weighted wiggle: walk the columns, moving the baseline by the
// value-weighted mean slope of every layer's centre line.
fn offset_wiggle(layers: &mut [Vec<[f64; 2]>]) {
    let n = layers.len();
    let m = layers.first().map_or(0, Vec::len);
    if n == 0 || m == 0 {
        return;
    }
    let mut y = 0.0;
    for j in 1..m {
        let mut weight = 0.0;
        let mut moment = 0.0;
        let mut below = 0.0;
        for layer in layers.iter() {
            let cur = layer[j][1];
            let prev = layer[j - 1][1];
            let slope = below + (cur - prev) / 2.0;
            weight += cur;
            moment += slope * cur;
            below += cur - prev;
        }
        let first = &mut layers[0][j - 1];
        first[0] = y;
        first[1] += y;
        if weight != 0.0 {
            y -= moment / weight;
        }
    }
    let last = &mut layers[0][m - 1];
    last[0] = y;
    last[1] += y;
    offset_none(layers);
}
