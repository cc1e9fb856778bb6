// File: crates/stream-core/src/scale.rs
// Summary: Linear (value) and time scales with tick generation and label formatting.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Continuous linear map from a value domain to a pixel range.
/// A degenerate domain maps every value to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 && span.is_finite() { (v - d0) / span } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span != 0.0 { (px - r0) / span } else { 0.5 };
        d0 + t * (d1 - d0)
    }

    /// Roughly `count` human-friendly tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        nice_ticks(lo, hi, count as f64)
    }

    /// Tick labels with precision derived from the tick step.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let (lo, hi) = ordered(self.domain);
        let step = tick_step(lo, hi, count as f64).abs();
        let precision = precision_fixed(step);
        self.ticks(count).into_iter().map(|v| (v, format_grouped(v, precision))).collect()
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if b < a { (b, a) } else { (a, b) }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

// Returns (first index, last index, increment); a negative increment means
// "divide by -inc" to keep small steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Ticks between `start` and `stop` (inclusive) using 1/2/5 multiples of a power of ten.
pub fn nice_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if count <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (i1, i2, inc) = tick_spec(start, stop, count);
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Signed tick step for the given span and count.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    if start == stop || count <= 0.0 {
        return 0.0;
    }
    let (_, _, inc) = tick_spec(start, stop, count);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

fn precision_fixed(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Fixed-precision number with comma thousands grouping, e.g. `12,500.5`.
pub fn format_grouped(v: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, v.abs());
    let (int, frac) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(raw.len() + int.len() / 3 + 1);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(f) = frac {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = raw.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Calendar intervals used for time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Hour(u32),
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = HOUR_MS * 24.0;
const WEEK_MS: f64 = DAY_MS * 7.0;
const MONTH_MS: f64 = DAY_MS * 30.0;
const YEAR_MS: f64 = DAY_MS * 365.0;

const TICK_INTERVALS: [(TimeInterval, f64); 10] = [
    (TimeInterval::Hour(1), HOUR_MS),
    (TimeInterval::Hour(3), 3.0 * HOUR_MS),
    (TimeInterval::Hour(6), 6.0 * HOUR_MS),
    (TimeInterval::Hour(12), 12.0 * HOUR_MS),
    (TimeInterval::Day(1), DAY_MS),
    (TimeInterval::Day(2), 2.0 * DAY_MS),
    (TimeInterval::Week, WEEK_MS),
    (TimeInterval::Month(1), MONTH_MS),
    (TimeInterval::Month(3), 3.0 * MONTH_MS),
    (TimeInterval::Year(1), YEAR_MS),
];

impl TimeInterval {
    /// Interval whose duration is closest to `span / count`.
    pub fn for_span(start: NaiveDateTime, stop: NaiveDateTime, count: usize) -> Self {
        let (a, b) = (millis(start), millis(stop));
        let target = (b - a).abs() / count.max(1) as f64;
        let i = TICK_INTERVALS.iter().take_while(|(_, d)| *d <= target).count();
        if i == TICK_INTERVALS.len() {
            let step = tick_step(a / YEAR_MS, b / YEAR_MS, count as f64).abs().round();
            return TimeInterval::Year((step as i32).max(1));
        }
        if i == 0 {
            // sub-hour spans still get hourly ticks
            return TimeInterval::Hour(1);
        }
        let (lo, lo_d) = TICK_INTERVALS[i - 1];
        let (hi, hi_d) = TICK_INTERVALS[i];
        if target / lo_d < hi_d / target { lo } else { hi }
    }

    /// Smallest interval boundary at or after `t`.
    fn ceil(&self, t: NaiveDateTime) -> NaiveDateTime {
        let floor = match self {
            TimeInterval::Hour(_) => t.date().and_time(NaiveTime::MIN) + Duration::hours(t.hour() as i64),
            TimeInterval::Day(_) | TimeInterval::Week => t.date().and_time(NaiveTime::MIN),
            TimeInterval::Month(_) => first_of_month(t.year(), t.month()),
            TimeInterval::Year(_) => first_of_month(t.year(), 1),
        };
        if *self == TimeInterval::Week {
            // weeks start on Sunday
            let mut c = if floor < t { floor + Duration::days(1) } else { floor };
            while c.weekday() != Weekday::Sun {
                c += Duration::days(1);
            }
            return c;
        }
        if floor < t { self.advance(floor) } else { floor }
    }

    // One base unit forward (the multiplier is applied through `accepts`).
    fn advance(&self, t: NaiveDateTime) -> NaiveDateTime {
        match self {
            TimeInterval::Hour(_) => t + Duration::hours(1),
            TimeInterval::Day(_) => t + Duration::days(1),
            TimeInterval::Week => t + Duration::days(7),
            TimeInterval::Month(_) => t.checked_add_months(Months::new(1)).unwrap_or(NaiveDateTime::MAX),
            TimeInterval::Year(_) => t.checked_add_months(Months::new(12)).unwrap_or(NaiveDateTime::MAX),
        }
    }

    fn accepts(&self, t: NaiveDateTime) -> bool {
        match *self {
            TimeInterval::Hour(n) => t.hour() % n == 0,
            TimeInterval::Day(n) => (t.day() - 1) % n == 0,
            TimeInterval::Week => true,
            TimeInterval::Month(n) => t.month0() % n == 0,
            TimeInterval::Year(n) => t.year().rem_euclid(n) == 0,
        }
    }

    /// Boundaries in `[start, stop]`.
    pub fn range(&self, start: NaiveDateTime, stop: NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut out = Vec::new();
        let mut t = self.ceil(start);
        while t <= stop {
            if self.accepts(t) {
                out.push(t);
            }
            let next = self.advance(t);
            if next <= t {
                break;
            }
            t = next;
        }
        out
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Milliseconds since the Unix epoch, as `f64`.
pub fn millis(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

/// Linear map from a time domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDateTime, NaiveDateTime),
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        let linear = LinearScale::new((millis(domain.0), millis(domain.1)), range);
        Self { domain, linear }
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range
    }

    #[inline]
    pub fn map(&self, t: NaiveDateTime) -> f64 {
        self.linear.map(millis(t))
    }

    /// Calendar-aligned tick dates, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let (a, b) = if self.domain.1 < self.domain.0 {
            (self.domain.1, self.domain.0)
        } else {
            self.domain
        };
        let ticks = TimeInterval::for_span(a, b, count).range(a, b);
        if ticks.is_empty() && millis(b) - millis(a) < HOUR_MS {
            // no hour boundary inside a sub-hour span; label the domain start
            return vec![a];
        }
        ticks
    }

    /// Tick dates with abbreviated month labels (`Jan`, `Feb`, ...).
    pub fn month_ticks(&self, count: usize) -> Vec<(NaiveDateTime, String)> {
        self.ticks(count)
            .into_iter()
            .map(|t| (t, format_month(t)))
            .collect()
    }
}

/// `%b` formatting.
pub fn format_month(t: NaiveDateTime) -> String {
    t.format("%b").to_string()
}
