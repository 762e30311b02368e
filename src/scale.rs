//! Linear scales mapping field values to screen positions.

use crate::data::{AxisField, CensusData};
use crate::util::formatters::format_tick;
use crate::util::ScaleConfig;

/// A continuous linear mapping from a data domain to an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    /// Input interval.
    pub domain: (f64, f64),
    /// Output interval. May be reversed, e.g. `(1.0, 0.0)` for a Y axis.
    pub range: (f64, f64),
}

impl LinearScale {
    /// Create a scale from a domain and a range.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Build the scale for a field: domain `[min * floor, max * ceil]` of the
    /// field over all records.
    ///
    /// With no finite values the domain falls back to `[0, 1]`.
    pub fn for_field<F: AxisField>(
        data: &CensusData,
        field: F,
        range: (f64, f64),
        config: &ScaleConfig,
    ) -> Self {
        let domain = data
            .extent(field)
            .map(|(min, max)| (min * config.floor_factor, max * config.ceil_factor))
            .unwrap_or((0.0, 1.0));
        Self::new(domain, range)
    }

    /// Map a domain value to the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        let t = (value - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Map a range value back to the domain.
    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        let t = (position - r0) / (r1 - r0);
        d0 + t * (d1 - d0)
    }

    /// Interpolate between this scale's domain and `other`'s, keeping this
    /// scale's range. `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &LinearScale, t: f64) -> LinearScale {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        LinearScale::new(
            (mix(self.domain.0, other.domain.0), mix(self.domain.1, other.domain.1)),
            self.range,
        )
    }

    /// Roughly `count` round tick values spanning the domain, ascending.
    ///
    /// Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        if start > stop {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some(spec) = TickSpec::new(start, stop, count as f64) else {
            return Vec::new();
        };
        if spec.i2 < spec.i1 {
            return Vec::new();
        }

        (spec.i1..=spec.i2)
            .map(|i| {
                if spec.inc < 0.0 {
                    i as f64 / -spec.inc
                } else {
                    i as f64 * spec.inc
                }
            })
            .collect()
    }

    /// Formatter for ticks from [`LinearScale::ticks`], printing as many
    /// decimals as the tick step needs.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let decimals = self.tick_decimals(count);
        move |value| format_tick(value, decimals)
    }

    /// Decimal places needed to print ticks from [`LinearScale::ticks`].
    pub fn tick_decimals(&self, count: usize) -> usize {
        let (start, stop) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let Some(spec) = TickSpec::new(start, stop, count.max(1) as f64) else {
            return 0;
        };
        let step = if spec.inc < 0.0 { 1.0 / -spec.inc } else { spec.inc };
        let exponent = step.abs().log10().floor();
        if exponent < 0.0 {
            (-exponent) as usize
        } else {
            0
        }
    }
}

/// Integer bounds and increment of a tick sequence. A negative `inc` encodes
/// a fractional step of `1 / -inc`, which keeps tick values exact.
#[derive(Debug, Clone, Copy)]
struct TickSpec {
    i1: i64,
    i2: i64,
    inc: f64,
}

impl TickSpec {
    fn new(start: f64, stop: f64, count: f64) -> Option<Self> {
        let step = (stop - start) / count.max(0.0);
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        let spec = if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            let mut i1 = (start * inc).round();
            let mut i2 = (stop * inc).round();
            if i1 / inc < start {
                i1 += 1.0;
            }
            if i2 / inc > stop {
                i2 -= 1.0;
            }
            Self {
                i1: i1 as i64,
                i2: i2 as i64,
                inc: -inc,
            }
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut i1 = (start / inc).round();
            let mut i2 = (stop / inc).round();
            if i1 * inc < start {
                i1 += 1.0;
            }
            if i2 * inc > stop {
                i2 -= 1.0;
            }
            Self {
                i1: i1 as i64,
                i2: i2 as i64,
                inc,
            }
        };

        if spec.i2 < spec.i1 && (0.5..2.0).contains(&count) {
            return Self::new(start, stop, count * 2.0);
        }
        Some(spec)
    }
}
