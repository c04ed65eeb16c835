//! Mapping data values onto pixel ranges

use num_traits::{Float, NumCast};

/// Furthest a mapped coordinate may land from the origin, in pixels
const PIXEL_LIMIT: f64 = 1_048_576.0;

/// Affine map from a data interval onto a pixel interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale; a degenerate domain is widened by one unit around its value
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if (domain.1 - domain.0).abs() < f64::EPSILON {
            (domain.0 - 0.5, domain.1 + 0.5)
        } else {
            domain
        };
        Self { domain, range }
    }

    /// Data interval covered by the scale
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel coordinate of `value`
    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        (self.range.1 - self.range.0).mul_add(t, self.range.0)
    }

    /// Pixel coordinate of `value`, rounded to the nearest pixel
    ///
    /// Coordinates are clamped to a bounded band around the origin so that
    /// infinite values stay off-canvas without overflowing later arithmetic.
    pub fn map_px(&self, value: f64) -> i64 {
        self.map(value).round().clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as i64
    }
}

/// Smallest "nice" step (1, 2, 2.5 or 5 times a power of ten) giving at most
/// `target` intervals across `span`
pub fn nice_step<T: Float>(span: T, target: usize) -> T {
    let cast = |value: f64| <T as NumCast>::from(value);
    let intervals = <T as NumCast>::from(target.max(1)).unwrap_or_else(T::one);
    if span <= T::zero() || !span.is_finite() {
        return T::one();
    }

    let raw = span / intervals;
    let ten = cast(10.0).unwrap_or_else(T::one);
    let magnitude = ten.powf(raw.log10().floor());
    let normalized = raw / magnitude;

    let multiplier = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .filter_map(cast)
        .find(|&m| normalized <= m)
        .unwrap_or(ten);
    multiplier * magnitude
}

/// Evenly spaced tick values covering `[min, max]` on nice boundaries
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut tick = first;
    // Tolerance absorbs accumulated floating point error at the upper end
    while tick <= step.mul_add(1e-9, max) {
        ticks.push(if tick.abs() < step * 1e-9 { 0.0 } else { tick });
        tick += step;
    }
    ticks
}

/// Decimal places needed to tell apart ticks separated by `step`
pub fn tick_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let digits = -step.log10().floor();
    let mut precision = digits.max(0.0) as usize;
    // Steps like 0.25 need one more place than their magnitude suggests
    let scaled = step * 10f64.powi(precision as i32);
    if (scaled - scaled.round()).abs() > 1e-9 {
        precision += 1;
    }
    precision
}
