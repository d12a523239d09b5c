//! Value axis ranges and tick placement.

/// A linear value axis with evenly spaced ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

const TARGET_TICKS: f64 = 5.0;

/// Round `raw` up to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl Axis {
    /// An axis covering `[lo, hi]`, widened outward to whole ticks.
    pub fn fit(lo: f64, hi: f64) -> Self {
        let (lo, hi) = if hi > lo { (lo, hi) } else { (lo, lo + 1.0) };
        let step = nice_step((hi - lo) / TARGET_TICKS);
        Self {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    /// A fixed range; the step is still chosen automatically.
    pub fn fixed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: nice_step((max - min) / TARGET_TICKS),
        }
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// Clamp a value into the axis range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Map a value onto a pixel coordinate where `min` sits at `bottom`
    /// and `max` at `top`.
    pub fn project(&self, value: f64, top: f64, bottom: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return bottom;
        }
        bottom - (value - self.min) / span * (bottom - top)
    }

    /// Format a tick label without trailing zeros.
    pub fn label(&self, value: f64) -> String {
        let decimals = if self.step >= 1.0 {
            0
        } else {
            (-self.step.log10().floor()) as usize
        };
        let text = format!("{:.*}", decimals, value);
        if text == "-0" {
            "0".to_string()
        } else {
            text
        }
    }
}
