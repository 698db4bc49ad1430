use serde::Serialize;

use crate::config::LayoutConfig;

/// Maps years ago onto the vertical log axis.
///
/// Each power of ten gets `decade_height` units. The lowest drawn decade,
/// `10^min_decade_exponent`, sits at `top_margin`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LogScale {
    pub decade_height: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    min_decade_exponent: i32,
    max_years_ago: Option<f64>,
}

impl LogScale {
    pub fn new(config: &LayoutConfig, max_years_ago: Option<f64>) -> Self {
        Self {
            decade_height: config.decade_height,
            top_margin: config.margin,
            bottom_margin: config.margin,
            min_decade_exponent: config.min_decade_exponent,
            max_years_ago,
        }
    }

    pub fn origin_offset(&self) -> f32 {
        self.top_margin - self.decade_height * self.min_decade_exponent as f32
    }

    /// Draw coordinate for `years_ago`. Magnitudes at or below
    /// `10^min_decade_exponent`, zero included, are pinned to `top_margin`.
    pub fn position(&self, years_ago: f64) -> f32 {
        self.exact_position(years_ago) as f32
    }

    /// [`position`](Self::position) before narrowing to a draw coordinate.
    /// Magnitudes closer than `f32` resolution deep down the axis only stay
    /// distinct here.
    pub fn exact_position(&self, years_ago: f64) -> f64 {
        let min = f64::from(self.min_decade_exponent);
        let log = years_ago.log10();
        if log.is_nan() || log <= min {
            return f64::from(self.top_margin);
        }
        f64::from(self.decade_height) * (log - min) + f64::from(self.top_margin)
    }

    pub fn min_decade_exponent(&self) -> i32 {
        self.min_decade_exponent
    }

    /// Highest decade that needs gridlines; never below the minimum so an
    /// empty timeline still gets one decade of axis.
    pub fn max_decade_exponent(&self) -> i32 {
        let exponent = match self.max_years_ago {
            Some(max) if max > 0.0 && max.is_finite() => max.log10().floor() as i32,
            _ => 0,
        };
        exponent.max(self.min_decade_exponent)
    }

    pub fn decade_count(&self) -> usize {
        let span = i64::from(self.max_decade_exponent()) - i64::from(self.min_decade_exponent);
        usize::try_from(span + 1).unwrap_or(0)
    }

    pub fn axis_extent(&self) -> f32 {
        self.decade_height * self.decade_count() as f32
    }

    pub fn canvas_height(&self) -> f32 {
        self.origin_offset()
            + self.decade_height * (f64::from(self.max_decade_exponent()) + 1.0) as f32
            + self.bottom_margin
    }
}
