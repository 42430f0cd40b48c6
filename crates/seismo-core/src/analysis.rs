//! Analysis — the data series behind the magnitude histogram and the
//! magnitude-vs-depth regression chart.
//!
//! Rows without the needed numeric fields are left out of the aggregation;
//! they are never counted as zero.

use crate::types::RowSet;

/// Bin count used by the magnitude distribution chart.
pub const DEFAULT_HISTOGRAM_BINS: usize = 15;

/// Upper bound on the bin count; larger requests are capped.
pub const MAX_HISTOGRAM_BINS: usize = 200;

/// One histogram bucket covering `[lower, upper)`; the last bucket also
/// includes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Least-squares line `depth = slope * magnitude + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of (magnitude, depth) pairs the fit was computed from.
    pub points: usize,
}

impl LinearFit {
    pub fn predict(&self, magnitude: f64) -> f64 {
        self.slope * magnitude + self.intercept
    }
}

/// Equal-width histogram of present, finite magnitudes.
///
/// Returns no bins for an empty series and a single bin when every value is
/// the same. `bins` is capped at [`MAX_HISTOGRAM_BINS`].
pub fn magnitude_histogram(rows: &RowSet, bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|e| e.magnitude)
        .filter(|m| m.is_finite())
        .collect();

    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };

    let bins = bins.min(MAX_HISTOGRAM_BINS);
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for value in values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

/// Fit depth against magnitude over rows where both are present.
///
/// `None` with fewer than two points or when every magnitude is equal.
pub fn depth_regression(rows: &RowSet) -> Option<LinearFit> {
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|e| Some((e.magnitude?, e.depth_km?)))
        .filter(|(m, d)| m.is_finite() && d.is_finite())
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (sxy, sxx) = pairs.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
        let dx = x - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
        points: pairs.len(),
    })
}
