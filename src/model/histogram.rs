use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One bucket of a salary distribution. Bands partition `[0, inf)`; only
/// the last band may carry an infinite upper bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBand {
    pub label: String,
    pub upper: f64,
    pub count: u64,
}

/// Government-wide salary band order. Source data reports counts keyed by
/// these labels; ordering is significant and not derivable from the labels.
pub const BAND_ORDER: &[(&str, f64)] = &[
    ("Under $30K", 30_000.0),
    ("$30K-$50K", 50_000.0),
    ("$50K-$75K", 75_000.0),
    ("$75K-$100K", 100_000.0),
    ("$100K-$125K", 125_000.0),
    ("$125K-$150K", 150_000.0),
    ("$150K-$200K", 200_000.0),
    ("$200K+", f64::INFINITY),
];

/// Assumed span of the open-ended top band. Interpolating against an
/// infinite width would pin every value in that band to its lower edge.
pub const OPEN_TOP_BAND_WIDTH: f64 = 100_000.0;

/// Align a label -> count mapping to `BAND_ORDER`. Labels absent from the
/// mapping contribute a zero count.
pub fn bands_from_counts(counts: &HashMap<String, u64>) -> Vec<SalaryBand> {
    BAND_ORDER
        .iter()
        .map(|&(label, upper)| SalaryBand {
            label: label.to_string(),
            upper,
            count: counts.get(label).copied().unwrap_or(0),
        })
        .collect()
}

/// Estimated percentile rank of `value` within a bucketed distribution,
/// in `[0, 99]`. A zero-total histogram returns 0; callers that need to
/// distinguish "unknown" from "0th percentile" must check the total
/// themselves.
pub fn percentile_of(value: f64, bands: &[SalaryBand]) -> u8 {
    debug_assert!(!bands.is_empty(), "salary bands must be non-empty");
    debug_assert!(value >= 0.0, "salary value must be non-negative");
    debug_assert!(
        bands.windows(2).all(|w| w[0].upper < w[1].upper),
        "band upper bounds must be strictly increasing"
    );

    let total: u64 = bands.iter().map(|b| b.count).sum();
    if total == 0 {
        return 0;
    }

    let mut below = 0.0f64;
    let mut prev_upper = 0.0f64;
    for band in bands {
        if value >= band.upper {
            below += band.count as f64;
            prev_upper = band.upper;
            continue;
        }
        // The value's own band: count the fraction of it below the value.
        let width = if band.upper.is_infinite() {
            OPEN_TOP_BAND_WIDTH
        } else {
            band.upper - prev_upper
        };
        let position = ((value - prev_upper) / width).clamp(0.0, 1.0);
        below += band.count as f64 * position;
        break;
    }

    let pct = (100.0 * below / total as f64).round();
    pct.clamp(0.0, 99.0) as u8
}
