#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorDirection {
    HigherIsWorse,
    HigherIsBetter,
}

/// Monotonic mapping from a factor's raw scale onto `[0, 100]`.
#[derive(Debug, Clone, Copy)]
pub enum NormalizeRule {
    /// `lo` maps to 0 and `hi` to 100, linear in between, clamped outside.
    LinearRange { lo: f64, hi: f64 },
}

impl NormalizeRule {
    pub fn apply(&self, raw: f64) -> f64 {
        match *self {
            NormalizeRule::LinearRange { lo, hi } => {
                debug_assert!(hi > lo, "normalize range must be non-degenerate");
                (100.0 * (raw - lo) / (hi - lo)).clamp(0.0, 100.0)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeightedFactor {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub direction: FactorDirection,
    pub normalize: NormalizeRule,
}

/// Weighted composite of normalized factors, in `[0, 100]`. `raw[i]` pairs
/// with `factors[i]`; a `None` raw value means unknown, never zero — the
/// factor drops out and the remaining weights are renormalized for this
/// entity only. Returns `None` when no factor is usable.
pub fn composite_score(raw: &[Option<f64>], factors: &[WeightedFactor]) -> Option<u8> {
    debug_assert_eq!(raw.len(), factors.len(), "raw values must pair with factors");
    debug_assert!(
        (factors.iter().map(|f| f.weight).sum::<f64>() - 1.0).abs() < 1e-6,
        "factor weights must sum to 1.0"
    );

    let mut weight_used = 0.0f64;
    let mut acc = 0.0f64;
    for (value, factor) in raw.iter().zip(factors) {
        let Some(v) = value else {
            continue;
        };
        let mut normalized = factor.normalize.apply(*v);
        if factor.direction == FactorDirection::HigherIsBetter {
            normalized = 100.0 - normalized;
        }
        acc += factor.weight * normalized;
        weight_used += factor.weight;
    }

    if weight_used <= 0.0 {
        return None;
    }
    let score = (acc / weight_used).round().clamp(0.0, 100.0);
    Some(score as u8)
}
