use crate::model::factors::{FactorDirection, NormalizeRule, WeightedFactor};

/// The factor profile behind the agency disruption composite.
#[derive(Debug, Clone)]
pub struct DisruptionWeights {
    pub factors: Vec<WeightedFactor>,
}

impl DisruptionWeights {
    /// FY2025 methodology: five factors, weights fixed editorially and
    /// published with the dashboard. Normalization ceilings put each raw
    /// scale on 0-100 before weighting.
    pub fn fy2025_v1() -> Self {
        Self {
            factors: vec![
                WeightedFactor {
                    id: "reduction_rate",
                    name: "Workforce Reduction Rate",
                    weight: 0.30,
                    direction: FactorDirection::HigherIsWorse,
                    // % of headcount lost to separations; 25% reaches the ceiling
                    normalize: NormalizeRule::LinearRange { lo: 0.0, hi: 25.0 },
                },
                WeightedFactor {
                    id: "separation_surge",
                    name: "Separation Surge",
                    weight: 0.25,
                    direction: FactorDirection::HigherIsWorse,
                    // FY2025/FY2024 separation ratio; parity scores 0, 3x the ceiling
                    normalize: NormalizeRule::LinearRange { lo: 1.0, hi: 3.0 },
                },
                WeightedFactor {
                    id: "retirement_eligible",
                    name: "Retirement Vulnerability",
                    weight: 0.20,
                    direction: FactorDirection::HigherIsWorse,
                    // % of workforce eligible to retire; 40% reaches the ceiling
                    normalize: NormalizeRule::LinearRange { lo: 0.0, hi: 40.0 },
                },
                WeightedFactor {
                    id: "rif_share",
                    name: "RIF Activity",
                    weight: 0.15,
                    direction: FactorDirection::HigherIsWorse,
                    // RIFs per 100 employees; 5% reaches the ceiling
                    normalize: NormalizeRule::LinearRange { lo: 0.0, hi: 5.0 },
                },
                WeightedFactor {
                    id: "quit_rate",
                    name: "Quit Rate",
                    weight: 0.10,
                    direction: FactorDirection::HigherIsWorse,
                    // % of separations that are voluntary quits; 60% reaches the ceiling
                    normalize: NormalizeRule::LinearRange { lo: 0.0, hi: 60.0 },
                },
            ],
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.factors.iter().map(|f| f.weight).sum()
    }
}
