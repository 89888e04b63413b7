use crate::input::datasets::AgencyStatRecord;
use crate::model::factors::composite_score;
use crate::model::weights::DisruptionWeights;

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub agencies: &'a [AgencyStatRecord],
    pub weights: &'a DisruptionWeights,
}

#[derive(Debug)]
pub struct Stage3Output {
    /// Per agency, aligned with the weight profile's factor order.
    pub raw_factors: Vec<Vec<Option<f64>>>,
    pub scores: Vec<Option<u8>>,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> Stage3Output {
    debug_assert_eq!(
        inputs
            .weights
            .factors
            .iter()
            .map(|f| f.id)
            .collect::<Vec<_>>(),
        vec![
            "reduction_rate",
            "separation_surge",
            "retirement_eligible",
            "rif_share",
            "quit_rate",
        ],
        "raw factor derivation is aligned with the fy2025_v1 profile"
    );

    let mut raw_factors = Vec::with_capacity(inputs.agencies.len());
    let mut scores = Vec::with_capacity(inputs.agencies.len());
    for agency in inputs.agencies {
        let raw = derive_raw_factors(agency);
        let score = composite_score(&raw, &inputs.weights.factors);
        raw_factors.push(raw);
        scores.push(score);
    }

    Stage3Output {
        raw_factors,
        scores,
    }
}

/// Derive the raw factor values from tabulated counts. A zero denominator
/// makes the factor unknown (`None`), never zero — the composite
/// renormalizes around it.
// Order matches DisruptionWeights::fy2025_v1().
fn derive_raw_factors(agency: &AgencyStatRecord) -> Vec<Option<f64>> {
    let employees = agency.employees as f64;
    let reduction_rate =
        (agency.employees > 0).then(|| 100.0 * agency.seps2025 as f64 / employees);
    let separation_surge =
        (agency.seps2024 > 0).then(|| agency.seps2025 as f64 / agency.seps2024 as f64);
    let retirement_eligible = agency.retirement_eligible_pct;
    let rif_share = (agency.employees > 0).then(|| 100.0 * agency.rifs as f64 / employees);
    let quit_rate =
        (agency.seps2025 > 0).then(|| 100.0 * agency.quits as f64 / agency.seps2025 as f64);

    vec![
        reduction_rate,
        separation_surge,
        retirement_eligible,
        rif_share,
        quit_rate,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency(
        employees: u64,
        seps2025: u64,
        seps2024: u64,
        retirement: Option<f64>,
        rifs: u64,
        quits: u64,
    ) -> AgencyStatRecord {
        AgencyStatRecord {
            code: "XX".to_string(),
            name: "Test Agency".to_string(),
            employees,
            seps2025,
            seps2024,
            retirement_eligible_pct: retirement,
            rifs,
            quits,
            avg_salary: None,
        }
    }

    #[test]
    fn test_raw_factors_from_counts() {
        let agencies = vec![agency(10_000, 1_000, 500, Some(20.0), 100, 300)];
        let weights = DisruptionWeights::fy2025_v1();
        let out = run_stage3(&Stage3Inputs {
            agencies: &agencies,
            weights: &weights,
        });
        let raw = &out.raw_factors[0];
        assert_eq!(raw[0], Some(10.0)); // 1000 / 10000 separations
        assert_eq!(raw[1], Some(2.0)); // 1000 / 500 surge
        assert_eq!(raw[2], Some(20.0));
        assert_eq!(raw[3], Some(1.0)); // 100 / 10000 RIF share
        assert_eq!(raw[4], Some(30.0)); // 300 / 1000 quits
        assert!(out.scores[0].is_some());
    }

    #[test]
    fn test_zero_denominators_yield_unknown_factors() {
        let agencies = vec![agency(0, 0, 0, None, 0, 0)];
        let weights = DisruptionWeights::fy2025_v1();
        let out = run_stage3(&Stage3Inputs {
            agencies: &agencies,
            weights: &weights,
        });
        assert!(out.raw_factors[0].iter().all(|f| f.is_none()));
        assert_eq!(out.scores[0], None);
    }

    #[test]
    fn test_missing_baseline_renormalizes_not_zeroes() {
        // No FY2024 separations: the surge factor is unknown. The score
        // must come out higher than if surge were silently counted as 0.
        let with_baseline = vec![agency(10_000, 2_000, 2_000, Some(30.0), 200, 600)];
        let without_baseline = vec![agency(10_000, 2_000, 0, Some(30.0), 200, 600)];
        let weights = DisruptionWeights::fy2025_v1();
        let scored_with = run_stage3(&Stage3Inputs {
            agencies: &with_baseline,
            weights: &weights,
        });
        let scored_without = run_stage3(&Stage3Inputs {
            agencies: &without_baseline,
            weights: &weights,
        });
        // Parity surge normalizes to 0, so dropping the factor entirely
        // (and renormalizing) raises the composite.
        assert!(scored_without.scores[0] > scored_with.scores[0]);
    }
}
