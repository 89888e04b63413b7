use serde::Serialize;

use crate::input::datasets::AgencyStatRecord;
use crate::model::flags::{MetricFlag, flag_order};
use crate::model::plausibility::JoinedRecord;
use crate::model::tiers::tier_of;
use crate::pipeline::stage1_names::ResolvedName;

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub agencies: &'a [AgencyStatRecord],
    pub names: &'a [ResolvedName],
    pub joins: &'a [Option<JoinedRecord>],
    pub scores: &'a [Option<u8>],
    pub salary_percentiles: &'a [Option<u8>],
}

/// One fully derived agency record, in the shape the dashboard's data
/// files use.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAgency {
    pub code: String,
    pub name: String,
    pub short_name: String,
    pub employees: u64,
    pub risk_score: Option<u8>,
    pub tier: String,
    pub salary_percentile: Option<u8>,
    pub budget_per_employee: Option<f64>,
    pub flags: Vec<String>,
}

pub fn run_stage5(inputs: &Stage5Inputs<'_>) -> Vec<EnrichedAgency> {
    let n = inputs.agencies.len();
    debug_assert_eq!(inputs.names.len(), n);
    debug_assert_eq!(inputs.joins.len(), n);
    debug_assert_eq!(inputs.scores.len(), n);
    debug_assert_eq!(inputs.salary_percentiles.len(), n);

    let mut out = Vec::with_capacity(n);
    for (idx, agency) in inputs.agencies.iter().enumerate() {
        let join = inputs.joins[idx].as_ref();
        let score = inputs.scores[idx];
        let percentile = inputs.salary_percentiles[idx];

        let flags = collect_flags(agency, join, score);
        out.push(EnrichedAgency {
            code: agency.code.clone(),
            name: inputs.names[idx].canonical.clone(),
            short_name: inputs.names[idx].short.clone(),
            employees: agency.employees,
            risk_score: score,
            tier: tier_of(score).label().to_string(),
            salary_percentile: percentile,
            budget_per_employee: join.and_then(|j| j.ratio()),
            flags,
        });
    }
    out
}

fn collect_flags(
    agency: &AgencyStatRecord,
    join: Option<&JoinedRecord>,
    score: Option<u8>,
) -> Vec<String> {
    let mut flags = Vec::new();
    for &flag in flag_order() {
        let raised = match flag {
            MetricFlag::ZeroHeadcount => agency.employees == 0,
            MetricFlag::NoUsableFactors => score.is_none(),
            MetricFlag::MissingBudgetJoin => join.is_none(),
            MetricFlag::ImplausibleBudgetRatio => join.is_some_and(|j| !j.valid),
            MetricFlag::MissingSalary => agency.avg_salary.is_none(),
        };
        if raised {
            flags.push(flag.label().to_string());
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plausibility::RatioBounds;

    fn agency(code: &str, employees: u64, avg_salary: Option<f64>) -> AgencyStatRecord {
        AgencyStatRecord {
            code: code.to_string(),
            name: code.to_string(),
            employees,
            seps2025: 0,
            seps2024: 0,
            retirement_eligible_pct: None,
            rifs: 0,
            quits: 0,
            avg_salary,
        }
    }

    fn name(canonical: &str, short: &str) -> ResolvedName {
        ResolvedName {
            canonical: canonical.to_string(),
            short: short.to_string(),
        }
    }

    #[test]
    fn test_enriched_record_assembly() {
        let agencies = vec![agency("TR", 1_000, Some(95_000.0))];
        let names = vec![name("Department of the Treasury", "Treasury")];
        let bounds = RatioBounds::budget_per_employee_v1();
        let joins = vec![Some(JoinedRecord::screen(
            "TR".to_string(),
            2e9,
            1_000.0,
            &bounds,
        ))];
        let scores = vec![Some(72u8)];
        let percentiles = vec![Some(81u8)];

        let enriched = run_stage5(&Stage5Inputs {
            agencies: &agencies,
            names: &names,
            joins: &joins,
            scores: &scores,
            salary_percentiles: &percentiles,
        });

        let record = &enriched[0];
        assert_eq!(record.name, "Department of the Treasury");
        assert_eq!(record.short_name, "Treasury");
        assert_eq!(record.tier, "critical");
        assert_eq!(record.budget_per_employee, Some(2e6));
        assert!(record.flags.is_empty());
    }

    #[test]
    fn test_flags_follow_stable_order() {
        let agencies = vec![agency("XX", 0, None)];
        let names = vec![name("Nowhere Agency", "Nowhere Agency")];
        let joins = vec![None];
        let scores = vec![None];
        let percentiles = vec![None];

        let enriched = run_stage5(&Stage5Inputs {
            agencies: &agencies,
            names: &names,
            joins: &joins,
            scores: &scores,
            salary_percentiles: &percentiles,
        });

        assert_eq!(
            enriched[0].flags,
            vec![
                "ZERO_HEADCOUNT",
                "NO_USABLE_FACTORS",
                "MISSING_BUDGET_JOIN",
                "MISSING_SALARY",
            ]
        );
        assert_eq!(enriched[0].tier, "unscored");
    }

    #[test]
    fn test_implausible_join_withholds_ratio() {
        let agencies = vec![agency("XX", 2, Some(80_000.0))];
        let names = vec![name("Tiny Agency", "Tiny Agency")];
        let bounds = RatioBounds::budget_per_employee_v1();
        let joins = vec![Some(JoinedRecord::screen(
            "XX".to_string(),
            9e13,
            2.0,
            &bounds,
        ))];
        let scores = vec![Some(10u8)];
        let percentiles = vec![Some(50u8)];

        let enriched = run_stage5(&Stage5Inputs {
            agencies: &agencies,
            names: &names,
            joins: &joins,
            scores: &scores,
            salary_percentiles: &percentiles,
        });

        assert_eq!(enriched[0].budget_per_employee, None);
        assert!(
            enriched[0]
                .flags
                .iter()
                .any(|f| f == "IMPLAUSIBLE_BUDGET_RATIO")
        );
    }
}
