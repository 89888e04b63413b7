use std::collections::HashMap;

use tracing::warn;

use crate::input::datasets::{AgencyBudgetRecord, AgencyStatRecord};
use crate::model::plausibility::{JoinedRecord, RatioBounds};

#[derive(Debug, Clone)]
pub struct Stage2Inputs<'a> {
    pub agencies: &'a [AgencyStatRecord],
    pub budgets: &'a [AgencyBudgetRecord],
    pub bounds: RatioBounds,
}

#[derive(Debug)]
pub struct Stage2Output {
    /// One entry per agency, in input order; `None` when no budget row
    /// joined on the agency code.
    pub joins: Vec<Option<JoinedRecord>>,
}

pub fn run_stage2(inputs: &Stage2Inputs<'_>) -> Stage2Output {
    let mut budget_by_code: HashMap<&str, f64> = HashMap::new();
    for budget in inputs.budgets {
        budget_by_code
            .entry(budget.code.as_str())
            .or_insert(budget.budget_authority);
    }

    let mut joins = Vec::with_capacity(inputs.agencies.len());
    for agency in inputs.agencies {
        let join = budget_by_code.get(agency.code.as_str()).map(|&budget| {
            JoinedRecord::screen(
                agency.code.clone(),
                budget,
                agency.employees as f64,
                &inputs.bounds,
            )
        });
        if let Some(record) = &join {
            if !record.valid {
                warn!(
                    "implausible budget-per-employee ratio for agency {}; flagging",
                    record.key
                );
            }
        }
        joins.push(join);
    }

    Stage2Output { joins }
}
