use tracing::warn;

use crate::input::datasets::AgencyStatRecord;
use crate::model::histogram::{SalaryBand, percentile_of};

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub agencies: &'a [AgencyStatRecord],
    pub bands: &'a [SalaryBand],
}

#[derive(Debug)]
pub struct Stage4Output {
    /// Estimated percentile of each agency's average salary within the
    /// government-wide distribution; `None` when the salary or the
    /// distribution is unavailable.
    pub salary_percentiles: Vec<Option<u8>>,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Stage4Output {
    // percentile_of returns 0 for an empty distribution; distinguish
    // "unknown" here by checking the total up front.
    let total: u64 = inputs.bands.iter().map(|b| b.count).sum();
    if total == 0 {
        warn!("salary distribution is empty; percentiles unavailable");
    }

    let mut salary_percentiles = Vec::with_capacity(inputs.agencies.len());
    for agency in inputs.agencies {
        let percentile = match agency.avg_salary {
            Some(salary) if total > 0 && salary >= 0.0 => {
                Some(percentile_of(salary, inputs.bands))
            }
            _ => None,
        };
        salary_percentiles.push(percentile);
    }

    Stage4Output { salary_percentiles }
}
