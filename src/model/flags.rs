#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFlag {
    ZeroHeadcount,
    NoUsableFactors,
    MissingBudgetJoin,
    ImplausibleBudgetRatio,
    MissingSalary,
}

pub fn flag_order() -> &'static [MetricFlag] {
    &[
        MetricFlag::ZeroHeadcount,
        MetricFlag::NoUsableFactors,
        MetricFlag::MissingBudgetJoin,
        MetricFlag::ImplausibleBudgetRatio,
        MetricFlag::MissingSalary,
    ]
}

impl MetricFlag {
    pub fn label(self) -> &'static str {
        match self {
            MetricFlag::ZeroHeadcount => "ZERO_HEADCOUNT",
            MetricFlag::NoUsableFactors => "NO_USABLE_FACTORS",
            MetricFlag::MissingBudgetJoin => "MISSING_BUDGET_JOIN",
            MetricFlag::ImplausibleBudgetRatio => "IMPLAUSIBLE_BUDGET_RATIO",
            MetricFlag::MissingSalary => "MISSING_SALARY",
        }
    }
}
