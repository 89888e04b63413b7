/// Plausible range for a per-unit ratio computed across a dataset join.
#[derive(Debug, Clone, Copy)]
pub struct RatioBounds {
    pub lower: f64,
    pub upper: f64,
}

impl RatioBounds {
    /// Budget authority dollars per employee. Ratios outside this range
    /// almost always mean the budget row joined to the wrong headcount,
    /// not a real agency.
    pub fn budget_per_employee_v1() -> Self {
        Self {
            lower: 1_000.0,
            upper: 10_000_000.0,
        }
    }

    pub fn is_implausible(&self, numerator: f64, denominator: f64) -> bool {
        is_implausible_ratio(numerator, denominator, self.lower, self.upper)
    }
}

/// True when the joined ratio cannot be trusted: a non-positive
/// denominator, or a ratio outside `[lower, upper]`. Never an error —
/// whether to exclude or merely flag is the caller's decision.
pub fn is_implausible_ratio(numerator: f64, denominator: f64, lower: f64, upper: f64) -> bool {
    if denominator <= 0.0 {
        return true;
    }
    !(lower..=upper).contains(&(numerator / denominator))
}

/// A record joined across two datasets on a shared key, carrying its
/// plausibility verdict.
#[derive(Debug, Clone)]
pub struct JoinedRecord {
    pub key: String,
    pub numerator: f64,
    pub denominator: f64,
    pub valid: bool,
}

impl JoinedRecord {
    pub fn screen(key: String, numerator: f64, denominator: f64, bounds: &RatioBounds) -> Self {
        let valid = !bounds.is_implausible(numerator, denominator);
        Self {
            key,
            numerator,
            denominator,
            valid,
        }
    }

    /// The per-unit ratio, or `None` when the record failed screening.
    pub fn ratio(&self) -> Option<f64> {
        self.valid.then(|| self.numerator / self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_always_implausible() {
        for numerator in [-1e9, 0.0, 42.0, 1e12] {
            assert!(is_implausible_ratio(numerator, 0.0, 0.0, 1e18));
        }
    }

    #[test]
    fn test_negative_denominator_implausible() {
        assert!(is_implausible_ratio(100.0, -5.0, 0.0, 1e18));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(!is_implausible_ratio(1_000.0, 1.0, 1_000.0, 10_000.0));
        assert!(!is_implausible_ratio(10_000.0, 1.0, 1_000.0, 10_000.0));
        assert!(is_implausible_ratio(999.0, 1.0, 1_000.0, 10_000.0));
        assert!(is_implausible_ratio(10_001.0, 1.0, 1_000.0, 10_000.0));
    }

    #[test]
    fn test_budget_profile_screens_bad_joins() {
        let bounds = RatioBounds::budget_per_employee_v1();
        // $2M per head is plausible; $40B per head or $500 per head is not.
        assert!(!bounds.is_implausible(2e9, 1_000.0));
        assert!(bounds.is_implausible(4e13, 1_000.0));
        assert!(bounds.is_implausible(500_000.0, 1_000.0));
    }

    #[test]
    fn test_screened_record_carries_verdict() {
        let bounds = RatioBounds::budget_per_employee_v1();
        let good = JoinedRecord::screen("TR".to_string(), 2_000_000.0, 100.0, &bounds);
        assert!(good.valid);
        assert_eq!(good.ratio(), Some(20_000.0));

        let bad = JoinedRecord::screen("XX".to_string(), 2_000_000.0, 0.0, &bounds);
        assert!(!bad.valid);
        assert_eq!(bad.ratio(), None);
    }
}
