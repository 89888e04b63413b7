#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Critical,
    Elevated,
    Low,
    Unscored,
}

/// Tier cutoffs match the dashboard's published bands: above 60 is
/// critical, above 30 elevated.
pub fn tier_of(score: Option<u8>) -> RiskTier {
    match score {
        None => RiskTier::Unscored,
        Some(s) if s > 60 => RiskTier::Critical,
        Some(s) if s > 30 => RiskTier::Elevated,
        Some(_) => RiskTier::Low,
    }
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::Elevated => "elevated",
            RiskTier::Low => "low",
            RiskTier::Unscored => "unscored",
        }
    }
}

pub fn tier_order() -> &'static [RiskTier] {
    &[
        RiskTier::Critical,
        RiskTier::Elevated,
        RiskTier::Low,
        RiskTier::Unscored,
    ]
}
