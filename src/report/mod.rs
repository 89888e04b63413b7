use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::model::flags::flag_order;
use crate::model::tiers::{RiskTier, tier_order};
use crate::pipeline::stage5_report::EnrichedAgency;

pub mod json;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Per-agency records plus the summary.
    Full,
    /// Summary only.
    Summary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStat {
    pub tier: String,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagStat {
    pub flag: String,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestRisk {
    pub code: String,
    pub name: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub n_agencies: usize,
    pub n_scored: usize,
    pub mean_score: Option<f64>,
    pub median_score: Option<f64>,
    pub p90_score: Option<f64>,
    pub critical_count: usize,
    pub highest_risk: Option<HighestRisk>,
    pub tiers: Vec<TierStat>,
    pub flags: Vec<FlagStat>,
}

pub fn build_summary(enriched: &[EnrichedAgency]) -> SummaryData {
    let scores: Vec<f64> = enriched
        .iter()
        .filter_map(|a| a.risk_score.map(f64::from))
        .collect();

    let highest_risk = enriched
        .iter()
        .filter_map(|a| a.risk_score.map(|s| (a, s)))
        .max_by(|(a, sa), (b, sb)| sa.cmp(sb).then_with(|| b.code.cmp(&a.code)))
        .map(|(a, score)| HighestRisk {
            code: a.code.clone(),
            name: a.name.clone(),
            score,
        });

    let n = enriched.len();
    let tiers = tier_order()
        .iter()
        .map(|&tier| {
            let count = enriched
                .iter()
                .filter(|a| a.tier == tier.label())
                .count();
            TierStat {
                tier: tier.label().to_string(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    let flags = flag_order()
        .iter()
        .map(|&flag| {
            let count = enriched
                .iter()
                .filter(|a| a.flags.iter().any(|f| f == flag.label()))
                .count();
            FlagStat {
                flag: flag.label().to_string(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    SummaryData {
        tool_name: "fedtrack-metrics".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        n_agencies: n,
        n_scored: scores.len(),
        mean_score: mean(&scores),
        median_score: (!scores.is_empty()).then(|| median(&scores)),
        p90_score: (!scores.is_empty()).then(|| p90(&scores)),
        critical_count: enriched
            .iter()
            .filter(|a| a.tier == RiskTier::Critical.label())
            .count(),
        highest_risk,
        tiers,
        flags,
    }
}

pub fn write_reports(
    enriched: &[EnrichedAgency],
    summary: &SummaryData,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    if mode == ReportMode::Full {
        json::write_enriched_json(&out_dir.join("agency-risk.json"), enriched)?;
    }
    json::write_summary_json(&out_dir.join("summary.json"), summary)?;
    fs::write(out_dir.join("report.txt"), text::render_report_text(summary))?;
    Ok(())
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}
