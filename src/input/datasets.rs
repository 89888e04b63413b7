use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::input::{InputError, find_dataset_path, open_maybe_gz};
use crate::model::histogram::{BAND_ORDER, SalaryBand, bands_from_counts};

/// Raw per-agency workforce counts from the upstream extract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyStatRecord {
    pub code: String,
    pub name: String,
    pub employees: u64,
    #[serde(default)]
    pub seps2025: u64,
    #[serde(default)]
    pub seps2024: u64,
    #[serde(default)]
    pub retirement_eligible_pct: Option<f64>,
    #[serde(default)]
    pub rifs: u64,
    #[serde(default)]
    pub quits: u64,
    #[serde(default)]
    pub avg_salary: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryBracketCount {
    pub bracket: String,
    pub employees: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyBudgetRecord {
    pub code: String,
    #[serde(default)]
    pub budget_authority: f64,
}

#[derive(Debug)]
pub struct DatasetBundle {
    pub agencies: Vec<AgencyStatRecord>,
    pub salary_bands: Vec<SalaryBand>,
    pub budgets: Vec<AgencyBudgetRecord>,
}

pub fn load_datasets(input_dir: &Path) -> Result<DatasetBundle, InputError> {
    let agencies_path = find_dataset_path(input_dir, "agency-stats")?;
    let salaries_path = find_dataset_path(input_dir, "salary-distribution")?;
    let budgets_path = find_dataset_path(input_dir, "agency-budgets")?;

    info!(
        "discovered input files: agencies={}, salaries={}, budgets={}",
        agencies_path.display(),
        salaries_path.display(),
        budgets_path.display()
    );

    let agencies = screen_agencies(read_json(&agencies_path)?);
    if agencies.is_empty() {
        return Err(InputError::InvalidInput(
            "no usable agency records after screening".to_string(),
        ));
    }

    let brackets: Vec<SalaryBracketCount> = read_json(&salaries_path)?;
    let salary_bands = bands_from_brackets(&brackets);

    let budgets: Vec<AgencyBudgetRecord> = read_json(&budgets_path)?;

    Ok(DatasetBundle {
        agencies,
        salary_bands,
        budgets,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let reader = open_maybe_gz(path)?;
    serde_json::from_reader(reader).map_err(|source| InputError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// A malformed record is skipped with a warning, never an abort; on
/// duplicate codes the first record wins.
fn screen_agencies(records: Vec<AgencyStatRecord>) -> Vec<AgencyStatRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        if record.code.trim().is_empty() || record.name.trim().is_empty() {
            warn!("agency record with empty code or name; skipping");
            continue;
        }
        if !seen.insert(record.code.clone()) {
            warn!(
                "duplicate agency code {}; keeping first occurrence",
                record.code
            );
            continue;
        }
        out.push(record);
    }
    out
}

fn bands_from_brackets(brackets: &[SalaryBracketCount]) -> Vec<SalaryBand> {
    let known: HashSet<&str> = BAND_ORDER.iter().map(|&(label, _)| label).collect();
    let mut counts: HashMap<String, u64> = HashMap::new();
    for bracket in brackets {
        if !known.contains(bracket.bracket.as_str()) {
            warn!("unknown salary bracket label {:?}; ignoring", bracket.bracket);
            continue;
        }
        *counts.entry(bracket.bracket.clone()).or_insert(0) += bracket.employees;
    }
    bands_from_counts(&counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_inputs(dir: &Path, agencies: &str, salaries: &str, budgets: &str) {
        std::fs::write(dir.join("agency-stats.json"), agencies).unwrap();
        std::fs::write(dir.join("salary-distribution.json"), salaries).unwrap();
        std::fs::write(dir.join("agency-budgets.json"), budgets).unwrap();
    }

    #[test]
    fn test_load_datasets_happy_path() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(
            dir.path(),
            r#"[{"code":"TR","name":"Department Of Treasury","employees":90000,
                 "seps2025":9000,"seps2024":4500,"retirementEligiblePct":22.5,
                 "rifs":300,"quits":2000,"avgSalary":95000}]"#,
            r#"[{"bracket":"Under $30K","employees":10},{"bracket":"$200K+","employees":5}]"#,
            r#"[{"code":"TR","budgetAuthority":1500000000.0}]"#,
        );
        let bundle = load_datasets(dir.path()).unwrap();
        assert_eq!(bundle.agencies.len(), 1);
        assert_eq!(bundle.agencies[0].seps2024, 4500);
        assert_eq!(bundle.agencies[0].retirement_eligible_pct, Some(22.5));
        assert_eq!(bundle.salary_bands.len(), BAND_ORDER.len());
        assert_eq!(bundle.salary_bands[0].count, 10);
        assert_eq!(bundle.budgets.len(), 1);
    }

    #[test]
    fn test_screening_skips_bad_and_duplicate_records() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(
            dir.path(),
            r#"[{"code":"TR","name":"Treasury","employees":10},
                {"code":"","name":"Nameless","employees":5},
                {"code":"TR","name":"Treasury Again","employees":7}]"#,
            r#"[]"#,
            r#"[]"#,
        );
        let bundle = load_datasets(dir.path()).unwrap();
        assert_eq!(bundle.agencies.len(), 1);
        assert_eq!(bundle.agencies[0].name, "Treasury");
    }

    #[test]
    fn test_unknown_bracket_labels_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(
            dir.path(),
            r#"[{"code":"TR","name":"Treasury","employees":10}]"#,
            r#"[{"bracket":"$30K-$50K","employees":4},{"bracket":"Nonsense","employees":99}]"#,
            r#"[]"#,
        );
        let bundle = load_datasets(dir.path()).unwrap();
        let total: u64 = bundle.salary_bands.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(
            dir.path(),
            r#"[{"code":"GS","name":"General Services Administration","employees":12000}]"#,
            r#"[]"#,
            r#"[]"#,
        );
        let bundle = load_datasets(dir.path()).unwrap();
        let agency = &bundle.agencies[0];
        assert_eq!(agency.seps2025, 0);
        assert_eq!(agency.retirement_eligible_pct, None);
        assert_eq!(agency.avg_salary, None);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path(), "not json", "[]", "[]");
        let err = load_datasets(dir.path()).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }
}
