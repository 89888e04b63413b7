use crate::input::datasets::AgencyStatRecord;
use crate::names::{canonicalize, short_form};

#[derive(Debug, Clone)]
pub struct ResolvedName {
    pub canonical: String,
    pub short: String,
}

#[derive(Debug)]
pub struct Stage1Output {
    pub names: Vec<ResolvedName>,
}

pub fn run_stage1(agencies: &[AgencyStatRecord]) -> Stage1Output {
    let mut names = Vec::with_capacity(agencies.len());
    for agency in agencies {
        let canonical = canonicalize(&agency.name);
        let short = short_form(&canonical);
        names.push(ResolvedName { canonical, short });
    }
    Stage1Output { names }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency(code: &str, name: &str) -> AgencyStatRecord {
        AgencyStatRecord {
            code: code.to_string(),
            name: name.to_string(),
            employees: 100,
            seps2025: 0,
            seps2024: 0,
            retirement_eligible_pct: None,
            rifs: 0,
            quits: 0,
            avg_salary: None,
        }
    }

    #[test]
    fn test_names_resolved_in_input_order() {
        let agencies = vec![
            agency("IN", "DEPARTMENT OF INTERIOR"),
            agency("NN", "Nat Aeronautics And Space Administration"),
        ];
        let out = run_stage1(&agencies);
        assert_eq!(out.names[0].canonical, "Department of the Interior");
        assert_eq!(out.names[0].short, "Interior");
        assert_eq!(
            out.names[1].canonical,
            "National Aeronautics and Space Administration"
        );
        assert_eq!(out.names[1].short, "NASA");
    }
}
