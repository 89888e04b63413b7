use crate::report::SummaryData;

pub fn render_report_text(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Federal Workforce Disruption Report\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Coverage\n");
    out.push_str(&format!(
        "Agencies: {} (scored: {})\n\n",
        summary.n_agencies, summary.n_scored
    ));

    out.push_str("2. Disruption scores\n");
    match (summary.mean_score, summary.median_score, summary.p90_score) {
        (Some(mean), Some(median), Some(p90)) => {
            out.push_str(&format!(
                "Mean: {mean:.1}\nMedian: {median:.1}\nP90: {p90:.1}\n"
            ));
        }
        _ => out.push_str("No scorable agencies in this batch.\n"),
    }
    if let Some(highest) = &summary.highest_risk {
        out.push_str(&format!(
            "Highest risk: {} ({}/100)\n",
            highest.name, highest.score
        ));
    }
    out.push_str(&format!(
        "Critical zone (>60): {} agencies\n\n",
        summary.critical_count
    ));

    out.push_str("3. Tier breakdown\n");
    for tier in &summary.tiers {
        out.push_str(&format!(
            "{}: {} ({:.1}%)\n",
            tier.tier,
            tier.count,
            tier.fraction * 100.0
        ));
    }
    out.push('\n');

    out.push_str("4. Data quality\n");
    for flag in &summary.flags {
        if flag.count > 0 {
            out.push_str(&format!(
                "{}: {} ({:.1}%)\n",
                flag.flag,
                flag.count,
                flag.fraction * 100.0
            ));
        }
    }

    out
}
