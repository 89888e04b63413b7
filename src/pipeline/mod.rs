pub mod stage1_names;
pub mod stage2_joins;
pub mod stage3_scores;
pub mod stage4_percentiles;
pub mod stage5_report;
