use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fedtrack_metrics::input::InputError;
use fedtrack_metrics::input::datasets::load_datasets;
use fedtrack_metrics::model::plausibility::RatioBounds;
use fedtrack_metrics::model::weights::DisruptionWeights;
use fedtrack_metrics::pipeline::stage1_names::run_stage1;
use fedtrack_metrics::pipeline::stage2_joins::{Stage2Inputs, run_stage2};
use fedtrack_metrics::pipeline::stage3_scores::{Stage3Inputs, run_stage3};
use fedtrack_metrics::pipeline::stage4_percentiles::{Stage4Inputs, run_stage4};
use fedtrack_metrics::pipeline::stage5_report::{Stage5Inputs, run_stage5};
use fedtrack_metrics::report::{ReportError, ReportMode, build_summary, write_reports};

#[derive(Debug, Parser)]
#[command(name = "fedtrack-metrics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute derived metrics from raw workforce datasets.
    Run {
        /// Directory holding agency-stats, salary-distribution and
        /// agency-budgets JSON files (optionally gzipped).
        #[arg(long)]
        input: PathBuf,
        /// Output directory for the derived JSON and text reports.
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value = "full")]
        mode: OutputMode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    Full,
    Summary,
}

impl From<OutputMode> for ReportMode {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Full => ReportMode::Full,
            OutputMode::Summary => ReportMode::Summary,
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    match cli.command {
        Command::Run { input, out, mode } => {
            let bundle = load_datasets(&input)?;

            let stage1 = run_stage1(&bundle.agencies);
            let stage2 = run_stage2(&Stage2Inputs {
                agencies: &bundle.agencies,
                budgets: &bundle.budgets,
                bounds: RatioBounds::budget_per_employee_v1(),
            });
            let weights = DisruptionWeights::fy2025_v1();
            let stage3 = run_stage3(&Stage3Inputs {
                agencies: &bundle.agencies,
                weights: &weights,
            });
            let stage4 = run_stage4(&Stage4Inputs {
                agencies: &bundle.agencies,
                bands: &bundle.salary_bands,
            });
            let enriched = run_stage5(&Stage5Inputs {
                agencies: &bundle.agencies,
                names: &stage1.names,
                joins: &stage2.joins,
                scores: &stage3.scores,
                salary_percentiles: &stage4.salary_percentiles,
            });

            let summary = build_summary(&enriched);
            write_reports(&enriched, &summary, &out, mode.into())?;
            info!(
                "wrote reports for {} agencies to {}",
                enriched.len(),
                out.display()
            );
            Ok(())
        }
    }
}
