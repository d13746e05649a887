use crate::cli::ScoreArgs;
use crate::config::PartialScoreConfig;
use crate::error::{CliError, Result};
use ph4rs::core::io::ligand::LigandFile;
use ph4rs::workflows::{self, evaluate::EvaluationReport};
use std::fmt::{self, Write};
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    let partial_config = PartialScoreConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!("Loading ligand from {:?}", &args.ligand);
    let mut ligand = LigandFile::load(&args.ligand).map_err(|e| CliError::FileParsing {
        path: args.ligand.clone(),
        source: e.into(),
    })?;

    let (_, report) = workflows::evaluate::run_from_config(&mut ligand, &config)?;
    let text = render(&report).map_err(anyhow::Error::from)?;
    print!("{}", text);

    if let Some(output) = &args.output {
        info!("Writing report to {:?}", output);
        report.write_csv_path(output)?;
        println!("Report written to {}", output.display());
    }
    Ok(())
}

fn render(report: &EvaluationReport) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Ligand: {}", report.ligand)?;
    writeln!(
        out,
        "{:>4}  {:<4}  {:>10}  {:>10}  {:>10}",
        "#", "Feat", "Candidates", "Nearest", "Penalty"
    )?;
    for entry in &report.entries {
        let nearest = entry
            .nearest_distance
            .map_or_else(|| "-".to_string(), |d| format!("{:.3}", d));
        writeln!(
            out,
            "{:>4}  {:<4}  {:>10}  {:>10}  {:>10.3}",
            entry.number, entry.feature, entry.candidates, nearest, entry.penalty
        )?;
    }
    Ok(out)
}
