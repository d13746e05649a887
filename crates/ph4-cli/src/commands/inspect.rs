use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use ph4rs::core::constraints::constraint::Constraint;
use ph4rs::core::constraints::registry::{ConstraintRegistry, FeatureTally};
use ph4rs::core::io::constraints::{ConstraintFile, ConstraintFormat};
use std::fmt::{self, Write};
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Reading constraints from {:?}", &args.constraints);
    let mut registry = ConstraintRegistry::new();
    let (constraints, format) = ConstraintFile::read_from_path(&args.constraints, &mut registry, true)
        .map_err(|e| CliError::FileParsing {
            path: args.constraints.clone(),
            source: e.into(),
        })?;

    let text = render(&constraints, format, registry.tally()).map_err(anyhow::Error::from)?;
    print!("{}", text);
    Ok(())
}

fn render(
    constraints: &[Constraint],
    format: ConstraintFormat,
    tally: &FeatureTally,
) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Format: {}", format)?;
    writeln!(out, "Constraints: {}", constraints.len())?;
    for (i, c) in constraints.iter().enumerate() {
        let law = if c.is_exponential() { "exp" } else { "quad" };
        writeln!(out, "{:>4}  {}  {:<4}  {}", i + 1, c.feature(), law, c)?;
    }
    if tally.total() > 0 {
        writeln!(out, "Per-feature count:")?;
        for (feature, count) in tally.iter().filter(|&(_, n)| n > 0) {
            writeln!(out, "  {:<4} {:>3}  {}", feature.code(), count, feature.description())?;
        }
    }
    Ok(out)
}
