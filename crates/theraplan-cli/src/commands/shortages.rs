//! `theraplan shortages`: medications a patient's therapies would run out of.

use serde::Serialize;
use tracing::instrument;

use theraplan_core::domain::{MedicationId, Shortage, start_of_day};

use crate::{
    cli::ProjectionArgs, commands::today, context::AppContext, error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ShortageReport<'a> {
    medication: MedicationId,
    description: &'a str,
    needed: f64,
    available: f64,
    deficit: f64,
}

impl<'a> From<&'a Shortage> for ShortageReport<'a> {
    fn from(shortage: &'a Shortage) -> Self {
        Self {
            medication: shortage.medication,
            description: &shortage.description,
            needed: shortage.needed,
            available: shortage.available,
            deficit: shortage.deficit(),
        }
    }
}

#[instrument(skip_all, fields(patient = %args.patient))]
pub fn execute(args: ProjectionArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let as_of = args.as_of.unwrap_or_else(today);
    let shortages = ctx
        .shortages()
        .shortages(args.patient, start_of_day(as_of))?;

    if output.is_json() {
        let report: Vec<ShortageReport<'_>> = shortages.iter().map(Into::into).collect();
        return output.json(&report);
    }

    if shortages.is_empty() {
        output.success(&format!(
            "Stock covers every remaining therapy of patient {} from {as_of}",
            args.patient
        ))?;
        return Ok(());
    }

    output.header(&format!(
        "Projected shortages for patient {} from {as_of}",
        args.patient
    ))?;
    for shortage in &shortages {
        output.warning(&format!(
            "{} ({}): needs {}, {} available, short by {}",
            shortage.description,
            shortage.medication,
            shortage.needed,
            shortage.available,
            shortage.deficit()
        ))?;
    }
    Ok(())
}
