//! `theraplan demand`: remaining medication demand of a patient.

use tracing::instrument;

use theraplan_core::domain::start_of_day;

use crate::{
    cli::ProjectionArgs, commands::today, context::AppContext, error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(patient = %args.patient))]
pub fn execute(args: ProjectionArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let as_of = args.as_of.unwrap_or_else(today);
    let demand = ctx
        .shortages()
        .demand(args.patient, start_of_day(as_of))?;

    if output.is_json() {
        return output.json(&demand);
    }

    if demand.is_empty() {
        output.info(&format!(
            "No remaining doses for patient {} from {as_of}",
            args.patient
        ))?;
        return Ok(());
    }

    output.header(&format!(
        "Remaining demand for patient {} from {as_of}",
        args.patient
    ))?;
    for item in &demand {
        output.print(&format!(
            "  {} ({}): {} over {} dosing day(s)",
            item.description, item.medication, item.needed, item.remaining_dates
        ))?;
    }
    Ok(())
}
