//! `theraplan plan`: a patient's expanded dosing calendars.

use tracing::instrument;

use crate::{
    cli::PatientArgs, context::AppContext, error::CliResult, output::OutputManager,
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[instrument(skip_all, fields(patient = %args.patient))]
pub fn execute(args: PatientArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let plans = ctx.therapies().plans(args.patient)?;

    if output.is_json() {
        return output.json(&plans);
    }

    if plans.is_empty() {
        output.info(&format!("Patient {} has no therapies", args.patient))?;
        return Ok(());
    }

    output.header(&format!("Therapy plans for patient {}", args.patient))?;
    for plan in &plans {
        output.print(&format!(
            "  #{} {} ({}): {} {} x {}/day, {} dosing day(s){}",
            plan.id,
            plan.medication.description,
            plan.medication.code,
            plan.quantity,
            plan.unit,
            plan.doses_per_day,
            plan.dates.len(),
            if plan.sms { ", SMS" } else { "" },
        ))?;
        if let Some(note) = plan.note.as_deref().filter(|n| !n.is_empty()) {
            output.print(&format!("      note: {note}"))?;
        }
        let dates: Vec<String> = plan
            .dates
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect();
        output.print(&format!("      {}", dates.join(", ")))?;
    }

    Ok(())
}
