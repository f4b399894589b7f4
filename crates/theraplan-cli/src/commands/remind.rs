//! `theraplan remind`: replace a patient's pending SMS reminders.

use tracing::instrument;

use crate::{
    cli::RemindArgs,
    commands::today,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[instrument(skip_all, fields(patient = %args.patient))]
pub fn execute(args: RemindArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let actor = args.actor.trim();
    if actor.is_empty() {
        return Err(CliError::InvalidInput {
            message: "--actor must name the user scheduling the reminders".into(),
        });
    }

    let today = args.today.unwrap_or_else(today);
    let service = ctx.reminders()?;
    service.schedule(args.patient, actor, today)?;
    let pending = service.pending(args.patient)?;

    if output.is_json() {
        return output.json(&pending);
    }

    if pending.is_empty() {
        output.info(&format!(
            "No reminders pending for patient {} after {today}",
            args.patient
        ))?;
        return Ok(());
    }

    output.success(&format!(
        "{} reminder(s) pending for patient {}",
        pending.len(),
        args.patient
    ))?;
    for reminder in &pending {
        output.print(&format!(
            "  {} -> {}: {}",
            reminder.scheduled_at.format(TIME_FORMAT),
            reminder.recipient,
            reminder.body
        ))?;
    }
    Ok(())
}
