//! `theraplan stock`: available quantity of one medication.

use serde::Serialize;
use tracing::instrument;

use theraplan_core::domain::MedicationId;

use crate::{cli::StockArgs, context::AppContext, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct StockReport {
    medication: MedicationId,
    scope: String,
    available: f64,
}

#[instrument(skip_all, fields(medication = %args.medication))]
pub fn execute(args: StockArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let scope = args.scope();
    let available = ctx.stock().available_quantity(args.medication, &scope)?;

    if output.is_json() {
        return output.json(&StockReport {
            medication: args.medication,
            scope: scope.to_string(),
            available,
        });
    }

    let line = format!(
        "Medication {}: {available} available ({scope})",
        args.medication
    );
    if available < 0.0 {
        output.warning(&format!("{line}, more issued than received"))?;
    } else {
        output.print(&line)?;
    }
    Ok(())
}
