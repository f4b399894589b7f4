//! `theraplan low-stock`: medications under their reorder threshold.

use tracing::instrument;

use crate::{cli::LowStockArgs, context::AppContext, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: LowStockArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let scope = args.scope();
    let low = ctx.stock().below_minimum(&scope)?;

    if output.is_json() {
        return output.json(&low);
    }

    if low.is_empty() {
        output.success(&format!("Every medication is at or above its minimum ({scope})"))?;
        return Ok(());
    }

    output.header(&format!("Below minimum quantity ({scope})"))?;
    for level in &low {
        output.warning(&format!(
            "{} ({}): {} available, minimum {}",
            level.description, level.medication, level.available, level.min_quantity
        ))?;
    }
    Ok(())
}
