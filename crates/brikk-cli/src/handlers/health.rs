//! Handler for the health command

use brikk_core::Brikk;

use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the health command
pub async fn handle_health(brikk: &Brikk, output: &OutputWriter) -> Result<()> {
    output.info(&format!("Checking {}", brikk.config().base_url));

    let status = brikk.health().check().await?;
    output.value(&status)?;

    if status.is_healthy() {
        output.success("service is healthy");
    }
    Ok(())
}
