//! Handler for the send command

use brikk_core::Brikk;
use serde_json::Value;

use crate::cli::SendArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;

/// Handle the send command
pub async fn handle_send(args: SendArgs, brikk: &Brikk, output: &OutputWriter) -> Result<()> {
    let payload: Value = serde_json::from_str(&args.payload)
        .map_err(|e| Error::InvalidPayload(format!("{}: {}", e, args.payload)))?;

    output.info(&format!(
        "Sending {} message {} -> {}",
        args.message_type, args.sender, args.recipient
    ));

    let receipt = brikk
        .coordination()
        .send(
            &args.sender,
            &args.recipient,
            &args.message_type,
            payload,
            args.ttl_ms,
        )
        .await?;

    output.value(&receipt)?;
    output.success("message accepted");
    Ok(())
}
