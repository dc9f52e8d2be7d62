//! Handlers for economy commands

use brikk_core::{Brikk, TransferRequest};

use crate::cli::EconomyCommand;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the economy subcommands
pub async fn handle_economy(
    command: EconomyCommand,
    brikk: &Brikk,
    output: &OutputWriter,
) -> Result<()> {
    match command {
        EconomyCommand::Transfer(args) => {
            let mut request = TransferRequest::new(args.from, args.to, args.amount);
            if let Some(currency) = args.currency {
                request = request.with_currency(currency);
            }

            let transaction = brikk.economy().transfer(&request).await?;
            output.value(&transaction)?;
            output.success("transfer recorded");
        }
        EconomyCommand::Balance { agent_id } => {
            let balance = brikk.economy().balance(&agent_id).await?;
            output.value(&balance)?;
        }
        EconomyCommand::Transactions { agent_id } => {
            let transactions = brikk.economy().transactions(&agent_id).await?;
            output.value(&transactions)?;
            output.info(&format!("{} transactions", transactions.len()));
        }
    }
    Ok(())
}
