//! Handlers for reputation commands

use brikk_core::{Brikk, Rating};

use crate::cli::ReputationCommand;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the reputation subcommands
pub async fn handle_reputation(
    command: ReputationCommand,
    brikk: &Brikk,
    output: &OutputWriter,
) -> Result<()> {
    match command {
        ReputationCommand::Score { agent_id } => {
            let score = brikk.reputation().score(&agent_id).await?;
            output.value(&score)?;
        }
        ReputationCommand::Rate(args) => {
            let mut rating = Rating::new(args.agent_id, args.rater, args.score);
            if let Some(comment) = args.comment {
                rating = rating.with_comment(comment);
            }

            let receipt = brikk.reputation().rate(&rating).await?;
            output.value(&receipt)?;
            output.success("rating submitted");
        }
    }
    Ok(())
}
