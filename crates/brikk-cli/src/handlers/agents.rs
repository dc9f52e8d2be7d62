//! Handlers for agent registry commands

use brikk_core::{AgentRegistration, Brikk};

use crate::cli::AgentsCommand;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the agents subcommands
pub async fn handle_agents(
    command: AgentsCommand,
    brikk: &Brikk,
    output: &OutputWriter,
) -> Result<()> {
    match command {
        AgentsCommand::Register(args) => {
            let mut registration = AgentRegistration::new(args.agent_id);
            if let Some(name) = args.name {
                registration = registration.with_name(name);
            }
            for capability in args.capabilities {
                registration = registration.with_capability(capability);
            }

            let agent = brikk.agents().register(&registration).await?;
            output.value(&agent)?;
            output.success(&format!("registered agent {}", agent.agent_id));
        }
        AgentsCommand::Get { agent_id } => {
            let agent = brikk.agents().get(&agent_id).await?;
            output.value(&agent)?;
        }
        AgentsCommand::List => {
            let agents = brikk.agents().list().await?;
            output.value(&agents)?;
            output.info(&format!("{} agents registered", agents.len()));
        }
        AgentsCommand::Deregister { agent_id } => {
            brikk.agents().deregister(&agent_id).await?;
            output.success(&format!("deregistered agent {}", agent_id));
        }
    }
    Ok(())
}
