//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. Every
//! connection flag falls back to its `BRIKK_*` environment variable, and
//! anything still unset is resolved by the core configuration layer.

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Brikk CLI - drive the Brikk coordination API from the terminal
///
/// A thin driver over the Brikk SDK: register and inspect agents, send
/// coordination messages, move value between agents, and query reputation
/// and service health.
#[derive(Parser, Debug)]
#[command(
    name = "brikk",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "pretty")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse arguments from the process command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color
    }

    /// Effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Connection settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the coordination API
    #[arg(long, global = true, env = "BRIKK_BASE_URL")]
    pub base_url: Option<String>,

    /// API key for bearer auth and signed-mode key identification
    #[arg(long, global = true, env = "BRIKK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Shared secret for HMAC request signing
    #[arg(long, global = true, env = "BRIKK_SIGNING_SECRET", hide_env_values = true)]
    pub signing_secret: Option<String>,

    /// Organization the credentials belong to
    #[arg(long, global = true, env = "BRIKK_ORG_ID")]
    pub org_id: Option<String>,

    /// Per-call timeout in milliseconds
    #[arg(long, global = true, env = "BRIKK_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Maximum retries after the initial attempt
    #[arg(long, global = true, env = "BRIKK_MAX_RETRIES")]
    pub max_retries: Option<u32>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check coordination service health
    Health,

    /// Manage the agent registry
    #[command(subcommand)]
    Agents(AgentsCommand),

    /// Send a coordination message (HMAC-signed)
    Send(SendArgs),

    /// Inspect and record economy transactions
    #[command(subcommand)]
    Economy(EconomyCommand),

    /// Query and submit reputation scores
    #[command(subcommand)]
    Reputation(ReputationCommand),
}

/// Agent registry subcommands
#[derive(Subcommand, Debug)]
pub enum AgentsCommand {
    /// Register an agent
    Register(RegisterArgs),

    /// Show one agent
    Get {
        /// Agent identifier
        agent_id: String,
    },

    /// List all registered agents
    List,

    /// Remove an agent from the registry
    Deregister {
        /// Agent identifier
        agent_id: String,
    },
}

/// Arguments for agent registration
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Agent identifier
    pub agent_id: String,

    /// Human-readable agent name
    #[arg(long)]
    pub name: Option<String>,

    /// Capability tag (repeatable)
    #[arg(long = "capability")]
    pub capabilities: Vec<String>,
}

/// Arguments for sending a coordination message
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Sending agent id
    #[arg(long)]
    pub sender: String,

    /// Receiving agent id
    #[arg(long)]
    pub recipient: String,

    /// Message type
    #[arg(long = "type", default_value = "event")]
    pub message_type: String,

    /// Message payload as inline JSON
    #[arg(long, default_value = "{}")]
    pub payload: String,

    /// Time-to-live override in milliseconds
    #[arg(long)]
    pub ttl_ms: Option<u64>,
}

/// Economy subcommands
#[derive(Subcommand, Debug)]
pub enum EconomyCommand {
    /// Record a transfer between two agents
    Transfer(TransferArgs),

    /// Show an agent's balance
    Balance {
        /// Agent identifier
        agent_id: String,
    },

    /// List transactions involving an agent
    Transactions {
        /// Agent identifier
        agent_id: String,
    },
}

/// Arguments for an economy transfer
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Paying agent id
    #[arg(long)]
    pub from: String,

    /// Receiving agent id
    #[arg(long)]
    pub to: String,

    /// Amount to transfer
    #[arg(long)]
    pub amount: f64,

    /// Currency code
    #[arg(long)]
    pub currency: Option<String>,
}

/// Reputation subcommands
#[derive(Subcommand, Debug)]
pub enum ReputationCommand {
    /// Show an agent's reputation score
    Score {
        /// Agent identifier
        agent_id: String,
    },

    /// Submit a rating for an agent
    Rate(RateArgs),
}

/// Arguments for submitting a rating
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Rated agent id
    pub agent_id: String,

    /// Rating agent id
    #[arg(long)]
    pub rater: String,

    /// Score value
    #[arg(long)]
    pub score: f64,

    /// Optional free-text comment
    #[arg(long)]
    pub comment: Option<String>,
}
