//! Command handlers for CLI subcommands
//!
//! Each handler marshals its arguments into one façade call and hands the
//! outcome to the output writer; all resilience lives in the SDK.

pub mod agents;
pub mod coordination;
pub mod economy;
pub mod health;
pub mod reputation;

pub use agents::handle_agents;
pub use coordination::handle_send;
pub use economy::handle_economy;
pub use health::handle_health;
pub use reputation::handle_reputation;
