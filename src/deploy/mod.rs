pub mod commands;
pub mod orchestrator;
pub mod replay;

pub use orchestrator::{DeployOutcome, redeploy};
pub use replay::{replay_line, write_replay};
