// Container runtime access: command types and the CLI-backed executor.

pub mod engine;
pub mod types;

pub use engine::{DockerCli, Runtime};
pub use types::{CommandOutput, ContainerCommand, parse_ids};
