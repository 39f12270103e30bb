use crate::config::Config;
use crate::docker::ContainerCommand;

/// Name of the environment variable that carries the original arguments.
pub const ARGS_ENV: &str = "ARGS";

/// Original arguments joined by single spaces; empty when there are none.
pub fn joined_args(args: &[String]) -> String {
    args.join(" ")
}

/// Build a `ps` query for every container (running or stopped) whose name
/// matches the reserved name.
pub fn list_command(cfg: &Config) -> ContainerCommand {
    ContainerCommand::new([
        "ps".to_string(),
        "-aq".to_string(),
        "-f".to_string(),
        format!("name={}", cfg.container_name),
    ])
    .captured()
}

/// Build a forced `rm` for the given container IDs.
pub fn remove_command(ids: &[String]) -> ContainerCommand {
    let mut args = vec!["rm".to_string(), "-f".to_string()];
    args.extend(ids.iter().cloned());
    ContainerCommand::new(args)
}

/// Build a detached `run` for the reserved container.
pub fn run_command(cfg: &Config, args: &[String]) -> ContainerCommand {
    ContainerCommand::new([
        "run".to_string(),
        "-d".to_string(),
        "--name".to_string(),
        cfg.container_name.clone(),
        "--restart".to_string(),
        cfg.restart_policy.as_str().to_string(),
        "-e".to_string(),
        format!("{ARGS_ENV}={}", joined_args(args)),
        cfg.image.clone(),
    ])
}
