use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Restart policy passed to `--restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    No,
    Always,
    OnFailure,
    UnlessStopped,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::No => "no",
            RestartPolicy::Always => "always",
            RestartPolicy::OnFailure => "on-failure",
            RestartPolicy::UnlessStopped => "unless-stopped",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reserved container name; any container matching it is replaced.
    pub container_name: String,
    pub image: String,
    /// Container runtime CLI binary.
    pub runtime: String,
    pub replay_path: PathBuf,
    /// Program name written at the head of the replay line.
    pub replay_program: String,
    pub restart_policy: RestartPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_name: "haad".to_string(),
            image: "haad".to_string(),
            runtime: "docker".to_string(),
            replay_path: PathBuf::from("redeploy.sh"),
            replay_program: "./deploy.sh".to_string(),
            restart_policy: RestartPolicy::UnlessStopped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reserved_container() {
        let cfg = Config::default();
        assert_eq!(cfg.container_name, "haad");
        assert_eq!(cfg.runtime, "docker");
        assert_eq!(cfg.replay_path, PathBuf::from("redeploy.sh"));
        assert_eq!(cfg.restart_policy.as_str(), "unless-stopped");
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let cfg: Config = serde_yaml::from_str("image: haad:1.2\n").unwrap();
        assert_eq!(cfg.image, "haad:1.2");
        assert_eq!(cfg.container_name, "haad");
        assert_eq!(cfg.restart_policy, RestartPolicy::UnlessStopped);
    }

    #[test]
    fn restart_policy_parses_kebab_case() {
        let cfg: Config = serde_yaml::from_str("restart_policy: on-failure\n").unwrap();
        assert_eq!(cfg.restart_policy, RestartPolicy::OnFailure);
    }
}
