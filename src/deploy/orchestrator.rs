use anyhow::Result;

use crate::config::Config;
use crate::docker::{Runtime, parse_ids};

use super::commands::{list_command, remove_command, run_command};

/// What a redeploy did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// IDs passed to `rm -f`; empty when nothing had the reserved name.
    pub removed: Vec<String>,
    /// Exit code of the `run` invocation.
    pub exit_code: Option<i32>,
}

impl DeployOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Replace the reserved container with a fresh one.
///
/// Runtime failures of the lookup or removal are reported and the sequence
/// continues; only a runtime that cannot be spawned aborts it.
pub fn redeploy<R: Runtime>(
    runtime: &mut R,
    cfg: &Config,
    args: &[String],
) -> Result<DeployOutcome> {
    // ── Locate ───────────────────────────────────────────────────────
    let listed = runtime.exec(&list_command(cfg))?;
    if !listed.success() {
        tracing::warn!(exit_code = ?listed.exit_code, "container lookup failed");
    }
    let ids = parse_ids(&listed.stdout);

    // ── Remove ───────────────────────────────────────────────────────
    if ids.is_empty() {
        tracing::info!(name = %cfg.container_name, "no existing container");
    } else {
        tracing::info!(
            name = %cfg.container_name,
            count = ids.len(),
            "removing existing containers"
        );
        let removed = runtime.exec(&remove_command(&ids))?;
        if !removed.success() {
            tracing::warn!(exit_code = ?removed.exit_code, "container removal failed");
        }
    }

    // ── Launch ───────────────────────────────────────────────────────
    let started = runtime.exec(&run_command(cfg, args))?;
    if started.success() {
        tracing::info!(name = %cfg.container_name, "container started");
    } else {
        tracing::error!(exit_code = ?started.exit_code, "container start failed");
    }

    Ok(DeployOutcome {
        removed: ids,
        exit_code: started.exit_code,
    })
}
