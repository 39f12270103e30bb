use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use super::types::{CommandOutput, ContainerCommand};

/// Executes runtime commands. The deploy flow only talks to this seam so it
/// can be driven without a real container runtime.
pub trait Runtime {
    fn exec(&mut self, cmd: &ContainerCommand) -> Result<CommandOutput>;
}

/// Runs commands through the runtime's CLI (`docker` unless configured).
///
/// Stdout is captured only for commands that ask for it; otherwise it goes
/// straight to ours, as does stderr, so the runtime's own output reaches the
/// user untranslated.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Runtime for DockerCli {
    fn exec(&mut self, cmd: &ContainerCommand) -> Result<CommandOutput> {
        tracing::debug!(runtime = %self.binary, args = ?cmd.args, "exec");

        let stdout = if cmd.capture_stdout {
            Stdio::piped()
        } else {
            Stdio::inherit()
        };

        let output = Command::new(&self.binary)
            .args(&cmd.args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| {
                format!(
                    "failed to invoke `{}`: is it installed and on PATH?",
                    self.binary
                )
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
