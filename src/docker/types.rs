/// One runtime invocation. `args` is the full argument list passed to the
/// runtime binary (the deploy layer is responsible for assembling it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerCommand {
    pub args: Vec<String>,
    /// Capture stdout instead of passing it through to ours.
    pub capture_stdout: bool,
}

impl ContainerCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            capture_stdout: false,
        }
    }

    /// Collect stdout for parsing (`ps`-style queries).
    pub fn captured(mut self) -> Self {
        self.capture_stdout = true;
        self
    }
}

/// Outcome of a runtime invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Empty unless the command asked for capture.
    pub stdout: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Split `ps -q` output into container IDs, one per non-empty line.
pub fn parse_ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
