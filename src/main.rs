use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use haad_deploy::config;
use haad_deploy::deploy::{redeploy, write_replay};
use haad_deploy::docker::DockerCli;

fn main() -> Result<ExitCode> {
    init_logging();

    // Every argument is forwarded as-is; none is interpreted here.
    let args = forwarded_args(std::env::args_os().skip(1))?;
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;

    write_replay(&cfg.replay_path, &cfg.replay_program, &args)?;

    let mut runtime = DockerCli::new(cfg.runtime.clone());
    let outcome = redeploy(&mut runtime, &cfg, &args)?;

    if outcome.success() {
        return Ok(ExitCode::SUCCESS);
    }
    Ok(ExitCode::from(exit_status(outcome.exit_code)))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Convert the raw argument list, rejecting anything that is not UTF-8
/// before the replay file or the runtime is touched.
fn forwarded_args(raw: impl IntoIterator<Item = OsString>) -> Result<Vec<String>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string().map_err(|bad| {
                anyhow!(
                    "argument {} is not valid UTF-8: {}",
                    i + 1,
                    bad.to_string_lossy()
                )
            })
        })
        .collect()
}

/// Mirror a failed `run` status; a signal-terminated runtime maps to 1.
fn exit_status(code: Option<i32>) -> u8 {
    code.map_or(1, |c| u8::try_from(c).unwrap_or(1))
}
