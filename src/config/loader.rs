use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".deployrc";

const ENV_NAME: &str = "HAAD_DEPLOY_NAME";
const ENV_IMAGE: &str = "HAAD_DEPLOY_IMAGE";
const ENV_RUNTIME: &str = "HAAD_DEPLOY_RUNTIME";

/// Load config from `.deployrc` in `dir`, then apply environment overrides.
///
/// A missing file yields the defaults; a malformed one is an error.
pub fn load(dir: &Path) -> Result<Config> {
    let mut cfg = load_file(dir)?.unwrap_or_default();
    apply_env(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

fn load_file(dir: &Path) -> Result<Option<Config>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(Some(cfg))
}

fn apply_env(cfg: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
    if let Some(name) = non_empty(ENV_NAME) {
        cfg.container_name = name;
    }
    if let Some(image) = non_empty(ENV_IMAGE) {
        cfg.image = image;
    }
    if let Some(runtime) = non_empty(ENV_RUNTIME) {
        cfg.runtime = runtime;
    }
}
