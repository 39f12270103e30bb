use std::path::Path;

use anyhow::{Context, Result};

/// The command that re-runs this deploy: program name followed by every
/// original argument. Arguments are quoted only when the shell would
/// otherwise split or expand them.
pub fn replay_line(program: &str, args: &[String]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(program);
    words.extend(args.iter().map(String::as_str));
    shell_words::join(words)
}

/// Write the replay line to `path` and mark the file executable.
pub fn write_replay(path: &Path, program: &str, args: &[String]) -> Result<()> {
    let line = replay_line(program, args);
    std::fs::write(path, format!("{line}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    make_executable(path)?;
    tracing::info!(path = %path.display(), "recorded replay command");
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("failed to chmod {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_args_are_written_verbatim() {
        assert_eq!(
            replay_line("./deploy.sh", &args(&["a", "b", "c"])),
            "./deploy.sh a b c"
        );
    }

    #[test]
    fn no_args_is_just_the_program() {
        assert_eq!(replay_line("./deploy.sh", &[]), "./deploy.sh");
    }

    #[test]
    fn flags_pass_through_unquoted() {
        assert_eq!(
            replay_line("./deploy.sh", &args(&["-a", "10.0.0.5", "--verbose"])),
            "./deploy.sh -a 10.0.0.5 --verbose"
        );
    }

    #[test]
    fn args_with_spaces_survive_replay() {
        let line = replay_line("./deploy.sh", &args(&["--name", "my plugin"]));
        assert_eq!(
            shell_words::split(&line).unwrap(),
            vec!["./deploy.sh", "--name", "my plugin"]
        );
    }

    #[test]
    fn write_replay_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redeploy.sh");
        write_replay(&path, "./deploy.sh", &args(&["a", "b", "c"])).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "./deploy.sh a b c\n");
    }

    #[test]
    fn write_replay_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redeploy.sh");
        write_replay(&path, "./deploy.sh", &args(&["old", "args", "here"])).unwrap();
        write_replay(&path, "./deploy.sh", &args(&["new"])).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "./deploy.sh new\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn write_replay_marks_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redeploy.sh");
        write_replay(&path, "./deploy.sh", &[]).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn missing_parent_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("redeploy.sh");
        assert!(write_replay(&path, "./deploy.sh", &[]).is_err());
    }
}
