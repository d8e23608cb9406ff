//! Locating and starting the GUI binary.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable naming the GUI binary explicitly.
pub const APP_PATH_ENV: &str = "LOOKUP_APP_PATH";

/// File name of the GUI binary.
pub const APP_BINARY: &str = "word-lookup";

/// Pick the GUI binary: `$LOOKUP_APP_PATH`, else a `word-lookup` next to
/// this executable, else the bare name for a `PATH` search.
pub fn resolve_app_path(env_override: Option<OsString>, current_exe: Option<&Path>) -> PathBuf {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let file_name = format!("{APP_BINARY}{}", std::env::consts::EXE_SUFFIX);
    if let Some(sibling) = current_exe
        .and_then(Path::parent)
        .map(|dir| dir.join(&file_name))
        .filter(|p| p.is_file())
    {
        return sibling;
    }

    PathBuf::from(file_name)
}

/// Start the GUI detached from this process, with null stdio.
pub fn spawn_app(path: &Path, config: Option<&Path>) -> std::io::Result<()> {
    let mut cmd = Command::new(path);
    if let Some(config) = config {
        cmd.arg("--config").arg(config);
    }
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    let child = cmd.spawn()?;
    tracing::info!(path = %path.display(), pid = child.id(), "started word-lookup");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("lookup-trigger");
        std::fs::write(dir.path().join(format!("{APP_BINARY}{}", std::env::consts::EXE_SUFFIX)), b"")
            .unwrap();

        let path = resolve_app_path(Some("/opt/lookup/bin/word-lookup".into()), Some(&exe));
        assert_eq!(path, PathBuf::from("/opt/lookup/bin/word-lookup"));
    }

    #[test]
    fn empty_env_override_is_ignored() {
        let path = resolve_app_path(Some(OsString::new()), None);
        assert_eq!(
            path,
            PathBuf::from(format!("{APP_BINARY}{}", std::env::consts::EXE_SUFFIX))
        );
    }

    #[test]
    fn sibling_binary_is_preferred_over_path() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("lookup-trigger");
        let sibling = dir
            .path()
            .join(format!("{APP_BINARY}{}", std::env::consts::EXE_SUFFIX));
        std::fs::write(&sibling, b"").unwrap();

        assert_eq!(resolve_app_path(None, Some(&exe)), sibling);
    }

    #[test]
    fn falls_back_to_path_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("lookup-trigger");
        assert_eq!(
            resolve_app_path(None, Some(&exe)),
            PathBuf::from(format!("{APP_BINARY}{}", std::env::consts::EXE_SUFFIX))
        );
    }
}
