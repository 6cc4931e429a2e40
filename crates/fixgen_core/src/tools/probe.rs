//! Tool discovery.
//!
//! A tool counts as available when it can be found (on PATH, or at the
//! configured path) and running it with `--version` produces any output.
//! The exit code is ignored since some tools exit non-zero for `--version`.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::ToolSettings;

/// External tools the generators depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Ffmpeg,
    Zip,
    Gzip,
    Tar,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Ffmpeg, Tool::Zip, Tool::Gzip, Tool::Tar];

    /// Canonical tool name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Ffmpeg => "ffmpeg",
            Tool::Zip => "zip",
            Tool::Gzip => "gzip",
            Tool::Tar => "tar",
        }
    }

    /// Configured command for this tool.
    pub fn command<'a>(&self, settings: &'a ToolSettings) -> &'a str {
        match self {
            Tool::Ffmpeg => &settings.ffmpeg,
            Tool::Zip => &settings.zip,
            Tool::Gzip => &settings.gzip,
            Tool::Tar => &settings.tar,
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Availability of each tool, probed once per run.
#[derive(Debug, Clone, Default)]
pub struct ToolSet {
    tool_paths: HashMap<Tool, Option<PathBuf>>,
}

impl ToolSet {
    /// Probe every tool named in the settings.
    pub fn probe(settings: &ToolSettings) -> Self {
        let mut tool_paths = HashMap::new();
        for tool in Tool::ALL {
            let command = tool.command(settings);
            let path = check_command(command);
            match &path {
                Some(p) => tracing::debug!("{} available at {}", tool, p.display()),
                None => tracing::debug!("{} ({}) not available", tool, command),
            }
            tool_paths.insert(tool, path);
        }
        Self { tool_paths }
    }

    /// Build a tool set from known paths, bypassing probing.
    pub fn from_paths(paths: impl IntoIterator<Item = (Tool, Option<PathBuf>)>) -> Self {
        Self {
            tool_paths: paths.into_iter().collect(),
        }
    }

    /// Path to the tool, if available.
    pub fn path(&self, tool: Tool) -> Option<&Path> {
        self.tool_paths.get(&tool).and_then(|p| p.as_deref())
    }

    pub fn is_available(&self, tool: Tool) -> bool {
        self.path(tool).is_some()
    }

    /// Tools from `required` that are not available, in order.
    pub fn missing(&self, required: &[Tool]) -> Vec<Tool> {
        required
            .iter()
            .copied()
            .filter(|tool| !self.is_available(*tool))
            .collect()
    }
}

/// Check whether a command is available and responds to `--version`.
///
/// Returns the resolved executable path.
pub fn check_command(command: &str) -> Option<PathBuf> {
    let path = locate(command)?;

    let output = Command::new(&path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if output.stdout.is_empty() && output.stderr.is_empty() {
        tracing::debug!("{} produced no output for --version", path.display());
        return None;
    }
    Some(path)
}

/// Resolve a command to an executable path.
///
/// Commands containing a path separator are taken as paths; bare names are
/// searched for on PATH.
pub fn locate(command: &str) -> Option<PathBuf> {
    if command.is_empty() {
        return None;
    }
    let as_path = Path::new(command);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return as_path.is_file().then(|| as_path.to_path_buf());
    }
    find_in_path(command)
}

fn find_in_path(tool: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let full = dir.join(tool);
        if full.is_file() {
            return Some(full);
        }
        #[cfg(windows)]
        {
            let exe = dir.join(format!("{tool}.exe"));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_command_is_unavailable() {
        assert!(check_command("definitely-not-a-real-tool-4f9a2c").is_none());
        assert!(check_command("").is_none());
    }

    #[test]
    fn missing_path_is_not_located() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope");
        assert!(locate(path.to_str().unwrap()).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn silent_tool_is_unavailable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("quiet");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(locate(script.to_str().unwrap()).is_some());
        assert!(check_command(script.to_str().unwrap()).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_version_exit_still_counts() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("grumpy");
        std::fs::write(&script, "#!/bin/sh\necho 'grumpy 1.0' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(check_command(script.to_str().unwrap()), Some(script));
    }

    #[test]
    fn tool_set_reports_missing_in_order() {
        let tools = ToolSet::from_paths([
            (Tool::Ffmpeg, None),
            (Tool::Gzip, Some(PathBuf::from("/usr/bin/gzip"))),
        ]);
        assert_eq!(tools.missing(&[Tool::Gzip, Tool::Ffmpeg, Tool::Zip]), vec![Tool::Ffmpeg, Tool::Zip]);
        assert_eq!(tools.path(Tool::Gzip), Some(Path::new("/usr/bin/gzip")));
    }
}
