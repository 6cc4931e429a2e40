//! Command runner for external process execution.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use crate::logging::RunLogger;

use super::errors::{ToolError, ToolResult};

/// A single external tool invocation.
///
/// Output is always captured; stdout is returned to the caller and stderr
/// feeds the logger's tail buffer so failures carry the tool's last words.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    tool: String,
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
    stdin: Option<Vec<u8>>,
}

impl ToolCommand {
    /// Create a command for `program`, reported as `tool` in messages.
    pub fn new(tool: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Run with this working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Feed these bytes on stdin.
    pub fn stdin_bytes(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(data.into());
        self
    }

    /// Command line rendered for logging.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }

    /// Run to completion and return stdout.
    ///
    /// A non-zero exit is a `CommandFailed` whose message is the tail of
    /// stderr.
    pub fn run(&self, logger: &RunLogger) -> ToolResult<Vec<u8>> {
        logger.command(&self.display());

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if self.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| ToolError::spawn_failed(&self.tool, e))?;

        // Stdin is fed from its own thread while stdout and stderr drain.
        // A tool that exits without reading it all is not an error.
        let writer = match (&self.stdin, child.stdin.take()) {
            (Some(data), Some(mut stdin)) => {
                let data = data.clone();
                Some(thread::spawn(move || match stdin.write_all(&data) {
                    Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
                    _ => Ok(()),
                }))
            }
            _ => None,
        };

        let output = child
            .wait_with_output()
            .map_err(|e| ToolError::spawn_failed(&self.tool, e))?;

        if let Some(writer) = writer {
            writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")))
                .map_err(|e| ToolError::spawn_failed(&self.tool, e))?;
        }

        logger.clear_tail();
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            logger.output_line(line.trim_end());
        }

        if !output.status.success() {
            let tail = logger.get_tail().join(" | ");
            let message = if tail.is_empty() {
                "no error output".to_string()
            } else {
                tail
            };
            return Err(ToolError::command_failed(
                &self.tool,
                output.status.code().unwrap_or(-1),
                message,
            ));
        }

        Ok(output.stdout)
    }
}
