//! Blocking child processes via `std::process::Command`.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output, Stdio};

use tracing::{debug, info, instrument};

use goskel_core::{
    application::{ApplicationError, ports::ToolRunner},
    domain::ToolInvocation,
    error::{GoskelError, GoskelResult},
};

/// Runs tools found on `PATH`. No timeout: a hung child hangs the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &ToolInvocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = invocation
            .working_dir
            .as_ref()
            .filter(|d| !d.as_os_str().is_empty())
        {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl ToolRunner for ProcessRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(program, error = %e, "not on PATH");
                None
            }
        }
    }

    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &ToolInvocation) -> GoskelResult<()> {
        info!("running");
        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(invocation, e))?;

        check_status(invocation, status, None)
    }

    #[instrument(skip_all, fields(command = %invocation))]
    fn capture(&self, invocation: &ToolInvocation) -> GoskelResult<Vec<u8>> {
        info!("running (captured)");
        let Output {
            status,
            stdout,
            stderr,
        } = Self::command(invocation)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(invocation, e))?;

        check_status(invocation, status, Some(stderr.as_slice()))?;

        let mut combined = stdout;
        combined.extend_from_slice(&stderr);
        Ok(combined)
    }
}

fn spawn_error(invocation: &ToolInvocation, e: io::Error) -> GoskelError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::ExternalToolMissing {
            tool: invocation.program.clone(),
            hint: invocation.install_hint.clone(),
        },
        _ => ApplicationError::ExternalToolFailed {
            command: invocation.command_line(),
            reason: e.to_string(),
        },
    }
    .into()
}

fn check_status(
    invocation: &ToolInvocation,
    status: ExitStatus,
    stderr: Option<&[u8]>,
) -> GoskelResult<()> {
    if status.success() {
        return Ok(());
    }

    let mut reason = status.to_string();
    if let Some(stderr) = stderr.filter(|s| !s.is_empty()) {
        reason.push_str(": ");
        reason.push_str(String::from_utf8_lossy(stderr).trim());
    }

    Err(ApplicationError::ExternalToolFailed {
        command: invocation.command_line(),
        reason,
    }
    .into())
}
