//! Shell command collaborators - runs project commands through `sh -c`

use crate::collaborators::Project;
use crate::core::{config::ProjectConfig, outcome::SUCCESS_MARKER};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::runtime::Handle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Error types for shell command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Failed to execute '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' timed out after {secs} seconds")]
    Timeout { command: String, secs: u64 },

    #[error("'{command}' exited with code {code}: {stderr}")]
    Exit {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to decode output of '{command}': {source}")]
    Decode {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// A shell command with its working directory and timeout
#[derive(Debug, Clone)]
pub struct ShellCommand {
    command: String,
    working_dir: Option<PathBuf>,
    timeout_secs: u64,
}

impl ShellCommand {
    pub fn new(command: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            command: command.into(),
            working_dir: None,
            timeout_secs,
        }
    }

    pub fn with_working_dir(mut self, working_dir: Option<PathBuf>) -> Self {
        self.working_dir = working_dir;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the command to completion, blocking the caller
    ///
    /// `input`, when given, is written to the command's stdin. The command is
    /// killed if it outlives the timeout. Safe to call from inside a tokio
    /// runtime: the command then runs on a separate thread with its own
    /// runtime while the caller blocks.
    ///
    /// Returns the command's stdout.
    ///
    /// # Errors
    /// Returns `CommandError` if:
    /// - The command cannot be spawned
    /// - The command exits with a non-zero status
    /// - The command times out
    /// - The command's stdout is not valid UTF-8
    pub fn run(&self, input: Option<&str>) -> Result<String, CommandError> {
        if Handle::try_current().is_err() {
            return self.block_on(input);
        }

        debug!("Already inside a runtime, running '{}' on its own thread", self.command);
        thread::scope(|scope| {
            scope
                .spawn(|| self.block_on(input))
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        })
    }

    fn block_on(&self, input: Option<&str>) -> Result<String, CommandError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CommandError::Runtime)?;

        runtime.block_on(self.run_async(input))
    }

    async fn run_async(&self, input: Option<&str>) -> Result<String, CommandError> {
        debug!("Spawning shell command: {}", self.command);

        let mut command = Command::new("sh");
        command
            .arg("-c")
            .arg(&self.command)
            .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| CommandError::Io {
            command: self.command.clone(),
            source,
        })?;

        let stdin = child.stdin.take();
        let execution = async move {
            if let (Some(input), Some(mut stdin)) = (input, stdin) {
                match stdin.write_all(input.as_bytes()).await {
                    // The command is free to exit without reading its input
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                    other => other?,
                }
            }
            child.wait_with_output().await
        };

        let output = timeout(Duration::from_secs(self.timeout_secs), execution)
            .await
            .map_err(|_| CommandError::Timeout {
                command: self.command.clone(),
                secs: self.timeout_secs,
            })?
            .map_err(|source| CommandError::Io {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code().unwrap_or(-1);
            warn!("'{}' exited with code {}: {}", self.command, code, stderr.trim());
            return Err(CommandError::Exit {
                command: self.command.clone(),
                code,
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|source| CommandError::Decode {
            command: self.command.clone(),
            source,
        })?;

        debug!("'{}' finished with {} bytes of output", self.command, stdout.len());

        Ok(stdout)
    }
}

/// Project whose tests and deployment are shell commands
///
/// Every command error is folded into a non-marker result string, so the
/// pipeline only ever sees "success" or some failure description.
#[derive(Debug, Clone)]
pub struct CommandProject {
    test: Option<ShellCommand>,
    deploy: ShellCommand,
}

impl CommandProject {
    pub fn new(test: Option<ShellCommand>, deploy: ShellCommand) -> Self {
        Self { test, deploy }
    }

    pub fn from_config(config: &ProjectConfig) -> Self {
        let command = |cmd: &str| {
            ShellCommand::new(cmd, config.timeout_secs).with_working_dir(config.working_dir.clone())
        };

        Self {
            test: config.test_command.as_deref().map(command),
            deploy: command(&config.deploy_command),
        }
    }

    fn execute(label: &str, command: &ShellCommand) -> String {
        info!("Running {}: {}", label, command.command());
        match command.run(None) {
            Ok(_) => SUCCESS_MARKER.to_string(),
            Err(e) => format!("error: {}", e),
        }
    }
}

impl Project for CommandProject {
    fn has_tests(&self) -> bool {
        self.test.is_some()
    }

    fn run_tests(&self) -> String {
        match &self.test {
            Some(command) => Self::execute("tests", command),
            None => "error: no test command configured".to_string(),
        }
    }

    fn deploy(&self) -> String {
        Self::execute("deploy", &self.deploy)
    }
}
