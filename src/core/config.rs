//! Pipeline configuration from YAML

use crate::collaborators::NotificationSettings;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default timeout for test and deploy commands (in seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Top-level pipeline configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name
    pub name: String,

    /// How to test and deploy the project
    pub project: ProjectConfig,

    /// Summary notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Project commands as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory the commands run in (defaults to the current directory)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Test command; a project without one has no tests
    #[serde(default)]
    pub test_command: Option<String>,

    /// Deploy command
    pub deploy_command: String,

    /// Timeout applied to each command
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Notification settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether the summary is sent at all
    #[serde(default)]
    pub enabled: bool,

    /// Shell command that receives the summary on stdin (console when absent)
    #[serde(default)]
    pub command: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl PipelineConfig {
    /// Load pipeline configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse pipeline configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the pipeline configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Pipeline name must not be empty");
        }

        if self.project.deploy_command.trim().is_empty() {
            anyhow::bail!("Pipeline '{}' has an empty deploy_command", self.name);
        }

        if let Some(test_command) = &self.project.test_command {
            if test_command.trim().is_empty() {
                anyhow::bail!(
                    "Pipeline '{}' has an empty test_command (omit it to skip tests)",
                    self.name
                );
            }
        }

        if self.project.timeout_secs == 0 {
            anyhow::bail!("Pipeline '{}' timeout_secs must be greater than 0", self.name);
        }

        if let Some(command) = &self.notifications.command {
            if command.trim().is_empty() {
                anyhow::bail!("Pipeline '{}' has an empty notification command", self.name);
            }
        }

        Ok(())
    }

    /// Force notifications off for this run
    pub fn disable_notifications(&mut self) {
        self.notifications.enabled = false;
    }
}

impl NotificationSettings for PipelineConfig {
    fn notifications_enabled(&self) -> bool {
        self.notifications.enabled
    }
}
