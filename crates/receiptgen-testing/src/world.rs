//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temporary config directory and a scrubbed environment,
//! so tests never read the developer's config or launch data.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCRUBBED_ENV: [&str; 5] = [
    "RECEIPTGEN_ENDPOINT",
    "RECEIPTGEN_LAUNCH_URL",
    "RECEIPTGEN_INIT_DATA",
    "RECEIPTGEN_THEME_PARAMS",
    "RUST_LOG",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use receiptgen_testing::TestWorld;
///
/// let world = TestWorld::new().with_env("RECEIPTGEN_LAUNCH_URL", "user_id=7");
/// let result = world.run(&["submit", "--amount", "15000"]).unwrap();
/// assert!(!result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("receiptgen");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write `config.toml` into the world's config directory
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
        self
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("RECEIPTGEN_PATH", &self.config_dir);
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `receiptgen` binary with `args` in this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("receiptgen")
            .map_err(|e| anyhow::anyhow!("Failed to find receiptgen binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
