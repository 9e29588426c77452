//! Sandboxed runs of the `tabi` binary.
//!
//! A world is a temp directory holding itinerary files plus a `.tabi` data dir
//! passed as `--data-dir`, so `config.toml` and `tabi.log` stay out of `$HOME`.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A trip sandbox: write itineraries and config, then run commands against them.
///
/// ```no_run
/// use tabi_testing::{TestWorld, fixtures::THREE_DAYS_TOML};
///
/// let world = TestWorld::new();
/// let trip = world.write_itinerary("osaka.toml", THREE_DAYS_TOML).unwrap();
/// let result = world
///     .run(&["--itinerary", trip.to_str().unwrap(), "day", "2"])
///     .unwrap();
/// assert!(result.stdout().contains("Nara Day Trip"));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
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
        let data_dir = temp_dir.path().join(".tabi");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Extra variable for every run, e.g. `RUST_LOG=debug` to check `tabi.log`
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Save a trip next to the data dir; the extension picks TOML or JSON parsing.
    pub fn write_itinerary(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Replace the `config.toml` that `tabi` reads on start
    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.data_dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Adds `--data-dir` and clears `TABI_PATH` and `RUST_LOG` from the parent env.
    ///
    /// `--format` stays with the caller; clap rejects it twice.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TABI_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run `tabi` from the temp root and capture both streams
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tabi")
            .map_err(|e| anyhow::anyhow!("Failed to find tabi binary: {}", e))?;

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

/// Exit status and captured output of one `tabi` run
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

    /// The `--format json` envelope on stdout
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
