// crates/act-harness-core/src/runtime/runner.rs
// ============================================================================
// Module: Act Runner
// Description: Invocation engine driving the act CLI against a workflow.
// Purpose: Validate the target repo, assemble invocations, and bound them.
// Dependencies: serde_json, tempfile, thiserror, crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`ActRunner`] is the harness engine. Construction validates the target
//! repository (an action definition must exist) and probes the `act` binary
//! with a bounded `--version` call, so a misconfigured environment fails
//! before any workflow runs. [`ActRunner::invoke`] resolves the workflow
//! file, serializes the trigger payload into a temporary event artifact,
//! synthesizes the child environment, and launches the tool under a hard
//! ceiling.
//!
//! Invariants:
//! - The workflow file is resolved and checked before any subprocess starts.
//! - The event artifact outlives the child and is removed on every exit
//!   path, including launch failures.
//! - A timed-out invocation is a sentinel [`InvocationResult`], never an
//!   error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use serde_json::Map;
use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::DEFAULT_RUNNER_IMAGE;
use crate::core::InvocationResult;
use crate::core::WorkflowTrigger;
use crate::interfaces::CommandLauncher;
use crate::interfaces::LaunchError;
use crate::interfaces::LaunchOutcome;
use crate::interfaces::LaunchRequest;
use crate::runtime::inputs::merge_environment;
use crate::runtime::launcher::TokioCommandLauncher;
use crate::telemetry::HarnessMetrics;
use crate::telemetry::InvocationMetricEvent;
use crate::telemetry::InvocationOutcome;
use crate::telemetry::NoopMetrics;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Binary name resolved from `PATH` when no override is supplied.
pub const DEFAULT_ACT_BINARY: &str = "act";

/// Ceiling applied to the construction-time `--version` probe.
pub const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Ceiling applied to each workflow invocation.
pub const INVOCATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Action definition file names accepted at the repository root.
const ACTION_FILE_NAMES: [&str; 2] = ["action.yml", "action.yaml"];

/// Workflow file extensions surfaced by discovery.
const WORKFLOW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Name prefix for the temporary event artifact.
const EVENT_FILE_PREFIX: &str = "act-event-";

/// Name suffix for the temporary event artifact.
const EVENT_FILE_SUFFIX: &str = ".json";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Construction-time settings for an [`ActRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Root of the action repository under test.
    pub repo_dir: PathBuf,
    /// Binary name or path used to launch the tool.
    pub act_binary: String,
    /// Container image recorded for callers that seed their own triggers.
    pub default_image: String,
}

impl RunnerConfig {
    /// Creates a config rooted at `repo_dir` with the default binary and
    /// image.
    #[must_use]
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            act_binary: DEFAULT_ACT_BINARY.to_owned(),
            default_image: DEFAULT_RUNNER_IMAGE.to_owned(),
        }
    }
}

// ============================================================================
// SECTION: Invocation Request
// ============================================================================

/// One workflow invocation: the target file, its trigger, and run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Workflow file name under `.github/workflows/`.
    pub workflow_file: String,
    /// Trigger describing the simulated event.
    pub trigger: WorkflowTrigger,
    /// Action inputs, synthesized into `INPUT_*` environment variables in
    /// order.
    pub inputs: Vec<(String, String)>,
    /// Run only the named job when set.
    pub job: Option<String>,
    /// Resolve the plan without executing steps.
    pub dry_run: bool,
    /// Pass verbose output through to the tool.
    pub verbose: bool,
}

impl InvocationRequest {
    /// Creates a request for `workflow_file` with no inputs and default run
    /// options.
    #[must_use]
    pub fn new(workflow_file: impl Into<String>, trigger: WorkflowTrigger) -> Self {
        Self {
            workflow_file: workflow_file.into(),
            trigger,
            inputs: Vec::new(),
            job: None,
            dry_run: false,
            verbose: false,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors surfaced by [`ActRunner`] construction and invocation.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// No action definition exists at the repository root.
    #[error("action definition not found under {}", .dir.display())]
    ActionFileMissing {
        /// Repository root that was searched.
        dir: PathBuf,
    },
    /// The tool failed its reachability probe.
    #[error("act binary unavailable: {reason}")]
    ToolUnavailable {
        /// Probe failure detail.
        reason: String,
    },
    /// The requested workflow file does not exist.
    #[error("workflow file not found: {}", .path.display())]
    WorkflowNotFound {
        /// Path that was checked.
        path: PathBuf,
    },
    /// The workflows directory could not be scanned.
    #[error("failed to scan workflows directory: {source}")]
    WorkflowScan {
        /// Underlying filesystem failure.
        #[source]
        source: io::Error,
    },
    /// The event payload artifact could not be written.
    #[error("failed to write event payload file: {source}")]
    EventFile {
        /// Underlying filesystem failure.
        #[source]
        source: io::Error,
    },
    /// The event payload could not be serialized.
    #[error("failed to serialize event payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// The subprocess launcher could not be initialized.
    #[error("failed to initialize command launcher: {source}")]
    LauncherInit {
        /// Underlying runtime failure.
        #[source]
        source: io::Error,
    },
    /// The subprocess could not be spawned or awaited.
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Invocation engine for exercising a GitHub Action through the `act` CLI.
///
/// # Invariants
/// - A constructed runner has already verified the action definition and the
///   tool's reachability.
pub struct ActRunner {
    /// Construction-time settings.
    config: RunnerConfig,
    /// Subprocess executor used for the probe and for invocations.
    launcher: Arc<dyn CommandLauncher>,
    /// Sink for invocation telemetry.
    metrics: Arc<dyn HarnessMetrics>,
}

impl ActRunner {
    /// Creates a runner with the production launcher and no-op telemetry.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::LauncherInit`] when the launcher runtime cannot
    /// start, [`RunnerError::ActionFileMissing`] when `repo_dir` holds no
    /// action definition, and [`RunnerError::ToolUnavailable`] when the
    /// `--version` probe fails.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let launcher = TokioCommandLauncher::new()
            .map_err(|source| RunnerError::LauncherInit { source })?;
        Self::with_components(config, Arc::new(launcher), Arc::new(NoopMetrics))
    }

    /// Creates a runner with explicit launcher and telemetry components.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::ActionFileMissing`] when `repo_dir` holds no
    /// action definition and [`RunnerError::ToolUnavailable`] when the
    /// `--version` probe fails.
    pub fn with_components(
        config: RunnerConfig,
        launcher: Arc<dyn CommandLauncher>,
        metrics: Arc<dyn HarnessMetrics>,
    ) -> Result<Self, RunnerError> {
        let runner = Self {
            config,
            launcher,
            metrics,
        };
        runner.require_action_file()?;
        runner.probe_tool()?;
        Ok(runner)
    }

    /// Root of the action repository under test.
    #[must_use]
    pub fn repo_dir(&self) -> &Path {
        &self.config.repo_dir
    }

    /// Binary name or path used to launch the tool.
    #[must_use]
    pub fn act_binary(&self) -> &str {
        &self.config.act_binary
    }

    /// Container image recorded for callers that seed their own triggers.
    #[must_use]
    pub fn default_image(&self) -> &str {
        &self.config.default_image
    }

    /// Runs one workflow invocation and captures its outcome.
    ///
    /// The trigger payload is serialized into a temporary event artifact for
    /// the child's lifetime and removed afterwards. A child that exceeds
    /// [`INVOCATION_TIMEOUT`] is killed and reported as the timeout sentinel
    /// result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::WorkflowNotFound`] when the workflow file does
    /// not exist, [`RunnerError::Payload`] or [`RunnerError::EventFile`] when
    /// the event artifact cannot be produced, and [`RunnerError::Launch`]
    /// when the subprocess cannot be spawned or awaited.
    pub fn invoke(&self, request: InvocationRequest) -> Result<InvocationResult, RunnerError> {
        let workflow_path = self.workflows_dir().join(&request.workflow_file);
        if !workflow_path.is_file() {
            return Err(RunnerError::WorkflowNotFound {
                path: workflow_path,
            });
        }

        let started = Instant::now();
        let event_file = write_event_payload(&request.trigger.event_payload)?;
        let event_path =
            (!request.trigger.event_payload.is_empty()).then(|| event_file.path().to_path_buf());
        let args = build_args(&request, &workflow_path, event_path.as_deref());
        let (env_overrides, collisions) =
            merge_environment(&request.trigger.env_vars, &request.inputs);
        for collision in collisions {
            self.metrics.record_input_collision(collision);
        }

        let launch = LaunchRequest {
            program: self.config.act_binary.clone(),
            args,
            env_overrides,
            timeout: INVOCATION_TIMEOUT,
        };
        let (result, outcome) = match self.launcher.launch(&launch)? {
            LaunchOutcome::Completed {
                exit_code,
                stdout,
                stderr,
            } => {
                let outcome = if exit_code == 0 {
                    InvocationOutcome::Ok
                } else {
                    InvocationOutcome::Failed
                };
                (
                    InvocationResult {
                        exit_code,
                        stdout,
                        stderr,
                    },
                    outcome,
                )
            }
            LaunchOutcome::TimedOut => (
                InvocationResult::timed_out(INVOCATION_TIMEOUT),
                InvocationOutcome::TimedOut,
            ),
        };
        drop(event_file);

        self.metrics.record_invocation(
            InvocationMetricEvent {
                workflow_file: request.workflow_file,
                event_kind: request.trigger.event_kind,
                outcome,
                exit_code: result.exit_code,
            },
            started.elapsed(),
        );
        Ok(result)
    }

    /// Lists workflow file names under `.github/workflows/`, sorted.
    ///
    /// A missing workflows directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::WorkflowScan`] when the directory exists but
    /// cannot be read.
    pub fn list_workflows(&self) -> Result<Vec<String>, RunnerError> {
        let dir = self.workflows_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|source| RunnerError::WorkflowScan { source })?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RunnerError::WorkflowScan { source })?;
            let path = entry.path();
            let workflow_like = path.is_file()
                && path
                    .extension()
                    .and_then(|extension| extension.to_str())
                    .is_some_and(|extension| WORKFLOW_EXTENSIONS.contains(&extension));
            if !workflow_like {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Verifies that the repository root holds an action definition.
    fn require_action_file(&self) -> Result<(), RunnerError> {
        let found = ACTION_FILE_NAMES
            .iter()
            .any(|name| self.config.repo_dir.join(name).is_file());
        if found {
            return Ok(());
        }
        Err(RunnerError::ActionFileMissing {
            dir: self.config.repo_dir.clone(),
        })
    }

    /// Probes the tool with a bounded `--version` call.
    fn probe_tool(&self) -> Result<(), RunnerError> {
        let request = LaunchRequest {
            program: self.config.act_binary.clone(),
            args: vec!["--version".to_owned()],
            env_overrides: BTreeMap::new(),
            timeout: VERSION_PROBE_TIMEOUT,
        };
        match self.launcher.launch(&request) {
            Ok(LaunchOutcome::Completed { exit_code: 0, .. }) => Ok(()),
            Ok(LaunchOutcome::Completed {
                exit_code, stderr, ..
            }) => Err(RunnerError::ToolUnavailable {
                reason: format!(
                    "{} --version exited with code {exit_code}: {}",
                    self.config.act_binary,
                    stderr.trim()
                ),
            }),
            Ok(LaunchOutcome::TimedOut) => Err(RunnerError::ToolUnavailable {
                reason: format!("{} --version timed out", self.config.act_binary),
            }),
            Err(error) => Err(RunnerError::ToolUnavailable {
                reason: format!("{} is not reachable: {error}", self.config.act_binary),
            }),
        }
    }

    /// Directory holding the repository's workflow files.
    fn workflows_dir(&self) -> PathBuf {
        self.config.repo_dir.join(".github").join("workflows")
    }
}

// ============================================================================
// SECTION: Invocation Assembly
// ============================================================================

/// Serializes the payload into a uniquely named temporary JSON artifact.
///
/// The artifact is always produced so cleanup stays uniform; callers decide
/// whether the command line references it.
fn write_event_payload(payload: &Map<String, Value>) -> Result<NamedTempFile, RunnerError> {
    let mut file = tempfile::Builder::new()
        .prefix(EVENT_FILE_PREFIX)
        .suffix(EVENT_FILE_SUFFIX)
        .tempfile()
        .map_err(|source| RunnerError::EventFile { source })?;
    let bytes = serde_json::to_vec_pretty(payload)?;
    file.write_all(&bytes)
        .map_err(|source| RunnerError::EventFile { source })?;
    Ok(file)
}

/// Assembles the argv for one invocation.
///
/// Flag order is fixed: event kind, workflow selection, platform mapping,
/// job filter, run-mode flags, event artifact, then secrets in key order.
fn build_args(
    request: &InvocationRequest,
    workflow_path: &Path,
    event_path: Option<&Path>,
) -> Vec<String> {
    let trigger = &request.trigger;
    let mut args = vec![trigger.event_kind.clone()];
    args.push("-W".to_owned());
    args.push(workflow_path.display().to_string());
    args.push("-P".to_owned());
    args.push(format!("{}={}", trigger.platform, trigger.image));
    if let Some(job) = &request.job {
        args.push("-j".to_owned());
        args.push(job.clone());
    }
    if request.dry_run {
        args.push("--dryrun".to_owned());
    }
    if request.verbose {
        args.push("-v".to_owned());
    }
    if let Some(path) = event_path {
        args.push("-e".to_owned());
        args.push(path.display().to_string());
    }
    for (key, value) in &trigger.secrets {
        args.push("-s".to_owned());
        args.push(format!("{key}={value}"));
    }
    args
}

// ============================================================================
// SECTION: Tests
// ============================================================================
