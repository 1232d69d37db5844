// system-tests/tests/helpers/act.rs
// ============================================================================
// Module: Runner Helpers
// Description: Harness runner construction honoring environment overrides.
// Purpose: Build runners consistently and skip suites when act is missing.
// Dependencies: system-tests, act-harness-core
// ============================================================================

//! Runner construction shared by the system-test suites.

use act_harness_core::ActRunner;
use act_harness_core::InvocationRequest;
use act_harness_core::RunnerConfig;
use act_harness_core::RunnerError;
use act_harness_core::WorkflowTrigger;
use system_tests::config::SystemTestConfig;

use super::fixture;
use super::fixture::ActionFixture;

/// Builds a runner over the fixture repository, honoring env overrides.
///
/// Returns `Ok(None)` when the act binary is unavailable and the environment
/// does not require it, so suites can skip instead of failing.
pub fn harness_runner(fixture: &ActionFixture) -> Result<Option<ActRunner>, String> {
    let config = SystemTestConfig::load()?;
    let mut runner_config = RunnerConfig::new(fixture.repo_dir());
    if let Some(binary) = &config.act_binary {
        runner_config.act_binary = binary.clone();
    }
    if let Some(image) = &config.runner_image {
        runner_config.default_image = image.clone();
    }
    match ActRunner::new(runner_config) {
        Ok(runner) => Ok(Some(runner)),
        Err(RunnerError::ToolUnavailable { .. }) if !config.require_act => Ok(None),
        Err(error) => Err(format!("construct harness runner: {error}")),
    }
}

/// Applies the configured runner image override to a trigger.
pub fn apply_image_override(trigger: &mut WorkflowTrigger) -> Result<(), String> {
    let config = SystemTestConfig::load()?;
    if let Some(image) = config.runner_image {
        trigger.image = image;
    }
    Ok(())
}

/// Builds the standard verbose dry-run request for the fixture workflow.
pub fn planning_request(
    trigger: WorkflowTrigger,
    inputs: Vec<(String, String)>,
) -> InvocationRequest {
    let mut request = InvocationRequest::new(fixture::WORKFLOW_FILE, trigger);
    request.inputs = inputs;
    request.job = Some(fixture::JOB_NAME.to_owned());
    request.dry_run = true;
    request.verbose = true;
    request
}
