// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: End-to-end construction, discovery, and dry-run coverage.
// Purpose: Validate runner construction and the basic planning path.
// Dependencies: system-tests helpers, act-harness-core
// ============================================================================

//! Smoke coverage for harness construction and planning runs.

use act_harness_core::DEFAULT_ACT_BINARY;
use act_harness_core::DEFAULT_RUNNER_IMAGE;
use act_harness_core::PushOptions;
use act_harness_core::WorkflowTrigger;
use helpers::act::apply_image_override;
use helpers::act::harness_runner;
use helpers::act::planning_request;
use helpers::artifacts::InvocationRecord;
use helpers::artifacts::TestReporter;
use helpers::fixture;
use helpers::fixture::ActionFixture;
use system_tests::config::SystemTestConfig;

use crate::helpers;

const EXTRA_WORKFLOW: &str = r"name: Deploy
on:
  push:
jobs:
  deploy:
    runs-on: ubuntu-latest
    steps:
      - run: 'true'
";

#[test]
fn runner_reports_configuration_and_workflows() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("runner_reports_configuration_and_workflows")?;
    let repo = ActionFixture::new()?;
    repo.add_workflow("deploy.yaml", EXTRA_WORKFLOW)?;
    let Some(runner) = harness_runner(&repo)? else {
        reporter.finish(
            "skip",
            vec!["act binary unavailable".to_string()],
            vec!["summary.json".to_string(), "summary.md".to_string()],
        )?;
        drop(reporter);
        return Ok(());
    };

    let config = SystemTestConfig::load()?;
    let expected_binary = config.act_binary.unwrap_or_else(|| DEFAULT_ACT_BINARY.to_string());
    if runner.act_binary() != expected_binary {
        return Err("runner reports an unexpected act binary".into());
    }
    let expected_image = config.runner_image.unwrap_or_else(|| DEFAULT_RUNNER_IMAGE.to_string());
    if runner.default_image() != expected_image {
        return Err("runner reports an unexpected default image".into());
    }
    if runner.repo_dir() != repo.repo_dir() {
        return Err("runner reports an unexpected repository root".into());
    }

    let first = runner.list_workflows()?;
    if first != ["deploy.yaml".to_string(), fixture::WORKFLOW_FILE.to_string()] {
        return Err(format!("unexpected workflow listing: {}", first.join(", ")).into());
    }
    let second = runner.list_workflows()?;
    if second != first {
        return Err("workflow discovery is not repeatable".into());
    }
    reporter.artifacts().write_json("workflows.json", &first)?;

    reporter.finish(
        "pass",
        vec![format!("discovered {} workflows", first.len())],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "workflows.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[test]
fn dry_run_push_resolves_plan() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("dry_run_push_resolves_plan")?;
    let repo = ActionFixture::new()?;
    let Some(runner) = harness_runner(&repo)? else {
        reporter.finish(
            "skip",
            vec!["act binary unavailable".to_string()],
            vec!["summary.json".to_string(), "summary.md".to_string()],
        )?;
        drop(reporter);
        return Ok(());
    };

    let mut trigger = WorkflowTrigger::push(PushOptions::default());
    apply_image_override(&mut trigger)?;
    let event_kind = trigger.event_kind.clone();
    let result = runner.invoke(planning_request(trigger, Vec::new()))?;

    reporter.artifacts().write_text("act.smoke.stdout.log", &result.stdout)?;
    reporter.artifacts().write_text("act.smoke.stderr.log", &result.stderr)?;
    let transcript = [InvocationRecord::new("dry_run_push", &event_kind, &result)];
    reporter.artifacts().write_json("invocation_transcript.json", &transcript)?;

    if !result.succeeded() {
        return Err(format!("dry run exited with code {}", result.exit_code).into());
    }
    let combined = format!("{}{}", result.stdout, result.stderr);
    if !combined.contains(fixture::JOB_NAME) {
        return Err("dry run output does not mention the fixture job".into());
    }
    if result.stderr.contains("timed out") {
        return Err("dry run unexpectedly reported a timeout".into());
    }

    reporter.finish(
        "pass",
        vec![format!("act exited with code {}", result.exit_code)],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "invocation_transcript.json".to_string(),
            "act.smoke.stdout.log".to_string(),
            "act.smoke.stderr.log".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}
