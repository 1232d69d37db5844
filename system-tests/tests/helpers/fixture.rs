// system-tests/tests/helpers/fixture.rs
// ============================================================================
// Module: Action Fixtures
// Description: Generated action repositories for harness system-tests.
// Purpose: Provide a self-contained composite action and test workflow.
// Dependencies: tempfile
// ============================================================================

//! Generated repositories holding the resolve-ci-vars action under test.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;

/// Workflow file exercised by the suites.
pub const WORKFLOW_FILE: &str = "test-action.yml";

/// Job exercised by the suites.
pub const JOB_NAME: &str = "test-resolve-vars";

/// Composite action resolving CI variables from static and expression inputs.
const ACTION_DEFINITION: &str = r#"name: resolve-ci-vars
description: Resolves CI variables from static and expression inputs.

inputs:
  static_inputs:
    description: Newline-delimited KEY=VALUE pairs resolved verbatim.
    required: false
    default: ""
  jinja_inputs:
    description: Newline-delimited KEY=EXPRESSION pairs resolved by evaluation.
    required: false
    default: ""
  log_outputs:
    description: Whether resolved variables are echoed to the job log.
    required: false
    default: "false"

runs:
  using: composite
  steps:
    - name: Resolve variables
      shell: bash
      run: |
        printf 'static inputs:\n%s\n' "${{ inputs.static_inputs }}"
        printf 'expression inputs:\n%s\n' "${{ inputs.jinja_inputs }}"
        if [ "${{ inputs.log_outputs }}" = "true" ]; then
          printf 'output logging enabled\n'
        fi
"#;

/// Workflow wiring the fixture action to push, pull request, and dispatch.
const TEST_WORKFLOW: &str = r#"name: Test Action
on:
  push:
  pull_request:
  workflow_dispatch:
    inputs:
      pr:
        description: Pull request number to resolve against.
        required: false

jobs:
  test-resolve-vars:
    runs-on: ubuntu-latest
    steps:
      - name: Resolve CI variables
        uses: ./
        with:
          static_inputs: ""
          jinja_inputs: ""
          log_outputs: "true"
"#;

/// Generated action repository rooted in a temporary directory.
pub struct ActionFixture {
    dir: TempDir,
}

impl ActionFixture {
    /// Creates a full fixture: action definition plus the test workflow.
    pub fn new() -> io::Result<Self> {
        let fixture = Self::action_only()?;
        fixture.add_workflow(WORKFLOW_FILE, TEST_WORKFLOW)?;
        Ok(fixture)
    }

    /// Creates a fixture with an action definition but no workflows.
    pub fn action_only() -> io::Result<Self> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("action.yml"), ACTION_DEFINITION)?;
        Ok(Self {
            dir,
        })
    }

    /// Creates an empty repository without an action definition.
    pub fn empty() -> io::Result<Self> {
        let dir = TempDir::new()?;
        Ok(Self {
            dir,
        })
    }

    /// Repository root.
    pub fn repo_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Adds a workflow file with the provided contents.
    pub fn add_workflow(&self, name: &str, contents: &str) -> io::Result<()> {
        let workflows = self.dir.path().join(".github").join("workflows");
        fs::create_dir_all(&workflows)?;
        fs::write(workflows.join(name), contents)?;
        Ok(())
    }
}
