// crates/act-harness-core/src/core/result.rs
// ============================================================================
// Module: Invocation Results
// Description: Structured outcome of one workflow-runner invocation.
// Purpose: Report exit status and captured streams with derived success.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`InvocationResult`] captures the exit code and text streams of one
//! subprocess run. Success is derived from the exit code so the two can never
//! disagree. Timeouts surface as a sentinel result rather than an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Exit code reported when an invocation exceeds its time ceiling.
pub const TIMEOUT_EXIT_CODE: i32 = -1;

// ============================================================================
// SECTION: Invocation Result
// ============================================================================

/// Outcome of one workflow-runner invocation.
///
/// # Invariants
/// - Success is always derived via [`InvocationResult::succeeded`]; there is
///   no independent flag to fall out of sync with `exit_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    /// Process exit status, or [`TIMEOUT_EXIT_CODE`] on timeout.
    pub exit_code: i32,
    /// Captured standard output, possibly empty.
    pub stdout: String,
    /// Captured standard error, possibly empty.
    pub stderr: String,
}

impl InvocationResult {
    /// Returns `true` when the invocation exited with code zero.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Builds the sentinel result for an invocation that exceeded `ceiling`.
    #[must_use]
    pub fn timed_out(ceiling: Duration) -> Self {
        Self {
            exit_code: TIMEOUT_EXIT_CODE,
            stdout: String::new(),
            stderr: format!("command timed out after {} seconds", ceiling.as_secs()),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
