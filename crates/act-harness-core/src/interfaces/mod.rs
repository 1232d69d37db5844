// crates/act-harness-core/src/interfaces/mod.rs
// ============================================================================
// Module: Act Harness Interfaces
// Description: Process-execution seam between the engine and the system.
// Purpose: Define the launcher contract the invocation engine runs through.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The engine never talks to the operating system directly: every subprocess
//! goes through [`CommandLauncher`]. Implementations must bound execution by
//! the request's timeout and report timeouts as an outcome, not an error, so
//! the engine can recover them into sentinel results. Tests substitute
//! recording or scripted launchers through the same seam.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

use thiserror::Error;

// ============================================================================
// SECTION: Launch Request
// ============================================================================

/// One bounded subprocess execution request.
///
/// # Invariants
/// - `env_overrides` layer on top of the inherited process environment; they
///   never replace it wholesale.
/// - `timeout` is a hard ceiling on the child's total runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Program name or path to execute.
    pub program: String,
    /// Arguments in execution order.
    pub args: Vec<String>,
    /// Environment entries applied over the inherited environment.
    pub env_overrides: BTreeMap<String, String>,
    /// Hard ceiling on the child's runtime.
    pub timeout: Duration,
}

// ============================================================================
// SECTION: Launch Outcome
// ============================================================================

/// Result of a launch that got as far as spawning the child.
///
/// # Invariants
/// - `TimedOut` means the child was terminated at the ceiling; no streams are
///   reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Child ran to completion within the ceiling.
    Completed {
        /// Exit status, with `-1` standing in for signal-terminated children.
        exit_code: i32,
        /// Captured standard output decoded as UTF-8 (lossy).
        stdout: String,
        /// Captured standard error decoded as UTF-8 (lossy).
        stderr: String,
    },
    /// Child exceeded the ceiling and was terminated.
    TimedOut,
}

/// Launcher failures that prevented an outcome.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Child process could not be spawned.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program that failed to spawn.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Child output could not be collected.
    #[error("failed to collect output from {program}: {source}")]
    Wait {
        /// Program whose output collection failed.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// SECTION: Launcher Trait
// ============================================================================

/// Bounded subprocess executor.
pub trait CommandLauncher: Send + Sync {
    /// Executes the request and blocks until completion or timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError`] when the child cannot be spawned or its output
    /// cannot be collected. Exceeding the ceiling is reported as
    /// [`LaunchOutcome::TimedOut`], never as an error.
    fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError>;
}
