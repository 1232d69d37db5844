// crates/act-harness-core/src/runtime/launcher.rs
// ============================================================================
// Module: Tokio Command Launcher
// Description: Production subprocess executor with enforced time ceilings.
// Purpose: Run child processes with captured streams and hard timeouts.
// Dependencies: tokio
// ============================================================================

//! ## Overview
//! [`TokioCommandLauncher`] is the production [`CommandLauncher`]. It owns a
//! current-thread tokio runtime so the engine's surface stays synchronous:
//! each launch blocks the calling thread while the runtime drives the child
//! and its output collection under a timeout. Children are spawned with null
//! stdin and piped streams, and are killed when the ceiling elapses.
//!
//! Invariants:
//! - A timed-out child never outlives the launch call.
//! - Children that terminate without an exit code report `-1`.
//! - Streams are decoded lossily; invalid UTF-8 never fails a launch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::process::Stdio;

use tokio::process::Command;
use tokio::runtime::Builder;
use tokio::runtime::Runtime;
use tokio::time::timeout;

use crate::interfaces::CommandLauncher;
use crate::interfaces::LaunchError;
use crate::interfaces::LaunchOutcome;
use crate::interfaces::LaunchRequest;

// ============================================================================
// SECTION: Launcher
// ============================================================================

/// Subprocess executor backed by a private current-thread tokio runtime.
///
/// # Invariants
/// - The runtime is owned exclusively; launches never nest into a caller's
///   async context.
pub struct TokioCommandLauncher {
    /// Runtime driving child processes and their timeouts.
    runtime: Runtime,
}

impl TokioCommandLauncher {
    /// Creates a launcher with a fresh current-thread runtime.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the runtime cannot be initialized.
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            runtime,
        })
    }
}

impl CommandLauncher for TokioCommandLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError> {
        self.runtime.block_on(launch_bounded(request))
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Spawns the child and waits for output under the request's ceiling.
async fn launch_bounded(request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError> {
    let mut command = Command::new(&request.program);
    command.args(&request.args);
    command.envs(&request.env_overrides);
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());
    command.kill_on_drop(true);

    let child = command.spawn().map_err(|source| LaunchError::Spawn {
        program: request.program.clone(),
        source,
    })?;

    let Ok(waited) = timeout(request.timeout, child.wait_with_output()).await else {
        return Ok(LaunchOutcome::TimedOut);
    };
    let output = waited.map_err(|source| LaunchError::Wait {
        program: request.program.clone(),
        source,
    })?;

    Ok(LaunchOutcome::Completed {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
