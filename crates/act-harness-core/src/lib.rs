// crates/act-harness-core/src/lib.rs
// ============================================================================
// Module: Act Harness Core Library
// Description: Public API surface for the act invocation harness.
// Purpose: Expose trigger descriptors, the invocation engine, and seams.
// Dependencies: crate::{core, interfaces, runtime, telemetry}
// ============================================================================

//! ## Overview
//! Act Harness drives the `act` workflow-runner CLI to exercise a GitHub
//! Action under simulated trigger conditions. It builds the command line and
//! child environment deterministically, bounds every subprocess with a
//! timeout, and reports structured results instead of raw process handles.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::CommandLauncher;
pub use interfaces::LaunchError;
pub use interfaces::LaunchOutcome;
pub use interfaces::LaunchRequest;
pub use runtime::ActRunner;
pub use runtime::DEFAULT_ACT_BINARY;
pub use runtime::INVOCATION_TIMEOUT;
pub use runtime::InvocationRequest;
pub use runtime::RunnerConfig;
pub use runtime::RunnerError;
pub use runtime::TokioCommandLauncher;
pub use runtime::VERSION_PROBE_TIMEOUT;
pub use telemetry::HarnessMetrics;
pub use telemetry::InputCollisionEvent;
pub use telemetry::InvocationMetricEvent;
pub use telemetry::InvocationOutcome;
pub use telemetry::NoopMetrics;
