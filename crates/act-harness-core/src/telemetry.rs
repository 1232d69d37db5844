// crates/act-harness-core/src/telemetry.rs
// ============================================================================
// Module: Harness Telemetry
// Description: Observability hooks for invocations and input collisions.
// Purpose: Provide metric events and labels without hard dependencies.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for invocation counters,
//! latencies, and synthesized-input collision diagnostics. It is
//! intentionally dependency-light so downstream deployments can plug in
//! Prometheus or OpenTelemetry without redesign. Secret values never appear
//! in events; only names and labels are reported.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Invocation outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum InvocationOutcome {
    /// Child exited with code zero.
    Ok,
    /// Child exited with a non-zero code.
    Failed,
    /// Child exceeded the invocation ceiling.
    TimedOut,
}

impl InvocationOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Failed => "failed",
            Self::TimedOut => "timed_out",
        }
    }
}

// ============================================================================
// SECTION: Metric Events
// ============================================================================

/// Invocation metric event payload.
///
/// # Invariants
/// - `exit_code` matches the result returned to the caller, including the
///   timeout sentinel.
#[derive(Debug, Clone)]
pub struct InvocationMetricEvent {
    /// Workflow file driving the invocation.
    pub workflow_file: String,
    /// Simulated event kind.
    pub event_kind: String,
    /// Outcome classification.
    pub outcome: InvocationOutcome,
    /// Exit code reported to the caller.
    pub exit_code: i32,
}

/// Diagnostic emitted when two inputs synthesize the same variable name.
///
/// # Invariants
/// - `winning_key` is the later input; last write wins in the environment.
#[derive(Debug, Clone)]
pub struct InputCollisionEvent {
    /// Synthesized environment variable name both inputs mapped to.
    pub variable: String,
    /// Input key whose value was displaced.
    pub displaced_key: String,
    /// Input key whose value reached the child environment.
    pub winning_key: String,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for invocations and collision diagnostics.
pub trait HarnessMetrics: Send + Sync {
    /// Records one completed, failed, or timed-out invocation.
    fn record_invocation(&self, event: InvocationMetricEvent, latency: Duration);
    /// Records a synthesized-input name collision.
    fn record_input_collision(&self, event: InputCollisionEvent);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Metrics are intentionally discarded.
pub struct NoopMetrics;

impl HarnessMetrics for NoopMetrics {
    fn record_invocation(&self, _event: InvocationMetricEvent, _latency: Duration) {}

    fn record_input_collision(&self, _event: InputCollisionEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
