// crates/act-harness-core/src/core/mod.rs
// ============================================================================
// Module: Act Harness Core Types
// Description: Trigger descriptors and invocation results.
// Purpose: Provide stable, serializable value objects for harness runs.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types describe a simulated workflow trigger and the structured result
//! of one invocation. They carry no engine state: a trigger is built once per
//! scenario, consumed by the runner, and discarded.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod result;
pub mod trigger;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use result::InvocationResult;
pub use result::TIMEOUT_EXIT_CODE;
pub use trigger::DEFAULT_PLATFORM;
pub use trigger::DEFAULT_REPO_NAME;
pub use trigger::DEFAULT_REPO_OWNER;
pub use trigger::DEFAULT_RUNNER_IMAGE;
pub use trigger::PullRequestOptions;
pub use trigger::PushOptions;
pub use trigger::RepoIdentity;
pub use trigger::WorkflowDispatchOptions;
pub use trigger::WorkflowTrigger;
