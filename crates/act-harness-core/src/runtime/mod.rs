// crates/act-harness-core/src/runtime/mod.rs
// ============================================================================
// Module: Act Harness Runtime
// Description: Invocation engine, environment synthesis, and process launcher.
// Purpose: Turn trigger descriptors into bounded subprocess executions.
// Dependencies: crate::{core, interfaces, telemetry}, tempfile, tokio
// ============================================================================

//! ## Overview
//! The runtime owns everything between a trigger descriptor and a structured
//! result: argument assembly, synthesized input environment, the temporary
//! event-payload artifact, and bounded subprocess execution.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod inputs;
pub mod launcher;
pub mod runner;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use inputs::INPUT_PREFIX;
pub use inputs::merge_environment;
pub use inputs::synthesized_input_name;
pub use launcher::TokioCommandLauncher;
pub use runner::ActRunner;
pub use runner::DEFAULT_ACT_BINARY;
pub use runner::INVOCATION_TIMEOUT;
pub use runner::InvocationRequest;
pub use runner::RunnerConfig;
pub use runner::RunnerError;
pub use runner::VERSION_PROBE_TIMEOUT;
