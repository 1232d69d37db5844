// crates/act-harness-core/src/runtime/inputs.rs
// ============================================================================
// Module: Simulated Input Synthesis
// Description: Deterministic mapping from action inputs to environment names.
// Purpose: Build the child environment overrides with collision diagnostics.
// Dependencies: crate::telemetry
// ============================================================================

//! ## Overview
//! GitHub delivers action inputs to steps as `INPUT_<KEY>` environment
//! variables with the key upper-cased and hyphens replaced by underscores.
//! This module reproduces that mapping for simulated inputs and merges the
//! result over the trigger's environment variables.
//!
//! Invariants:
//! - The name transformation is deterministic and free of I/O.
//! - Precedence: inherited environment < trigger `env_vars` < synthesized
//!   inputs. The inherited layer is applied by the launcher.
//! - Two inputs mapping to the same synthesized name resolve last-write-wins
//!   in insertion order, and each displacement yields a collision event.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::telemetry::InputCollisionEvent;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable prefix for synthesized action inputs.
pub const INPUT_PREFIX: &str = "INPUT_";

// ============================================================================
// SECTION: Synthesis
// ============================================================================

/// Returns the synthesized environment variable name for an input key.
#[must_use]
pub fn synthesized_input_name(key: &str) -> String {
    format!("{INPUT_PREFIX}{}", key.to_uppercase().replace('-', "_"))
}

/// Merges trigger environment variables with synthesized input variables.
///
/// Inputs are processed in slice order; a later input whose synthesized name
/// matches an earlier one overwrites it and produces a collision event.
/// Synthesized names also overwrite identically named `env_vars` entries,
/// which is expected layering rather than a collision.
#[must_use]
pub fn merge_environment(
    env_vars: &BTreeMap<String, String>,
    inputs: &[(String, String)],
) -> (BTreeMap<String, String>, Vec<InputCollisionEvent>) {
    let mut merged = env_vars.clone();
    let mut synthesized_from: BTreeMap<String, String> = BTreeMap::new();
    let mut collisions = Vec::new();
    for (key, value) in inputs {
        let variable = synthesized_input_name(key);
        if let Some(displaced_key) = synthesized_from.get(&variable) {
            collisions.push(InputCollisionEvent {
                variable: variable.clone(),
                displaced_key: displaced_key.clone(),
                winning_key: key.clone(),
            });
        }
        synthesized_from.insert(variable.clone(), key.clone());
        merged.insert(variable, value.clone());
    }
    (merged, collisions)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
