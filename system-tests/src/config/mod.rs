// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for act-harness system tests.
// Purpose: Provide typed access to suite overrides and defaults.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Suite overrides arrive through the environment and are validated once into
//! a small typed structure shared by every helper.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
pub use env::read_env_strict;
