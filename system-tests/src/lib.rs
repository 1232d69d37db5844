// system-tests/src/lib.rs
// ============================================================================
// Module: Act Harness System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common utilities for act-harness system-test suites.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the act-harness system-test
//! suites in `system-tests/tests`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
