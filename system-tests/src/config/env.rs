// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-variable configuration for the act harness suites.
// Purpose: Give suites one strict, typed view of their runtime overrides.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Suite configuration comes from `ACT_HARNESS_SYSTEM_TEST_*` variables. Every
//! value is validated up front; invalid UTF-8, empty strings, and malformed
//! booleans fail the load instead of being silently ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment variables recognized by the harness suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional act binary override.
    ActBinary,
    /// Optional container image override for triggers and runners.
    RunnerImage,
    /// Optional run root override.
    RunRoot,
    /// Fail instead of skipping when act is unavailable (`true`/`false` or
    /// `1`/`0`).
    RequireAct,
}

impl SystemTestEnv {
    /// Returns the variable name as it appears in the environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActBinary => "ACT_HARNESS_SYSTEM_TEST_ACT_BIN",
            Self::RunnerImage => "ACT_HARNESS_SYSTEM_TEST_RUNNER_IMAGE",
            Self::RunRoot => "ACT_HARNESS_SYSTEM_TEST_RUN_ROOT",
            Self::RequireAct => "ACT_HARNESS_SYSTEM_TEST_REQUIRE_ACT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Snapshot of the suite overrides in effect at load time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional act binary override.
    pub act_binary: Option<String>,
    /// Optional container image override.
    pub runner_image: Option<String>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Fail instead of skipping when act is unavailable.
    pub require_act: bool,
}

impl SystemTestConfig {
    /// Reads and validates every recognized variable.
    ///
    /// # Errors
    ///
    /// Returns an error when any variable is invalid UTF-8, set but empty, or
    /// fails its own validation (for example, a malformed boolean).
    pub fn load() -> Result<Self, String> {
        let act_binary = read_env_nonempty(SystemTestEnv::ActBinary.as_str())?;
        let runner_image = read_env_nonempty(SystemTestEnv::RunnerImage.as_str())?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let require_act = parse_bool_env(
            SystemTestEnv::RequireAct.as_str(),
            read_env_nonempty(SystemTestEnv::RequireAct.as_str())?,
        )?;
        Ok(Self {
            act_binary,
            runner_image,
            run_root,
            require_act,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable, rejecting values that are not UTF-8.
///
/// # Errors
///
/// Returns an error when the variable is set to invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} contains invalid UTF-8"))
    })
}

/// Reads an environment variable, treating set-but-blank as a mistake.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} is set but empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses an optional boolean variable, defaulting to `false` when unset.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be one of 1, 0, true, false"))
}
