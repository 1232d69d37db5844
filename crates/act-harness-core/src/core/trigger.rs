// crates/act-harness-core/src/core/trigger.rs
// ============================================================================
// Module: Workflow Trigger Descriptors
// Description: Immutable descriptions of simulated GitHub workflow events.
// Purpose: Provide factory constructors producing canonical event payloads.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`WorkflowTrigger`] describes one simulated event: its kind, JSON
//! payload, secrets, environment variables, and the platform-to-image mapping
//! handed to the runner tool. Factory constructors cover the three event
//! kinds the action under test reacts to and fill the payload shapes GitHub
//! delivers for them.
//!
//! Invariants:
//! - `event_kind` is never empty; every constructor sets it.
//! - Payload and mapping fields are always present, even when empty.
//! - Factories are pure: no clock, no randomness, caller values pass through.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default platform label simulated by triggers.
pub const DEFAULT_PLATFORM: &str = "ubuntu-latest";

/// Default runner container image (medium-size act image).
pub const DEFAULT_RUNNER_IMAGE: &str = "catthehacker/ubuntu:act-latest";

/// Placeholder owner for the default repository identity.
pub const DEFAULT_REPO_OWNER: &str = "aaronsteers";

/// Placeholder name for the default repository identity.
pub const DEFAULT_REPO_NAME: &str = "resolve-ci-vars-action";

/// Placeholder sha reported as the pre-push state in push payloads.
const PUSH_BEFORE_PLACEHOLDER: &str = "000000";

// ============================================================================
// SECTION: Repository Identity
// ============================================================================

/// Owner and name of the repository a simulated event belongs to.
///
/// # Invariants
/// - `full_name()` is always `"<owner>/<name>"` for the stored parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    /// Repository owner login.
    pub owner: String,
    /// Repository name without the owner prefix.
    pub name: String,
}

impl RepoIdentity {
    /// Creates a repository identity from owner and name parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns the `owner/name` form used in event payloads.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns the `repository` payload sub-object for this identity.
    #[must_use]
    pub fn payload_value(&self) -> Value {
        json!({
            "name": self.name,
            "full_name": self.full_name(),
            "owner": { "login": self.owner },
        })
    }
}

impl Default for RepoIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_OWNER, DEFAULT_REPO_NAME)
    }
}

// ============================================================================
// SECTION: Trigger Descriptor
// ============================================================================

/// Immutable description of one simulated workflow event.
///
/// # Invariants
/// - `event_kind` is non-empty.
/// - Collections are present even when empty; no field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTrigger {
    /// Simulated event kind (for example `push` or `pull_request`).
    pub event_kind: String,
    /// Simulated event body serialized to the runner's event file.
    pub event_payload: Map<String, Value>,
    /// Simulated secrets injected through secret flags.
    pub secrets: BTreeMap<String, String>,
    /// Simulated environment variables layered over the inherited environment.
    pub env_vars: BTreeMap<String, String>,
    /// Platform label the workflow believes it runs on.
    pub platform: String,
    /// Container image emulating the platform label.
    pub image: String,
}

impl WorkflowTrigger {
    /// Creates a trigger with the given kind and empty payload and mappings.
    #[must_use]
    pub fn new(event_kind: impl Into<String>) -> Self {
        Self {
            event_kind: event_kind.into(),
            event_payload: Map::new(),
            secrets: BTreeMap::new(),
            env_vars: BTreeMap::new(),
            platform: DEFAULT_PLATFORM.to_string(),
            image: DEFAULT_RUNNER_IMAGE.to_string(),
        }
    }

    /// Creates a `push` trigger with the canonical push payload shape.
    #[must_use]
    pub fn push(options: PushOptions) -> Self {
        let mut payload = Map::new();
        payload.insert("ref".to_string(), Value::String(options.git_ref));
        payload.insert("after".to_string(), Value::String(options.sha));
        payload.insert("before".to_string(), Value::String(PUSH_BEFORE_PLACEHOLDER.to_string()));
        payload.insert("repository".to_string(), options.repo.payload_value());
        merge_extra(&mut payload, options.extra);

        let mut trigger = Self::new("push");
        trigger.event_payload = payload;
        trigger
    }

    /// Creates a `pull_request` trigger with the canonical payload shape.
    #[must_use]
    pub fn pull_request(options: PullRequestOptions) -> Self {
        let mut payload = Map::new();
        payload.insert("action".to_string(), Value::String(options.action));
        payload.insert("number".to_string(), Value::from(options.number));
        payload.insert(
            "pull_request".to_string(),
            json!({
                "number": options.number,
                "base": { "ref": options.base_ref },
                "head": { "ref": options.head_ref },
                "title": options.title,
                "body": options.body,
            }),
        );
        payload.insert("repository".to_string(), options.repo.payload_value());
        merge_extra(&mut payload, options.extra);

        let mut trigger = Self::new("pull_request");
        trigger.event_payload = payload;
        trigger
    }

    /// Creates a `workflow_dispatch` trigger with the canonical payload shape.
    #[must_use]
    pub fn workflow_dispatch(options: WorkflowDispatchOptions) -> Self {
        let mut payload = Map::new();
        payload.insert("inputs".to_string(), Value::Object(options.inputs));
        payload.insert("repository".to_string(), options.repo.payload_value());
        merge_extra(&mut payload, options.extra);

        let mut trigger = Self::new("workflow_dispatch");
        trigger.event_payload = payload;
        trigger
    }
}

/// Merges caller-supplied payload keys, overriding factory-provided values.
fn merge_extra(payload: &mut Map<String, Value>, extra: Map<String, Value>) {
    for (key, value) in extra {
        payload.insert(key, value);
    }
}

// ============================================================================
// SECTION: Factory Options
// ============================================================================

/// Options for [`WorkflowTrigger::push`].
///
/// # Invariants
/// - Defaults reproduce the placeholder push payload exactly.
#[derive(Debug, Clone)]
pub struct PushOptions {
    /// Fully qualified ref that received the push.
    pub git_ref: String,
    /// Head commit sha after the push.
    pub sha: String,
    /// Repository identity embedded in the payload.
    pub repo: RepoIdentity,
    /// Additional top-level payload keys merged last (they win on conflict).
    pub extra: Map<String, Value>,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            git_ref: "refs/heads/main".to_string(),
            sha: "abc123".to_string(),
            repo: RepoIdentity::default(),
            extra: Map::new(),
        }
    }
}

/// Options for [`WorkflowTrigger::pull_request`].
///
/// # Invariants
/// - Defaults reproduce the placeholder pull-request payload exactly.
#[derive(Debug, Clone)]
pub struct PullRequestOptions {
    /// Pull-request action (for example `opened` or `synchronize`).
    pub action: String,
    /// Pull-request number.
    pub number: u64,
    /// Base branch ref without the `refs/heads/` prefix.
    pub base_ref: String,
    /// Head branch ref without the `refs/heads/` prefix.
    pub head_ref: String,
    /// Pull-request title.
    pub title: String,
    /// Pull-request body text.
    pub body: String,
    /// Repository identity embedded in the payload.
    pub repo: RepoIdentity,
    /// Additional top-level payload keys merged last (they win on conflict).
    pub extra: Map<String, Value>,
}

impl Default for PullRequestOptions {
    fn default() -> Self {
        Self {
            action: "opened".to_string(),
            number: 1,
            base_ref: "main".to_string(),
            head_ref: "feature-branch".to_string(),
            title: "Test PR".to_string(),
            body: "Test PR body".to_string(),
            repo: RepoIdentity::default(),
            extra: Map::new(),
        }
    }
}

/// Options for [`WorkflowTrigger::workflow_dispatch`].
///
/// # Invariants
/// - Defaults produce an empty `inputs` mapping, never a missing one.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDispatchOptions {
    /// Simulated dispatch inputs embedded in the payload.
    pub inputs: Map<String, Value>,
    /// Repository identity embedded in the payload.
    pub repo: RepoIdentity,
    /// Additional top-level payload keys merged last (they win on conflict).
    pub extra: Map<String, Value>,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
