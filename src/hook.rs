//! Hook wire types: the PreToolUse event read from stdin and the
//! permission verdict written to stdout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hook event name reported back in every verdict.
pub const PRE_TOOL_USE: &str = "PreToolUse";

/// Input JSON from the hook host. Unknown fields are ignored, and fields of
/// the wrong type read as absent.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub tool_name: Value,
    #[serde(default)]
    pub tool_input: Value,
}

impl HookInput {
    /// Build from any JSON value. A value that is not an object has no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The tool name, or `""` when absent or not a string.
    pub fn tool_name(&self) -> &str {
        self.tool_name.as_str().unwrap_or_default()
    }

    /// The `command` string from `tool_input`, or `""` when absent or not a string.
    pub fn command(&self) -> &str {
        self.tool_input
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: &'static str,
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// A PreToolUse verdict with the given decision and reason.
    pub fn pre_tool_use(decision: &'static str, reason: String) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: PRE_TOOL_USE,
                permission_decision: decision,
                permission_decision_reason: reason,
            },
        }
    }

    /// Serialize as a single line of JSON.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
