use std::io::Read;

use serde_json::Value;

use crate::config::Config;
use crate::error::GateError;
use crate::eval::{Decision, PatternRegistry, RuleMatch};
use crate::hook::{HookInput, HookOutput};
use crate::logging;

/// The command gate: tool filter plus compiled pattern registry.
pub struct Gate {
    shell_tool: String,
    registry: PatternRegistry,
}

impl Gate {
    pub fn from_config(config: &Config) -> Result<Self, regex::Error> {
        Ok(Self {
            shell_tool: config.settings.shell_tool.clone(),
            registry: PatternRegistry::from_config(config)?,
        })
    }

    /// Gate built from the embedded default configuration.
    pub fn default_gate() -> Self {
        Self::from_config(&Config::default_config())
            .expect("embedded default patterns must compile")
    }

    /// Classify a raw command string.
    pub fn evaluate(&self, command: &str) -> RuleMatch {
        self.registry.evaluate(command)
    }

    /// Decide on a parsed event. `None` means allow with no output.
    pub fn decide(&self, input: &HookInput) -> Option<HookOutput> {
        if input.tool_name() != self.shell_tool {
            return None;
        }

        let command = input.command();
        let result = self.evaluate(command);
        logging::log_decision(command, &result);

        match result.decision {
            Decision::Deny => Some(HookOutput::pre_tool_use(
                result.decision.as_str(),
                result.reason,
            )),
            Decision::Allow => None,
        }
    }

    /// Read one JSON document and decide on it. Only text that is not JSON fails.
    pub fn run<R: Read>(&self, reader: R) -> Result<Option<HookOutput>, GateError> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(self.decide(&HookInput::from_value(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> Result<Option<HookOutput>, GateError> {
        Gate::default_gate().run(json.as_bytes())
    }

    #[test]
    fn denies_dev_server() {
        let out = run(r#"{"tool_name":"Bash","tool_input":{"command":"npm run dev"}}"#)
            .unwrap()
            .unwrap();
        let verdict = out.hook_specific_output;
        assert_eq!(verdict.hook_event_name, "PreToolUse");
        assert_eq!(verdict.permission_decision, "deny");
        assert!(verdict.permission_decision_reason.contains("npm run dev"));
    }

    #[test]
    fn allows_build() {
        let out = run(r#"{"tool_name":"Bash","tool_input":{"command":"npm run build"}}"#).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn ignores_other_tools() {
        let out = run(r#"{"tool_name":"Read","tool_input":{"command":"npm run dev"}}"#).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn tool_name_is_case_sensitive() {
        let out = run(r#"{"tool_name":"bash","tool_input":{"command":"npm run dev"}}"#).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn missing_command_allows() {
        let out = run(r#"{"tool_name":"Bash"}"#).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = run("not valid json").unwrap_err();
        assert!(matches!(err, GateError::InputParse(_)));
        assert!(err.to_string().starts_with("invalid JSON input:"));
    }

    #[test]
    fn non_string_tool_name_allows() {
        for json in [
            r#"{"tool_name":42,"tool_input":{"command":"npm run dev"}}"#,
            r#"{"tool_name":["Bash"],"tool_input":{"command":"npm run dev"}}"#,
        ] {
            assert!(run(json).unwrap().is_none(), "input: {json}");
        }
    }

    #[test]
    fn non_object_tool_input_allows() {
        for json in [
            r#"{"tool_name":"Read","tool_input":"npm run dev"}"#,
            r#"{"tool_name":"Bash","tool_input":["npm run dev"]}"#,
        ] {
            assert!(run(json).unwrap().is_none(), "input: {json}");
        }
    }

    #[test]
    fn non_object_document_allows() {
        assert!(run("[1, 2]").unwrap().is_none());
        assert!(run("42").unwrap().is_none());
    }

    #[test]
    fn truncated_json_is_an_error() {
        assert!(run(r#"{"tool_name":"Bash","#).is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(run("").is_err());
    }

    #[test]
    fn custom_shell_tool() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            shell_tool = "Shell"
            [patterns]
            deny = ['\bnodemon\b']
        "#,
        )
        .unwrap();
        let gate = Gate::from_config(&config).unwrap();
        let shell = r#"{"tool_name":"Shell","tool_input":{"command":"nodemon app.js"}}"#;
        let bash = r#"{"tool_name":"Bash","tool_input":{"command":"nodemon app.js"}}"#;
        assert!(gate.run(shell.as_bytes()).unwrap().is_some());
        assert!(gate.run(bash.as_bytes()).unwrap().is_none());
    }
}
