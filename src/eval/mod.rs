pub mod decision;

pub use decision::{Decision, RuleMatch};

use regex::{Regex, RegexBuilder};

use crate::config::Config;

/// One compiled deny pattern, keeping its source for reporting.
struct DenyPattern {
    source: String,
    re: Regex,
}

/// Ordered set of compiled dev-server patterns.
pub struct PatternRegistry {
    patterns: Vec<DenyPattern>,
}

impl PatternRegistry {
    /// Compile every configured pattern, case-insensitively, preserving order.
    pub fn from_config(config: &Config) -> Result<Self, regex::Error> {
        let patterns = config
            .patterns
            .deny
            .iter()
            .map(|source| {
                let re = RegexBuilder::new(source).case_insensitive(true).build()?;
                Ok(DenyPattern {
                    source: source.clone(),
                    re,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    /// Classify a raw command string. The first matching pattern wins.
    pub fn evaluate(&self, command: &str) -> RuleMatch {
        match self.patterns.iter().find(|p| p.re.is_match(command)) {
            Some(hit) => RuleMatch {
                decision: Decision::Deny,
                reason: deny_reason(command),
                pattern: Some(hit.source.clone()),
            },
            None => RuleMatch::allow("no dev-server pattern matched"),
        }
    }
}

/// Reason shown to the agent when a dev-server command is blocked.
pub fn deny_reason(command: &str) -> String {
    format!(
        "⚠️ Development server commands must be run by user, not Claude.\n\n\
         User should run: `{}`\n\n\
         Claude will monitor via log files for debugging.",
        command.trim()
    )
}
