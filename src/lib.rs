//! cc-devgate: a PreToolUse hook for Claude Code that keeps the agent from
//! starting development servers.
//!
//! The hook reads one tool-invocation event as JSON, and if it is a Bash call
//! whose command matches one of an ordered list of dev-server patterns
//! (`npm run dev`, `yarn start`, `nodemon`, watch modes, ...), it answers with a
//! `deny` verdict telling the human to run the command themselves. Anything
//! else is allowed silently.
//!
//! # Architecture
//!
//! - **[`hook`]** — Wire types: the incoming event and the outgoing verdict.
//! - **[`eval`]** — Pattern registry and decision types.
//! - **[`gate`]** — Tool filter + registry, the whole hook as a function of its input.
//! - **[`config`]** — Embedded default pattern list.
//! - **[`error`]** — The single fatal error: unparseable input.
//! - **[`logging`]** — Opt-in decision log (`CC_DEVGATE_LOG`).

/// Embedded configuration types and loading.
pub mod config;
/// Fatal error type.
pub mod error;
/// Evaluation engine: compiled patterns and decisions.
pub mod eval;
/// The command gate.
pub mod gate;
/// Hook input/output JSON types.
pub mod hook;
/// File-based decision logging.
pub mod logging;

use std::io::Read;

use error::GateError;
use eval::RuleMatch;
use hook::HookOutput;

/// Build the gate from default config and evaluate a command string.
///
/// This is the main entry point for tests and simple usage.
pub fn evaluate(command: &str) -> RuleMatch {
    gate::Gate::default_gate().evaluate(command)
}

/// Run the full hook over one JSON event read from `reader`.
///
/// `Ok(None)` means allow with no output.
pub fn run<R: Read>(reader: R) -> Result<Option<HookOutput>, GateError> {
    gate::Gate::default_gate().run(reader)
}
