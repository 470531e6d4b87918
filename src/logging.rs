use crate::eval::RuleMatch;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::path::Path;

/// Environment variable naming the decision log file. Unset means no logging.
pub const LOG_ENV: &str = "CC_DEVGATE_LOG";

/// Install the decision logger if `CC_DEVGATE_LOG` is set.
/// Best-effort: failures are silently ignored (logging must never block the hook).
pub fn init() {
    if let Some(path) = std::env::var_os(LOG_ENV) {
        init_file(Path::new(&path));
    }
}

/// Append log records to `path`. Returns whether a logger was installed.
pub fn init_file(path: &Path) -> bool {
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    else {
        return false;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    WriteLogger::init(LevelFilter::Info, config, file).is_ok()
}

/// Record a verdict. A no-op unless a logger was installed.
pub fn log_decision(command: &str, result: &RuleMatch) {
    log::info!("{}", decision_line(command, result));
}

/// Tab-separated decision record: decision, command, pattern, reason.
fn decision_line(command: &str, result: &RuleMatch) -> String {
    // Compact single-line fields (replace newlines with "; ")
    let cmd_truncated: String = command.trim().chars().take(200).collect();
    format!(
        "{decision}\t{cmd}\t{pattern}\t{reason}",
        decision = result.decision.as_str(),
        cmd = cmd_truncated.replace('\n', "; "),
        pattern = result.pattern.as_deref().unwrap_or("-"),
        reason = result.reason.replace('\n', "; "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{Decision, RuleMatch};

    #[test]
    fn allow_line_has_placeholder_pattern() {
        let line = decision_line("ls", &RuleMatch::allow("no match"));
        assert_eq!(line, "allow\tls\t-\tno match");
    }

    #[test]
    fn deny_line_is_single_line() {
        let result = RuleMatch {
            decision: Decision::Deny,
            reason: "first\n\nsecond".into(),
            pattern: Some(r"\bnodemon\b".into()),
        };
        let line = decision_line("cd app\nnodemon", &result);
        assert!(!line.contains('\n'));
        assert!(line.starts_with("deny\tcd app; nodemon\t\\bnodemon\\b\t"));
    }

    #[test]
    fn long_commands_are_truncated() {
        let cmd = "x".repeat(500);
        let line = decision_line(&cmd, &RuleMatch::allow("r"));
        let logged_cmd = line.split('\t').nth(1).unwrap();
        assert_eq!(logged_cmd.len(), 200);
    }

    #[test]
    fn unopenable_path_installs_nothing() {
        assert!(!init_file(Path::new("/nonexistent-dir/cc-devgate/decisions.log")));
    }
}
