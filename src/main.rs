//! cc-devgate: PreToolUse hook for Claude Code.
//!
//! Reads one JSON event from stdin. Bash commands that would start a
//! development server get a `deny` verdict on stdout; everything else exits 0
//! with no output. Malformed input exits 1 with a diagnostic on stderr.

use std::io::Write;

fn main() {
    cc_devgate::logging::init();

    let stdin = std::io::stdin();
    let verdict = match cc_devgate::run(stdin.lock()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("cc-devgate: {e}");
            std::process::exit(1);
        }
    };

    let Some(output) = verdict else {
        return;
    };

    let line = match output.to_json_line() {
        Ok(line) => line,
        Err(e) => {
            eprintln!("cc-devgate: failed to encode verdict: {e}");
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if writeln!(stdout, "{line}").and_then(|()| stdout.flush()).is_err() {
        std::process::exit(1);
    }
}
