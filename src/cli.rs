//! Process entry point shared by the `paste` and `paste2` binaries.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::error::MergeError;
use crate::fs::RealFs;

/// Run `command` against the process arguments, stdout and the real file
/// system. Logging goes to stderr and is off below `warn` unless `RUST_LOG`
/// says otherwise.
pub fn run(command: &dyn Command) -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let fs = RealFs::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = command.execute(CommandContext { args, fs: &fs, stdout: &mut out });
    // Whatever the command wrote must reach the terminal before the diagnostic.
    let result = settle(command.name(), result, out.flush());

    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
    log::debug!("{} exited with {}", command.name(), result.exit_code);
    ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1))
}

/// Fold a failed final flush into an otherwise successful result.
fn settle(name: &str, result: CommandResult, flushed: io::Result<()>) -> CommandResult {
    match flushed {
        Err(e) if result.exit_code == 0 => CommandResult::from_error(name, &MergeError::Output(e)),
        _ => result,
    }
}
