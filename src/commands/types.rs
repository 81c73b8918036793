// src/commands/types.rs
use std::io::Write;

use clap::Parser;

use crate::error::MergeError;
use crate::fs::FileSystem;

/// Outcome of one command run. Output already went to the context's stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self { stderr: String::new(), exit_code: 0 }
    }

    pub fn with_exit_code(stderr: String, exit_code: i32) -> Self {
        Self { stderr, exit_code }
    }

    pub fn from_error(name: &str, err: &MergeError) -> Self {
        Self::with_exit_code(err.diagnostic(name), err.exit_code())
    }
}

/// Command execution context
pub struct CommandContext<'a> {
    /// Arguments after the program name.
    pub args: Vec<String>,
    pub fs: &'a dyn FileSystem,
    pub stdout: &'a mut dyn Write,
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

/// Parse `args` for the command `name`.
///
/// `--help` and `--version` are written to `stdout` and come back as a
/// successful result, so callers just return whatever `Err` they get.
pub fn parse_args<T: Parser>(
    name: &str,
    args: &[String],
    stdout: &mut dyn Write,
) -> Result<T, CommandResult> {
    let argv = std::iter::once(name).chain(args.iter().map(String::as_str));
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(parsed),
        Err(err) if !err.use_stderr() => match write!(stdout, "{}", err.render()) {
            Ok(()) => Err(CommandResult::success()),
            Err(e) => Err(CommandResult::from_error(name, &MergeError::Output(e))),
        },
        Err(err) => {
            let err = MergeError::Argument(err.render().to_string());
            Err(CommandResult::from_error(name, &err))
        }
    }
}
