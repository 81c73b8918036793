// src/commands/paste/mod.rs
use clap::Parser;

use super::merge_files::merge_files;
use crate::commands::{parse_args, Command, CommandContext, CommandResult};
use crate::merge::LemmaRow;

/// Pair each trimmed line of FILE_A with the last tab-separated field of the
/// matching line of FILE_B. Blank lines of FILE_A stay blank.
#[derive(Parser, Debug)]
#[command(name = "paste", version)]
struct PasteArgs {
    /// Tokens, one per line; blank lines separate sentences
    file_a: String,
    /// Tab-separated tagger output aligned with FILE_A
    file_b: String,
}

pub struct PasteCommand;

impl Command for PasteCommand {
    fn name(&self) -> &'static str {
        "paste"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let args: PasteArgs = match parse_args(self.name(), &ctx.args, ctx.stdout) {
            Ok(args) => args,
            Err(result) => return result,
        };
        match merge_files(ctx.fs, ctx.stdout, &args.file_a, &args.file_b, LemmaRow) {
            Ok(_) => CommandResult::success(),
            Err(err) => CommandResult::from_error(self.name(), &err),
        }
    }
}
