// src/commands/paste2/mod.rs
use clap::Parser;

use super::merge_files::merge_files;
use crate::commands::{parse_args, Command, CommandContext, CommandResult};
use crate::merge::{TagListStyle, TagRow};

/// Pair the first field of each line of FILE_A with every field but the
/// first of the matching line of FILE_B. Blank lines of FILE_A stay blank.
#[derive(Parser, Debug)]
#[command(name = "paste2", version)]
struct Paste2Args {
    /// How the fields taken from FILE_B are written
    #[arg(long, value_enum, default_value_t = TagListStyle::Joined)]
    list_style: TagListStyle,
    /// Tab-separated lines whose first field is the word
    file_a: String,
    /// Tab-separated tagger output aligned with FILE_A
    file_b: String,
}

pub struct Paste2Command;

impl Command for Paste2Command {
    fn name(&self) -> &'static str {
        "paste2"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let args: Paste2Args = match parse_args(self.name(), &ctx.args, ctx.stdout) {
            Ok(args) => args,
            Err(result) => return result,
        };
        log::debug!("paste2 list style: {:?}", args.list_style);
        let format = TagRow::new(args.list_style);
        match merge_files(ctx.fs, ctx.stdout, &args.file_a, &args.file_b, format) {
            Ok(_) => CommandResult::success(),
            Err(err) => CommandResult::from_error(self.name(), &err),
        }
    }
}
