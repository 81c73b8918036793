use std::process::ExitCode;

use tagpaste::commands::Paste2Command;

fn main() -> ExitCode {
    tagpaste::cli::run(&Paste2Command)
}
