use std::process::ExitCode;

use tagpaste::commands::PasteCommand;

fn main() -> ExitCode {
    tagpaste::cli::run(&PasteCommand)
}
