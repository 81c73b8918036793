// src/commands/mod.rs
pub mod merge_files;
pub mod paste;
pub mod paste2;
pub mod types;

pub use paste::PasteCommand;
pub use paste2::Paste2Command;
pub use types::{parse_args, Command, CommandContext, CommandResult};
