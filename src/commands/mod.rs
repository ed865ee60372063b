//! Command implementations for yamato-jobs.
//!
//! This module routes CLI commands to their implementations.

mod generate;
mod reference;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Ref(args) => reference::cmd_ref(args),
        Command::List(args) => reference::cmd_list(args),
    }
}
