//! completion command - Generate shell completion scripts

use std::io::{self, Write};

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};

/// Print the completion script for `shell` to stdout.
pub fn completion(root: &Command, shell: Shell) -> Result<()> {
    write_completion(root, shell, &mut io::stdout().lock())
}

/// Write the completion script for the assembled tree to `out`.
pub fn write_completion(root: &Command, shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut command = root.clone();
    let bin_name = command.get_name().to_string();
    generate(shell, &mut command, bin_name, out);
    Ok(())
}
