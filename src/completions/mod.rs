//! Shell completion support for fotoreel
//!
//! Generates static completion scripts covering subcommands, flags, and
//! value hints (payload paths, shells, config files).

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}
