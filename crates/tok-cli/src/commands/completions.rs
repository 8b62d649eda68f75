use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

pub fn handle<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "tiktoken", out);
    Ok(())
}
