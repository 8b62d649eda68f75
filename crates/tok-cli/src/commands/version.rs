use std::io::Write;

use anyhow::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: Option<&str> = option_env!("TIKTOKEN_BUILD_COMMIT");
const BUILD_DATE: Option<&str> = option_env!("TIKTOKEN_BUILD_DATE");

pub fn handle<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "tiktoken version {}", VERSION)?;
    writeln!(out, "  commit: {}", COMMIT.unwrap_or("none"))?;
    writeln!(out, "  built:  {}", BUILD_DATE.unwrap_or("unknown"))?;
    Ok(())
}
