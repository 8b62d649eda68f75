use std::io::Write;

use anyhow::Result;

pub fn handle<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", tok_tokens::models::render_listing())?;
    Ok(())
}
