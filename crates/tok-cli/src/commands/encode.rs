use std::io::Write;

use anyhow::Result;
use tok_core::{InputSource, ResolvedEncoding, TokenizerEngine, resolve_encoding, resolve_text};

use super::Settings;
use crate::cli::TextArgs;

pub fn handle<E, I, W>(args: TextArgs, settings: &Settings, engine: &E, input: &mut I, out: &mut W) -> Result<()>
where
    E: TokenizerEngine,
    I: InputSource,
    W: Write,
{
    let options = settings.encoding_options(args.encoding)?;
    let text = resolve_text(&args.text, input)?;
    let encoding = resolve_encoding(engine, &options)?;

    let tokens = encoding.encode(&text);
    tracing::debug!(encoding = encoding.name(), count = tokens.len(), "encoded text");

    let line = tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line)?;

    Ok(())
}
