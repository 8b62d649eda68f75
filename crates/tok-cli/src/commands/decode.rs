use std::io::Write;

use anyhow::Result;
use tok_core::{InputSource, ResolvedEncoding, TokenizerEngine, resolve_encoding, resolve_tokens};

use super::Settings;
use crate::cli::TokenArgs;

pub fn handle<E, I, W>(args: TokenArgs, settings: &Settings, engine: &E, input: &mut I, out: &mut W) -> Result<()>
where
    E: TokenizerEngine,
    I: InputSource,
    W: Write,
{
    let options = settings.encoding_options(args.encoding)?;
    let tokens = resolve_tokens(&args.tokens, input)?;
    let encoding = resolve_encoding(engine, &options)?;

    // Raw bytes: a sequence may end partway through a multi-byte character
    let bytes = encoding.decode_bytes(&tokens);
    tracing::debug!(encoding = encoding.name(), count = tokens.len(), "decoded tokens");
    out.write_all(&bytes)?;
    writeln!(out)?;

    Ok(())
}
