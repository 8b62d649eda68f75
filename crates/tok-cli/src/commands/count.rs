use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use tok_core::{
    EncodingOptions, InputSource, ResolvedEncoding, TokenizerEngine, resolve_encoding,
    resolve_text,
};

use super::Settings;
use crate::cli::{Cli, TextArgs};

pub fn handle<E, I, W>(args: TextArgs, settings: &Settings, engine: &E, input: &mut I, out: &mut W) -> Result<()>
where
    E: TokenizerEngine,
    I: InputSource,
    W: Write,
{
    let options = settings.encoding_options(args.encoding)?;
    run(&args.text, &options, engine, input, out)
}

/// Invocation without a subcommand: help on a bare terminal, otherwise count
pub fn handle_default<E, I, W>(
    args: TextArgs,
    settings: &Settings,
    engine: &E,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    E: TokenizerEngine,
    I: InputSource,
    W: Write,
{
    if args.text.is_empty() && input.is_interactive() {
        Cli::command().write_long_help(out)?;
        return Ok(());
    }
    handle(args, settings, engine, input, out)
}

pub fn run<E, I, W>(text: &[String], options: &EncodingOptions, engine: &E, input: &mut I, out: &mut W) -> Result<()>
where
    E: TokenizerEngine,
    I: InputSource,
    W: Write,
{
    let text = resolve_text(text, input)?;
    let encoding = resolve_encoding(engine, options)?;

    let count = encoding.encode(&text).len();
    tracing::debug!(encoding = encoding.name(), count, "counted tokens");
    writeln!(out, "{}", count)?;

    Ok(())
}
