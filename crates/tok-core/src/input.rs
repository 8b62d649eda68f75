//! Input resolution
//!
//! Text and token IDs come either from positional arguments or, when none are
//! given, from piped stdin. An interactive stdin is never read.

use std::io::{self, IsTerminal, Read};

use crate::{Error, Result, TokenId, TokenSequence};

/// Where input is read from when no arguments are given
pub trait InputSource {
    /// True when stdin is a terminal rather than a pipe or file
    fn is_interactive(&self) -> bool;

    /// Read the whole stream to EOF in a single pass
    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

/// Process stdin
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Read all input as text; invalid UTF-8 becomes U+FFFD
fn read_text<I: InputSource>(input: &mut I) -> Result<String> {
    let bytes = input.read_all()?;
    tracing::debug!(bytes = bytes.len(), "read stdin");
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Resolve the text to tokenize
///
/// Arguments are joined with single spaces. Piped input is taken verbatim
/// except for one trailing newline.
pub fn resolve_text<I: InputSource>(args: &[String], input: &mut I) -> Result<String> {
    if !args.is_empty() {
        tracing::debug!(args = args.len(), "reading text from arguments");
        return Ok(args.join(" "));
    }

    if input.is_interactive() {
        return Err(Error::NoText);
    }

    let mut text = read_text(input)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Resolve the token IDs to decode
///
/// Piped input is split on any whitespace. Order is preserved.
pub fn resolve_tokens<I: InputSource>(args: &[String], input: &mut I) -> Result<TokenSequence> {
    let tokens = if !args.is_empty() {
        parse_tokens(args.iter().map(String::as_str))?
    } else {
        if input.is_interactive() {
            return Err(Error::NoTokens);
        }
        let content = read_text(input)?;
        parse_tokens(content.split_whitespace())?
    };

    if tokens.is_empty() {
        return Err(Error::EmptyTokenSequence);
    }
    Ok(tokens)
}

fn parse_tokens<'a>(candidates: impl Iterator<Item = &'a str>) -> Result<TokenSequence> {
    candidates
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<TokenId>().map_err(|source| Error::InvalidToken {
                literal: s.to_string(),
                source,
            })
        })
        .collect()
}
