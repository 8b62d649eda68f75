//! Core input handling and encoding resolution for the tiktoken CLI
//!
//! This crate contains:
//! - Input resolution (arguments or piped stdin into text or token IDs)
//! - Encoding selection (model name or encoding name into a tokenizer)
//! - The engine traits implemented by tokenizer backends

pub mod encoding;
pub mod engine;
pub mod error;
pub mod input;

pub use encoding::{EncodingName, EncodingOptions, resolve_encoding};
pub use engine::{ResolvedEncoding, TokenizerEngine};
pub use error::{Error, Result};
pub use input::{InputSource, StdinSource, resolve_text, resolve_tokens};

/// A single token ID as written by the user
pub type TokenId = i64;

/// Ordered token IDs; position and duplicates are significant
pub type TokenSequence = Vec<TokenId>;
