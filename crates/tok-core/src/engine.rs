//! Tokenizer engine traits
//!
//! The BPE implementation and the model registry live behind these traits so
//! the CLI can be driven by `tiktoken-rs` in production and by fakes in tests.

use crate::{Result, TokenId, TokenSequence};

/// A concrete tokenization scheme (vocabulary plus merge rules)
pub trait ResolvedEncoding {
    /// Encoding identifier, e.g. `cl100k_base`
    fn name(&self) -> &str;

    /// Encode text into token IDs. Must be deterministic.
    fn encode(&self, text: &str) -> TokenSequence;

    /// Raw bytes for a token sequence, joined across tokens
    ///
    /// IDs outside the vocabulary contribute nothing.
    fn decode_bytes(&self, tokens: &[TokenId]) -> Vec<u8>;

    /// Decode token IDs back into text
    fn decode(&self, tokens: &[TokenId]) -> String {
        String::from_utf8_lossy(&self.decode_bytes(tokens)).into_owned()
    }
}

/// Lookup capability for tokenization schemes
pub trait TokenizerEngine {
    type Encoding: ResolvedEncoding;

    /// Resolve the encoding used by a model. `Ok(None)` if the model is unknown.
    fn encoding_for_model(&self, model: &str) -> Result<Option<Self::Encoding>>;

    /// Resolve an encoding by name. `Ok(None)` if the name is unknown.
    fn get_encoding(&self, name: &str) -> Result<Option<Self::Encoding>>;
}
