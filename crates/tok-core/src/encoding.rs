use std::fmt;
use std::str::FromStr;

use crate::{Error, Result, TokenizerEngine};

/// Known BPE encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodingName {
    O200kBase,
    #[default]
    Cl100kBase,
    P50kBase,
    P50kEdit,
    R50kBase,
}

impl EncodingName {
    pub const ALL: [EncodingName; 5] = [
        EncodingName::O200kBase,
        EncodingName::Cl100kBase,
        EncodingName::P50kBase,
        EncodingName::P50kEdit,
        EncodingName::R50kBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingName::O200kBase => "o200k_base",
            EncodingName::Cl100kBase => "cl100k_base",
            EncodingName::P50kBase => "p50k_base",
            EncodingName::P50kEdit => "p50k_edit",
            EncodingName::R50kBase => "r50k_base",
        }
    }

    /// Short description for listings
    pub fn description(&self) -> &'static str {
        match self {
            EncodingName::O200kBase => "newest, used by GPT-4o models",
            EncodingName::Cl100kBase => "used by GPT-4 and GPT-3.5-turbo",
            EncodingName::P50kBase => "used by Codex models",
            EncodingName::P50kEdit => "used by edit models",
            EncodingName::R50kBase => "used by GPT-3 models",
        }
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EncodingName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownEncoding(s.to_string()))
    }
}

/// Per-invocation encoding selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingOptions {
    /// Model name; takes precedence over `encoding` when non-empty
    pub model: Option<String>,
    pub encoding: String,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            model: None,
            encoding: EncodingName::default().to_string(),
        }
    }
}

impl EncodingOptions {
    /// The model to resolve, if any. Empty strings count as absent.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref().filter(|m| !m.is_empty())
    }
}

/// Resolve the tokenization scheme for this invocation
///
/// A model always wins outright: an unknown model is an error even when the
/// encoding name would resolve.
pub fn resolve_encoding<E: TokenizerEngine>(
    engine: &E,
    options: &EncodingOptions,
) -> Result<E::Encoding> {
    if let Some(model) = options.model() {
        let encoding = engine
            .encoding_for_model(model)?
            .ok_or_else(|| Error::UnknownModel(model.to_string()))?;
        tracing::debug!(model, "resolved encoding from model");
        return Ok(encoding);
    }

    let encoding = engine
        .get_encoding(&options.encoding)?
        .ok_or_else(|| Error::UnknownEncoding(options.encoding.clone()))?;
    tracing::debug!(encoding = %options.encoding, "resolved encoding by name");
    Ok(encoding)
}
