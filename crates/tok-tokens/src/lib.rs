//! Tokenizer engine backed by tiktoken

pub mod models;

use tiktoken_rs::{CoreBPE, DecodeKeyError};
use tok_core::{
    EncodingName, Error, ResolvedEncoding, Result, TokenId, TokenSequence, TokenizerEngine,
};

/// Engine resolving models and encodings to tiktoken's bundled BPE tables
#[derive(Debug, Default, Clone, Copy)]
pub struct TiktokenEngine;

impl TiktokenEngine {
    pub fn new() -> Self {
        Self
    }

    /// Load a known encoding
    pub fn load(&self, name: EncodingName) -> Result<TiktokenEncoding> {
        let bpe = match name {
            EncodingName::O200kBase => tiktoken_rs::o200k_base(),
            EncodingName::Cl100kBase => tiktoken_rs::cl100k_base(),
            EncodingName::P50kBase => tiktoken_rs::p50k_base(),
            EncodingName::P50kEdit => tiktoken_rs::p50k_edit(),
            EncodingName::R50kBase => tiktoken_rs::r50k_base(),
        }?;
        tracing::debug!(encoding = %name, "loaded BPE table");
        Ok(TiktokenEncoding { name, bpe })
    }
}

impl TokenizerEngine for TiktokenEngine {
    type Encoding = TiktokenEncoding;

    fn encoding_for_model(&self, model: &str) -> Result<Option<TiktokenEncoding>> {
        models::encoding_for_model(model)
            .map(|name| self.load(name))
            .transpose()
    }

    fn get_encoding(&self, name: &str) -> Result<Option<TiktokenEncoding>> {
        match name.parse::<EncodingName>() {
            Ok(name) => self.load(name).map(Some),
            Err(Error::UnknownEncoding(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// A loaded tiktoken encoding
pub struct TiktokenEncoding {
    name: EncodingName,
    bpe: CoreBPE,
}

impl TiktokenEncoding {
    pub fn encoding_name(&self) -> EncodingName {
        self.name
    }
}

impl ResolvedEncoding for TiktokenEncoding {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Special-token text is encoded as ordinary text
    fn encode(&self, text: &str) -> TokenSequence {
        self.bpe
            .encode_ordinary(text)
            .into_iter()
            .map(TokenId::from)
            .collect()
    }

    /// Unknown IDs are skipped with a warning
    fn decode_bytes(&self, tokens: &[TokenId]) -> Vec<u8> {
        let ranks: Vec<u32> = tokens
            .iter()
            .filter_map(|&token| match u32::try_from(token) {
                Ok(rank) => Some(rank),
                Err(_) => {
                    tracing::warn!(token, "skipping token ID outside the vocabulary");
                    None
                }
            })
            .collect();

        let known = match self.bpe.decode(&ranks) {
            Ok(text) => return text.into_bytes(),
            Err(e) if e.is::<DecodeKeyError>() => ranks
                .into_iter()
                .filter(|&rank| self.is_known(rank))
                .collect(),
            // Every ID is known; the joined bytes are just not valid UTF-8
            Err(_) => ranks,
        };

        self.bpe._decode_native_and_split(known).flatten().collect()
    }
}

impl TiktokenEncoding {
    fn is_known(&self, rank: u32) -> bool {
        match self.bpe.decode(&[rank]) {
            Err(e) if e.is::<DecodeKeyError>() => {
                tracing::warn!(token = rank, "skipping token ID outside the vocabulary");
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tok_core::{EncodingOptions, resolve_encoding};

    fn cl100k() -> TiktokenEncoding {
        TiktokenEngine::new().load(EncodingName::Cl100kBase).unwrap()
    }

    #[test]
    fn test_hello_world() {
        let enc = cl100k();
        let tokens = enc.encode("Hello, world!");
        assert_eq!(tokens, vec![9906, 11, 1917, 0]);
        assert_eq!(enc.decode(&tokens), "Hello, world!");
        assert_eq!(enc.decode(&[15339, 11, 1917, 0]), "hello, world!");
    }

    #[test]
    fn test_round_trip_all_encodings() {
        let engine = TiktokenEngine::new();
        let samples = [
            "",
            "Hello, world!",
            "  leading and trailing  \n\n",
            "tabs\tand\r\nnewlines",
            "unicode: héllo wörld, 日本語, emoji 🦀",
            "<|endoftext|> is plain text here",
        ];

        for name in EncodingName::ALL {
            let enc = engine.load(name).unwrap();
            for text in samples {
                let tokens = enc.encode(text);
                assert_eq!(enc.decode(&tokens), text, "{} / {:?}", name, text);
            }
        }
    }

    #[test]
    fn test_encode_deterministic() {
        let enc = cl100k();
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(enc.encode(text), enc.encode(text));
    }

    #[test]
    fn test_decode_skips_unknown_ids() {
        let enc = cl100k();
        assert_eq!(enc.decode(&[9906, -1, 0]), "Hello!");
        assert_eq!(enc.decode(&[9906, 99_999_999, 0]), "Hello!");
        assert_eq!(enc.decode(&[i64::MAX]), "");
    }

    #[test]
    fn test_decode_bytes_split_characters() {
        let enc = cl100k();
        let text = "日本語 🦀 héllo";
        let tokens = enc.encode(text);

        // Per-token bytes need not be valid UTF-8 on their own but join back exactly
        let joined: Vec<u8> = tokens
            .iter()
            .flat_map(|&t| enc.decode_bytes(&[t]))
            .collect();
        assert_eq!(joined, text.as_bytes());
        assert_eq!(enc.decode_bytes(&tokens), text.as_bytes());

        // An unknown ID in the middle does not disturb the joined bytes
        let mut with_gap = tokens.clone();
        with_gap.insert(1, 99_999_999);
        assert_eq!(enc.decode(&with_gap), text);
    }

    #[test]
    fn test_engine_lookups() {
        let engine = TiktokenEngine::new();
        assert_eq!(
            engine.get_encoding("o200k_base").unwrap().unwrap().name(),
            "o200k_base"
        );
        assert!(engine.get_encoding("nope").unwrap().is_none());
        assert_eq!(
            engine.encoding_for_model("gpt-4o").unwrap().unwrap().name(),
            "o200k_base"
        );
        assert!(engine.encoding_for_model("nonexistent-model").unwrap().is_none());
    }

    #[test]
    fn test_every_listed_model_resolves() {
        let engine = TiktokenEngine::new();
        for (encoding, names) in models::MODELS {
            for model in *names {
                let enc = engine.encoding_for_model(model).unwrap().unwrap();
                assert_eq!(enc.encoding_name(), *encoding, "{}", model);
            }
        }
    }

    #[test]
    fn test_model_precedence() {
        let options = EncodingOptions {
            model: Some("gpt-4o".to_string()),
            encoding: "r50k_base".to_string(),
        };
        let enc = resolve_encoding(&TiktokenEngine::new(), &options).unwrap();
        assert_eq!(enc.encoding_name(), EncodingName::O200kBase);
    }
}
