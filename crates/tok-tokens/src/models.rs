//! Model to encoding registry

use tok_core::EncodingName;

/// Known models and the encoding each one uses, grouped by encoding
pub const MODELS: &[(EncodingName, &[&str])] = &[
    (EncodingName::O200kBase, &["gpt-4o", "gpt-4.1", "gpt-4.5"]),
    (
        EncodingName::Cl100kBase,
        &[
            "gpt-4",
            "gpt-3.5-turbo",
            "text-embedding-ada-002",
            "text-embedding-3-small",
            "text-embedding-3-large",
        ],
    ),
    (
        EncodingName::P50kBase,
        &[
            "text-davinci-002",
            "text-davinci-003",
            "code-davinci-002",
            "code-cushman-001",
        ],
    ),
    (
        EncodingName::P50kEdit,
        &["text-davinci-edit-001", "code-davinci-edit-001"],
    ),
    (
        EncodingName::R50kBase,
        &["davinci", "curie", "babbage", "ada"],
    ),
];

/// Exact lookup in the static table
pub fn lookup(model: &str) -> Option<EncodingName> {
    MODELS
        .iter()
        .find(|(_, models)| models.contains(&model))
        .map(|(encoding, _)| *encoding)
}

/// Lookup falling back to tiktoken's own registry (prefixes, fine-tunes)
pub fn encoding_for_model(model: &str) -> Option<EncodingName> {
    if let Some(encoding) = lookup(model) {
        return Some(encoding);
    }

    use tiktoken_rs::tokenizer::Tokenizer;
    match tiktoken_rs::tokenizer::get_tokenizer(model)? {
        Tokenizer::O200kBase => Some(EncodingName::O200kBase),
        Tokenizer::Cl100kBase => Some(EncodingName::Cl100kBase),
        Tokenizer::P50kBase => Some(EncodingName::P50kBase),
        Tokenizer::P50kEdit => Some(EncodingName::P50kEdit),
        Tokenizer::R50kBase | Tokenizer::Gpt2 => Some(EncodingName::R50kBase),
        #[allow(unreachable_patterns)]
        other => {
            tracing::debug!(model, tokenizer = ?other, "unsupported tokenizer for model");
            None
        }
    }
}

/// Render the listing printed by `tiktoken models`
pub fn render_listing() -> String {
    let mut out = String::from("Available Models and Encodings:\n\n");

    for (encoding, models) in MODELS {
        out.push_str(&format!("Encoding: {}\n", encoding));
        for model in *models {
            out.push_str(&format!("  - {}\n", model));
        }
        out.push('\n');
    }

    out.push_str("Available Encodings:\n");
    for encoding in EncodingName::ALL {
        out.push_str(&format!(
            "  - {:<12} ({})\n",
            encoding.as_str(),
            encoding.description()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        assert_eq!(lookup("gpt-4o"), Some(EncodingName::O200kBase));
        assert_eq!(lookup("gpt-4.1"), Some(EncodingName::O200kBase));
        assert_eq!(lookup("gpt-4"), Some(EncodingName::Cl100kBase));
        assert_eq!(lookup("davinci"), Some(EncodingName::R50kBase));
        assert_eq!(lookup("gpt-4o-mini"), None);
    }

    #[test]
    fn test_fallback_lookup() {
        assert_eq!(encoding_for_model("gpt-4o-mini"), Some(EncodingName::O200kBase));
        assert_eq!(encoding_for_model("gpt-3.5-turbo-0301"), Some(EncodingName::Cl100kBase));
        assert_eq!(encoding_for_model("nonexistent-model"), None);
    }

    #[test]
    fn test_models_unique() {
        let mut seen = std::collections::HashSet::new();
        for (_, models) in MODELS {
            for model in *models {
                assert!(seen.insert(*model), "duplicate model {}", model);
            }
        }
    }

    #[test]
    fn test_listing_contents() {
        let listing = render_listing();
        assert!(listing.starts_with("Available Models and Encodings:\n"));
        assert!(listing.contains("Encoding: o200k_base\n  - gpt-4o\n"));
        assert!(listing.contains("  - p50k_edit    (used by edit models)\n"));
        assert!(listing.ends_with("(used by GPT-3 models)\n"));
    }
}
