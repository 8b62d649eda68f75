use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no text provided; pass text as an argument or pipe it via stdin")]
    NoText,

    #[error("no token IDs provided; pass token IDs as arguments or pipe them via stdin")]
    NoTokens,

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("invalid token ID {literal:?}")]
    InvalidToken {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no valid token IDs provided")]
    EmptyTokenSequence,

    #[error("failed to read stdin")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_messages_do_not_repeat_cause() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to read stdin");
        assert_eq!(err.source().map(|e| e.to_string()), Some("pipe closed".to_string()));

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("pipe closed").count(), 1, "{}", chain);

        let err = Error::from(anyhow::anyhow!("corrupt vocabulary"));
        assert_eq!(err.to_string(), "corrupt vocabulary");
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain, "corrupt vocabulary");
    }
}
