pub mod completions;
pub mod count;
pub mod decode;
pub mod encode;
pub mod models;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tok_config::Config;
use tok_core::{EncodingName, EncodingOptions};

use crate::cli::EncodingArgs;

/// Invocation-wide settings; the config file is only read when a command needs it
#[derive(Debug, Clone, Default)]
pub struct Settings {
    config_path: Option<PathBuf>,
}

impl Settings {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Encoding options from flags, falling back to the config file
    ///
    /// The config is not read when `--model` or `--encoding` decides the encoding.
    pub fn encoding_options(&self, args: EncodingArgs) -> Result<EncodingOptions> {
        let model = args.model.filter(|m| !m.is_empty());
        let encoding = match args.encoding {
            Some(encoding) => encoding,
            None if model.is_some() => EncodingName::default().to_string(),
            None => self.load_config()?.encoding,
        };
        Ok(EncodingOptions { model, encoding })
    }

    fn load_config(&self) -> Result<Config> {
        let config = match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("failed to load config")?;
        tracing::debug!(encoding = %config.encoding, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io;

    use tok_core::InputSource;

    use super::Settings;

    /// Stdin attached to a terminal
    pub struct Terminal;

    impl InputSource for Terminal {
        fn is_interactive(&self) -> bool {
            true
        }

        fn read_all(&mut self) -> io::Result<Vec<u8>> {
            panic!("interactive stdin must not be read");
        }
    }

    /// Stdin fed from a pipe
    pub struct Piped(pub &'static [u8]);

    impl InputSource for Piped {
        fn is_interactive(&self) -> bool {
            false
        }

        fn read_all(&mut self) -> io::Result<Vec<u8>> {
            Ok(self.0.to_vec())
        }
    }

    /// Settings backed by a config file that does not exist
    pub fn settings(dir: &tempfile::TempDir) -> Settings {
        Settings::new(Some(dir.path().join("config.toml")))
    }

    pub fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }
}
