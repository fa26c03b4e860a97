use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::symspell::Verbosity;

const APP_NAME: &str = "symspell";
const CONFIG_NAME: &str = "config";
const DEFAULT_CORPUS: &str = "big.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_edit_distance: u32,
    /// 0: top suggestion, 1: all of the smallest distance, 2: all within budget
    pub verbosity: Verbosity,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_dictionary: Option<PathBuf>,
    pub listen_addr: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            verbosity: Verbosity::All,
            language: "en".to_string(),
            corpus: None,
            frequency_dictionary: None,
            listen_addr: "127.0.0.1:11000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match confy::load(APP_NAME, Some(CONFIG_NAME)) {
            Ok(config) => Ok(config),
            Err(err) => {
                // Runs before the logger is configured.
                eprintln!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, Some(CONFIG_NAME), self)?;
        Ok(())
    }

    /// The corpus to build from: the configured path, else `big.txt` in the
    /// working directory, else `big.txt` in the user data directory.
    pub fn corpus_path(&self) -> PathBuf {
        if let Some(path) = &self.corpus {
            return path.clone();
        }

        let local = PathBuf::from(DEFAULT_CORPUS);
        if local.exists() {
            return local;
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_NAME).join(DEFAULT_CORPUS))
            .unwrap_or(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellError;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_edit_distance, 2);
        assert_eq!(config.verbosity, Verbosity::All);
        assert_eq!(config.listen_addr, "127.0.0.1:11000");
    }

    #[test]
    fn test_configured_corpus_wins() {
        let config = Config {
            corpus: Some(PathBuf::from("/data/corpus.txt")),
            ..Config::default()
        };
        assert_eq!(config.corpus_path(), PathBuf::from("/data/corpus.txt"));
    }

    #[test]
    fn test_default_corpus_name() {
        let config = Config::default();
        assert!(config.corpus_path().ends_with(DEFAULT_CORPUS));
    }

    #[test]
    fn test_confy_errors_become_config_errors() {
        let err: SpellError = confy::ConfyError::BadConfigDirectory("no home".to_string()).into();
        assert!(matches!(err, SpellError::Config(_)));
        assert!(err.to_string().starts_with("config error:"));
    }
}
