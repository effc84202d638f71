//! Run configuration.
//!
//! A [Config] is built from command line arguments and passed explicitly to every pipeline.
use std::path::PathBuf;
use std::time::Duration;

use log::warn;

use crate::error::Error;
use crate::io::{corpus_filename, model_filename};
use crate::lang;
use crate::sources::{Retry, Wikipedia};

/// Wait before the first retry of a failed query. The n-th retry waits n times this.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language name, used to name the corpus file.
    pub language: String,
    /// Wikipedia language code (`is`, `ko`...).
    pub language_code: String,
    /// Number of random articles to collect.
    pub article_count: usize,
    pub corpus_path: PathBuf,
    pub model_path: PathBuf,
    /// MediaWiki API url, with an optional `{lang}` placeholder.
    pub api_url: Option<String>,
    /// Attempts per remote query.
    pub retries: usize,
    /// Number of fetching threads.
    pub workers: usize,
    /// Paragraphs with fewer tokens are not written to the corpus.
    pub min_tokens: usize,
}

impl Config {
    /// Default configuration for `language_code`.
    /// The language name is looked up in [lang::LANG], falling back on the code itself.
    pub fn new(language_code: &str) -> Self {
        let language = lang::name(language_code).unwrap_or(language_code);
        Self::with_language(language, language_code)
    }

    /// Default configuration for an explicitly named language.
    pub fn with_language(language: &str, language_code: &str) -> Self {
        Self {
            language: language.to_string(),
            language_code: language_code.to_string(),
            article_count: 1000,
            corpus_path: PathBuf::from(corpus_filename(language)),
            model_path: PathBuf::from(model_filename(language_code)),
            api_url: None,
            retries: 3,
            workers: 1,
            min_tokens: 1,
        }
    }

    /// Check values that would otherwise fail late (or silently) in the pipelines.
    pub fn validate(&self) -> Result<(), Error> {
        if self.article_count == 0 {
            return Err(Error::Config(
                "article count must be a positive integer".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(Error::Config("at least one worker is needed".to_string()));
        }
        if self.language.trim().is_empty() {
            return Err(Error::Config("empty language name".to_string()));
        }

        lang::validate_code(&self.language_code)?;
        if lang::name(&self.language_code).is_none() {
            warn!(
                "unknown language code {:?}, make sure {}.wikipedia.org exists",
                self.language_code, self.language_code
            );
        }

        Ok(())
    }

    pub fn retry(&self) -> Retry {
        Retry::new(self.retries, RETRY_BACKOFF)
    }

    /// Wikipedia client for this configuration.
    pub fn source(&self) -> Result<Wikipedia, Error> {
        match &self.api_url {
            Some(url) => Wikipedia::with_api_url(url),
            None => Wikipedia::new(),
        }
    }
}

impl Default for Config {
    /// Icelandic, 1000 articles.
    fn default() -> Self {
        Self::new("is")
    }
}
