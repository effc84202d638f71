/*! Corpus collection pipeline

Builds the plain text corpus of a language from random Wikipedia articles.

# Processing
1. Random article titles are requested from the [Source] (fatal on failure, nothing to collect otherwise).
1. Each article's rendered HTML is fetched, with retries. Articles that still fail are skipped.
1. Paragraph (`<p>`) texts are extracted and word-tokenized, tokens being joined by single spaces.
1. Paragraphs go through a [MinTokens] filter that drops empty ones.
1. Remaining paragraphs are written, one per line and in title order, into `<corpus>.part`,
   which is then renamed to the corpus path.

Fetching can be done by several threads (see [crate::config::Config::workers]).
!*/
use std::path::PathBuf;

use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::Config;
use crate::error::Error;
use crate::extract;
use crate::filtering::{Filter, MinTokens};
use crate::io::CorpusWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{Retry, Source};
use crate::tokenize::tokenize_line;

/// Counts of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Articles asked for.
    pub requested: usize,
    /// Articles fetched and parsed.
    pub collected: usize,
    /// Articles that could not be fetched.
    pub skipped: usize,
    /// Paragraphs written to the corpus.
    pub paragraphs: usize,
    /// Paragraphs removed by the filter.
    pub dropped: usize,
}

pub struct Collect<'s, S: Source> {
    source: &'s S,
    lang: String,
    count: usize,
    dst: PathBuf,
    retry: Retry,
    workers: usize,
    filter: MinTokens,
}

impl<'s, S: Source> Collect<'s, S> {
    pub fn new(source: &'s S, config: &Config) -> Self {
        Self {
            source,
            lang: config.language_code.clone(),
            count: config.article_count,
            dst: config.corpus_path.clone(),
            retry: config.retry(),
            workers: config.workers,
            filter: MinTokens::with_min_tokens(config.min_tokens),
        }
    }

    /// Replace the retry policy derived from the configuration.
    pub fn with_retry(mut self, retry: Retry) -> Self {
        self.retry = retry;
        self
    }

    /// Get random titles, without duplicates.
    fn titles(&self) -> Result<Vec<String>, Error> {
        let titles = self.retry.run(&format!("[{}] random titles query", self.lang), || {
            self.source.random_titles(&self.lang, self.count)
        })?;

        let nb_titles = titles.len();
        let titles: Vec<String> = titles.into_iter().unique().collect();
        if titles.len() < nb_titles {
            debug!(
                "[{}] removed {} duplicate titles",
                self.lang,
                nb_titles - titles.len()
            );
        }
        Ok(titles)
    }

    /// Fetch an article and get its tokenized paragraphs.
    fn article(&self, title: &str) -> Result<Vec<String>, Error> {
        let html = self
            .retry
            .run(&format!("[{}] fetching {:?}", self.lang, title), || {
                self.source.rendered_html(title, &self.lang)
            })?;

        Ok(extract::paragraphs(&html)
            .iter()
            .map(|p| tokenize_line(p))
            .collect())
    }

    /// Fetch every article, keeping title order.
    fn articles(&self, titles: &[String]) -> Result<Vec<Result<Vec<String>, Error>>, Error> {
        if self.workers <= 1 {
            return Ok(titles.iter().map(|title| self.article(title)).collect());
        }

        debug!("[{}] fetching with {} workers", self.lang, self.workers);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;
        Ok(pool.install(|| {
            titles
                .par_iter()
                .map(|title| self.article(title))
                .collect()
        }))
    }
}

impl<'s, S: Source> Pipeline<CollectSummary> for Collect<'s, S> {
    fn run(&self) -> Result<CollectSummary, Error> {
        info!(
            "[{}] collecting {} articles into {:?}",
            self.lang, self.count, self.dst
        );

        let titles = self.titles()?;
        info!("[{}] got {} titles", self.lang, titles.len());
        let articles = self.articles(&titles)?;

        let mut summary = CollectSummary {
            requested: self.count,
            ..Default::default()
        };

        let mut writer = CorpusWriter::create(&self.dst)?;
        for (title, article) in titles.iter().zip(articles) {
            match article {
                Ok(paragraphs) => {
                    summary.collected += 1;
                    for paragraph in paragraphs {
                        if self.filter.detect(paragraph.as_str()) {
                            writer.write_line(&paragraph)?;
                            summary.paragraphs += 1;
                        } else {
                            summary.dropped += 1;
                        }
                    }
                }
                Err(e) => {
                    warn!("[{}] skipping {:?}: {}", self.lang, title, e);
                    summary.skipped += 1;
                }
            }
        }
        writer.finish()?;

        info!(
            "[{}] collected {}/{} articles ({} skipped), {} paragraphs ({} dropped)",
            self.lang,
            summary.collected,
            summary.requested,
            summary.skipped,
            summary.paragraphs,
            summary.dropped
        );
        Ok(summary)
    }
}
