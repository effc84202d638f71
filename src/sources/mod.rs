/*! Article sources

A [Source] gives random article titles for a language and the rendered HTML of an article.
[Wikipedia] queries the MediaWiki API of `<lang>.wikipedia.org`.
!*/
use std::thread;
use std::time::Duration;

use log::warn;

use crate::error::Error;

mod wikipedia;

pub use wikipedia::Wikipedia;

/// Remote article provider.
///
/// Sources are shared between fetching threads, hence the [Sync] bound.
pub trait Source: Sync {
    /// Get `count` random article titles of the `lang` wiki.
    fn random_titles(&self, lang: &str, count: usize) -> Result<Vec<String>, Error>;

    /// Get the rendered HTML of the article `title` of the `lang` wiki.
    fn rendered_html(&self, title: &str, lang: &str) -> Result<String, Error>;
}

/// Bounded retry policy with linear back-off.
#[derive(Debug, Clone, Copy)]
pub struct Retry {
    attempts: usize,
    backoff: Duration,
}

impl Retry {
    /// `attempts` is the total number of tries (at least 1),
    /// the n-th retry waits `n * backoff`.
    pub fn new(attempts: usize, backoff: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            backoff,
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Run `op` until it succeeds or attempts are exhausted, returning the last error.
    pub fn run<T, F>(&self, what: &str, mut op: F) -> Result<T, Error>
    where
        F: FnMut() -> Result<T, Error>,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(v) => return Ok(v),
                Err(e) if attempt < self.attempts => {
                    warn!(
                        "{} failed (attempt {}/{}): {}",
                        what, attempt, self.attempts, e
                    );
                    thread::sleep(self.backoff * attempt as u32);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for Retry {
    /// 3 attempts, 1 second back-off.
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}
